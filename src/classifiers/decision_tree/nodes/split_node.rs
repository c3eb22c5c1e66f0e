use crate::classifiers::decision_tree::nodes::Node;
use crate::core::instances::Instance;

/// Edge of a split: the attribute value that leads into `node`.
#[derive(Debug, Clone, PartialEq)]
pub struct Branch {
    pub value: String,
    pub node: Node,
}

impl Branch {
    pub fn new(value: String, node: Node) -> Self {
        Self { value, node }
    }
}

/// Multiway split on a nominal attribute: one child per value observed in
/// the node's training rows, ordered by value.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitNode {
    attribute_index: usize,
    merit: f64,
    depth: usize,
    training_rows: usize,
    children: Vec<Branch>,
}

impl SplitNode {
    pub fn new(
        attribute_index: usize,
        merit: f64,
        depth: usize,
        training_rows: usize,
        children: Vec<Branch>,
    ) -> Self {
        Self {
            attribute_index,
            merit,
            depth,
            training_rows,
            children,
        }
    }

    pub fn attribute_index(&self) -> usize {
        self.attribute_index
    }

    pub fn merit(&self) -> f64 {
        self.merit
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn training_rows(&self) -> usize {
        self.training_rows
    }

    pub fn children(&self) -> &[Branch] {
        &self.children
    }

    pub fn num_children(&self) -> usize {
        self.children.len()
    }

    pub fn child_for_value(&self, value: &str) -> Option<&Branch> {
        self.children.iter().find(|b| b.value == value)
    }

    /// Branch matching the instance's value at the split attribute, if any.
    pub fn child_for_instance(&self, instance: &dyn Instance) -> Option<&Branch> {
        let value = instance.value_at_index(self.attribute_index)?;
        self.child_for_value(value)
    }
}
