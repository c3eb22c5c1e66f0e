use crate::classifiers::decision_tree::nodes::{Branch, LeafNode, SplitNode, UnresolvedNode};

/// A node of the induced tree. Each node exclusively owns its children.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Leaf(LeafNode),
    Split(SplitNode),
    Unresolved(UnresolvedNode),
}

impl Node {
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf(n) => n.depth(),
            Node::Split(n) => n.depth(),
            Node::Unresolved(n) => n.depth(),
        }
    }

    pub fn training_rows(&self) -> usize {
        match self {
            Node::Leaf(n) => n.training_rows(),
            Node::Split(n) => n.training_rows(),
            Node::Unresolved(n) => n.training_rows(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    pub fn children(&self) -> &[Branch] {
        match self {
            Node::Split(n) => n.children(),
            Node::Leaf(_) | Node::Unresolved(_) => &[],
        }
    }

    /// Short label used when rendering the tree.
    pub fn describe(&self) -> String {
        match self {
            Node::Leaf(n) => format!("{} ({})", n.label(), n.training_rows()),
            Node::Split(n) => format!("split on {} ({})", n.attribute_index(), n.training_rows()),
            Node::Unresolved(n) => format!("unresolved: {} ({})", n.reason(), n.training_rows()),
        }
    }
}
