use crate::classifiers::decision_tree::nodes::{Branch, FoundNode, Node};
use crate::classifiers::decision_tree::TreeSummary;
use crate::classifiers::{Classifier, Prediction};
use crate::core::instance_header::InstanceHeader;
use crate::core::instances::Instance;
use std::collections::VecDeque;
use std::fmt::Write;
use std::sync::Arc;

/// A trained tree together with the header it was induced from.
#[derive(Debug, Clone)]
pub struct DecisionTree {
    header: Arc<InstanceHeader>,
    root: Node,
}

impl DecisionTree {
    pub fn new(header: Arc<InstanceHeader>, root: Node) -> Self {
        Self { header, root }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn header(&self) -> &InstanceHeader {
        &self.header
    }

    /// Follows the instance's values from the root down.
    ///
    /// Stops at the first leaf or unresolved node, or at a split whose
    /// branches do not include the instance's value, in which case the
    /// returned node is `None` and the split is reported as the parent.
    pub fn filter_instance_to_leaf(&self, instance: &dyn Instance) -> FoundNode<'_> {
        let mut node = &self.root;
        let mut parent = None;
        let mut parent_branch = None;

        loop {
            let Node::Split(split) = node else {
                return FoundNode::new(Some(node), parent, parent_branch);
            };
            match split.child_for_instance(instance) {
                Some(branch) => {
                    parent = Some(split);
                    parent_branch = Some(branch.value.as_str());
                    node = &branch.node;
                }
                None => return FoundNode::new(None, Some(split), None),
            }
        }
    }

    pub fn summary(&self) -> TreeSummary {
        let mut summary = TreeSummary::default();
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            summary.nodes += 1;
            summary.max_depth = summary.max_depth.max(node.depth());
            match node {
                Node::Leaf(_) => summary.leaves += 1,
                Node::Unresolved(_) => summary.unresolved += 1,
                Node::Split(split) => {
                    summary.splits += 1;
                    stack.extend(split.children().iter().map(|b| &b.node));
                }
            }
        }
        summary
    }

    /// One line per non-root node in breadth-first order, naming the
    /// parent's split attribute and the value on the incoming edge.
    pub fn structure_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        let mut queue = VecDeque::from([&self.root]);
        while let Some(node) = queue.pop_front() {
            let Node::Split(split) = node else {
                continue;
            };
            for branch in split.children() {
                lines.push(format!(
                    "attribute index: {:>3} ,value: {:>4}",
                    split.attribute_index(),
                    branch.value
                ));
                queue.push_back(&branch.node);
            }
        }
        lines
    }

    /// Indented depth-first rendering using attribute names.
    pub fn render_indented(&self) -> String {
        let mut out = String::new();
        let Node::Split(root) = &self.root else {
            let _ = writeln!(out, ": {}", self.root.describe());
            return out;
        };

        let mut stack: Vec<(usize, &Branch, usize)> = root
            .children()
            .iter()
            .rev()
            .map(|b| (root.attribute_index(), b, 0))
            .collect();

        while let Some((attribute_index, branch, level)) = stack.pop() {
            let name = self.attribute_name(attribute_index);
            out.push_str(&"|   ".repeat(level));
            match &branch.node {
                Node::Split(split) => {
                    let _ = writeln!(out, "{name} = {}", branch.value);
                    stack.extend(
                        split
                            .children()
                            .iter()
                            .rev()
                            .map(|b| (split.attribute_index(), b, level + 1)),
                    );
                }
                other => {
                    let _ = writeln!(out, "{name} = {}: {}", branch.value, other.describe());
                }
            }
        }
        out
    }

    fn attribute_name(&self, index: usize) -> &str {
        self.header
            .attribute_at_index(index)
            .map(|a| a.name())
            .unwrap_or("?")
    }
}

impl Classifier for DecisionTree {
    fn predict(&self, instance: &dyn Instance) -> Prediction<'_> {
        let found = self.filter_instance_to_leaf(instance);
        match (found.get_node(), found.get_parent()) {
            (Some(Node::Leaf(leaf)), _) => Prediction::Label(leaf.label()),
            (Some(Node::Unresolved(unresolved)), _) => Prediction::Unresolved(unresolved.reason()),
            (Some(Node::Split(split)), _) => Prediction::NoMatchingBranch {
                attribute_index: split.attribute_index(),
            },
            (None, parent) => Prediction::NoMatchingBranch {
                attribute_index: parent.map_or(0, |split| split.attribute_index()),
            },
        }
    }
}
