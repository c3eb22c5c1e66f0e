use crate::classifiers::decision_tree::nodes::{Node, SplitNode};

/// Where an instance ended up while being filtered down the tree.
///
/// `node` is `None` when the instance stopped at `parent` because none of
/// its branches matched.
#[derive(Debug, Clone, Copy)]
pub struct FoundNode<'a> {
    node: Option<&'a Node>,
    parent: Option<&'a SplitNode>,
    parent_branch: Option<&'a str>,
}

impl<'a> FoundNode<'a> {
    pub fn new(
        node: Option<&'a Node>,
        parent: Option<&'a SplitNode>,
        parent_branch: Option<&'a str>,
    ) -> Self {
        Self {
            node,
            parent,
            parent_branch,
        }
    }

    pub fn get_node(&self) -> Option<&'a Node> {
        self.node
    }

    pub fn get_parent(&self) -> Option<&'a SplitNode> {
        self.parent
    }

    pub fn get_parent_branch(&self) -> Option<&'a str> {
        self.parent_branch
    }
}
