use std::fmt::{Display, Formatter, Result};

/// Shape of a built tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeSummary {
    pub nodes: usize,
    pub splits: usize,
    pub leaves: usize,
    pub unresolved: usize,
    pub max_depth: usize,
}

impl Display for TreeSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "nodes={}, splits={}, leaves={}, unresolved={}, depth={}",
            self.nodes, self.splits, self.leaves, self.unresolved, self.max_depth
        )
    }
}
