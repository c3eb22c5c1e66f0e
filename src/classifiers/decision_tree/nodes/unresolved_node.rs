use strum_macros::{Display, IntoStaticStr};

/// Why growth stopped at a node without assigning a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum StopReason {
    /// No training row reached the node.
    EmptyPartition,
    /// Rows still disagree but every attribute has been used.
    AttributesExhausted,
    /// No available attribute produced a candidate split.
    NoCandidate,
}

/// A node that stopped growing without a classification. Rows routed here
/// at prediction time are reported as unclassified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedNode {
    reason: StopReason,
    depth: usize,
    training_rows: usize,
}

impl UnresolvedNode {
    pub fn new(reason: StopReason, depth: usize, training_rows: usize) -> Self {
        Self {
            reason,
            depth,
            training_rows,
        }
    }

    pub fn reason(&self) -> StopReason {
        self.reason
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn training_rows(&self) -> usize {
        self.training_rows
    }
}
