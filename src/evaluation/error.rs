use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EvaluationError {
    #[error("no test row could be scored ({unclassified} unclassified)")]
    NoScoredRows { unclassified: u64 },
}
