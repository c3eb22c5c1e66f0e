use std::fmt::{Display, Formatter, Result};

/// Totals of one train/test run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaluationReport {
    pub correct: u64,
    pub wrong: u64,
    pub unclassified: u64,
    /// Percentage of scored rows that were correct.
    pub accuracy: f64,
    pub coverage: f64,
}

impl EvaluationReport {
    pub fn total(&self) -> u64 {
        self.correct + self.wrong + self.unclassified
    }
}

impl Display for EvaluationReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "correct={}, wrong={}, unclassified={}, acc={:.2}%, coverage={:.4}",
            self.correct, self.wrong, self.unclassified, self.accuracy, self.coverage
        )
    }
}
