use crate::evaluation::{ClassificationOutcome, Measurement};

/// Accumulates classification outcomes and exposes them as measurements.
pub trait PerformanceEvaluator {
    /// Clears all counters.
    fn reset(&mut self);

    /// Feeds the outcome of one test row.
    fn add_result(&mut self, outcome: ClassificationOutcome);

    /// Returns a snapshot of current metrics. Metrics that are undefined for
    /// the rows seen so far are omitted.
    fn performance(&self) -> Vec<Measurement>;
}
