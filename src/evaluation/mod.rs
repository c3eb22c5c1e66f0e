mod error;
mod evaluators;
mod measurement;
mod outcome;
mod report;

pub use error::EvaluationError;
pub use evaluators::{BasicClassificationEvaluator, PerformanceEvaluator};
pub use measurement::Measurement;
pub use outcome::ClassificationOutcome;
pub use report::EvaluationReport;
