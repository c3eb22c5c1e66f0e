mod error;
mod train_test_evaluator;

pub use error::TaskError;
pub use train_test_evaluator::TrainTestEvaluator;
