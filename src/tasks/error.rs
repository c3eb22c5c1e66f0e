use crate::evaluation::EvaluationError;
use crate::streams::StreamError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error(transparent)]
    Stream(#[from] StreamError),

    #[error(transparent)]
    Evaluation(#[from] EvaluationError),

    #[error("failed to write the report: {0}")]
    Output(#[from] std::io::Error),
}
