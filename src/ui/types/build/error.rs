use crate::streams::StreamError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("missing parameter: {0}")]
    MissingParameter(&'static str),

    #[error(transparent)]
    Stream(#[from] StreamError),
}
