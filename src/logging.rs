//! Logging setup for the binary.
//!
//! Installs a global tracing subscriber writing to stderr, so stdout only
//! carries the tree listing and the evaluation report.

use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*};

pub const DEFAULT_FILTER: &str = "warn";

/// Errors that may occur while initializing logging.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The configured filter directive could not be parsed.
    #[error("Invalid log filter {directive:?}: {source}")]
    InvalidFilter {
        directive: String,
        source: tracing_subscriber::filter::ParseError,
    },
    /// Failed to set the global tracing subscriber.
    #[error("Failed to install global tracing subscriber: {0}")]
    SetGlobal(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Initialize tracing with `RUST_LOG` if set, `directive` otherwise.
pub fn init(directive: &str) -> Result<(), LoggingError> {
    let env_filter = build_env_filter(directive)?;
    let stderr_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let subscriber = Registry::default().with(env_filter).with(stderr_layer);
    tracing::subscriber::set_global_default(subscriber)?;

    tracing::debug!("Logging initialized");
    Ok(())
}

fn build_env_filter(directive: &str) -> Result<EnvFilter, LoggingError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(directive).map_err(|source| LoggingError::InvalidFilter {
        directive: directive.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_level_and_target_directives() {
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
        assert!(EnvFilter::try_new("c45=debug,warn").is_ok());
    }

    #[test]
    fn rejects_garbage_directive() {
        let err = EnvFilter::try_new("c45=loudest").unwrap_err();
        let wrapped = LoggingError::InvalidFilter {
            directive: "c45=loudest".into(),
            source: err,
        };
        assert!(wrapped.to_string().contains("c45=loudest"));
    }
}
