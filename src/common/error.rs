// Error types shared across the crate

use thiserror::Error;

/// Failures of a single HTTP exchange.
///
/// The form senders fold these into `RequestOutcome::Failure`; only the
/// raw fetch path hands them back to the caller.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    #[error("Body error: {0}")]
    Body(String),
}

impl From<reqwest::Error> for DispatchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_builder() {
            DispatchError::InvalidUrl(e.to_string())
        } else if e.is_body() || e.is_decode() {
            DispatchError::Body(e.to_string())
        } else {
            DispatchError::Transport(e.to_string())
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: String, value: String },
}
