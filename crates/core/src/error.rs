//! Error types shared across the workspace

use thiserror::Error;

/// Assistant errors
#[derive(Error, Debug)]
pub enum Error {
    #[error("Language detection error: {0}")]
    Detection(String),

    #[error("Sentiment scoring error: {0}")]
    Scoring(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result alias using the assistant error type
pub type Result<T> = std::result::Result<T, Error>;
