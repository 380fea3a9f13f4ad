//! Errors raised while reading configuration or assembling an engine.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// A configuration or ranking file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file was read but is not valid JSON for the expected shape
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The configuration parsed but holds an unusable value
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    /// The strategy name doesn't match any known filter
    #[error("Unknown strategy '{0}' (expected 'content-based' or 'collaborative')")]
    UnknownStrategy(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
