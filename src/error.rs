//! Error types
//!
//! The simulation itself cannot fail; only loading configuration can.

use thiserror::Error;

/// Errors raised while loading or validating a [`crate::Config`]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    /// Config file is not valid JSON for the expected shape
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    /// Values parsed but violate a scene constraint
    #[error("invalid config: {0}")]
    Invalid(String),
}
