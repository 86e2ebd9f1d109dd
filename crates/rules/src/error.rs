//! Error types for rule configuration
//!
//! Rule evaluation itself never fails: rejected input is an
//! [`Outcome::Invalid`](kata_core::Outcome). Only loading, checking and
//! writing a [`RulesConfig`](crate::RulesConfig) can produce these errors.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Errors raised while loading or saving rule configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read or written
    #[error("I/O error on config file '{path}': {source}")]
    Io {
        /// File that was being accessed
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Config text is not valid TOML for `RulesConfig`
    #[error("Failed to parse rules config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config could not be rendered as TOML
    #[error("Failed to serialize rules config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Config parsed but a value is out of range
    #[error("Invalid rules config: {0}")]
    Invalid(String),
}

impl ConfigError {
    /// Build an `Invalid` error from any message
    pub fn invalid(msg: impl Into<String>) -> Self {
        ConfigError::Invalid(msg.into())
    }
}
