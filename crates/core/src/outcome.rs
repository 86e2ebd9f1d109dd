//! Tagged validation result
//!
//! Validators report bad input as a value, not as an error. `Outcome` keeps
//! the human-readable reason so callers that match on message text
//! (`/invalid/i`) keep working, while Rust callers can match on the variant.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of validating caller input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Outcome<T> {
    /// Input accepted; carries the computed value
    Valid(T),
    /// Input rejected; carries the reason, always containing "Invalid"
    Invalid(String),
}

impl<T> Outcome<T> {
    /// Build an `Invalid` outcome from any message
    pub fn invalid(reason: impl Into<String>) -> Self {
        Outcome::Invalid(reason.into())
    }

    /// True if the input was accepted
    pub fn is_valid(&self) -> bool {
        matches!(self, Outcome::Valid(_))
    }

    /// True if the input was rejected
    pub fn is_invalid(&self) -> bool {
        matches!(self, Outcome::Invalid(_))
    }

    /// The rejection reason, if any
    pub fn reason(&self) -> Option<&str> {
        match self {
            Outcome::Valid(_) => None,
            Outcome::Invalid(reason) => Some(reason),
        }
    }

    /// The accepted value, discarding any reason
    pub fn valid(self) -> Option<T> {
        match self {
            Outcome::Valid(v) => Some(v),
            Outcome::Invalid(_) => None,
        }
    }

    /// Transform the accepted value, passing rejections through unchanged
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U> {
        match self {
            Outcome::Valid(v) => Outcome::Valid(f(v)),
            Outcome::Invalid(reason) => Outcome::Invalid(reason),
        }
    }

    /// Convert into a `Result` with the reason as the error
    pub fn into_result(self) -> Result<T, String> {
        match self {
            Outcome::Valid(v) => Ok(v),
            Outcome::Invalid(reason) => Err(reason),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Valid(v) => write!(f, "{}", v),
            Outcome::Invalid(reason) => write!(f, "{}", reason),
        }
    }
}
