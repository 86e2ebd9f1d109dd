//! Error types for kata core
//!
//! Only genuinely exceptional states are errors. Bad input to a validator
//! is reported through [`Outcome`](crate::Outcome), never through this type.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use thiserror::Error;

/// Result type alias for kata core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for kata core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// `pop` or `peek` on a stack holding no elements
    #[error("Empty stack")]
    EmptyStack,
}
