//! Error types for collaborator-driven flows
//!
//! A collaborator that fails (network down, provider rejected the call)
//! surfaces as a [`ServiceError`] and is propagated to the caller unchanged.
//! Business outcomes such as a declined card are NOT errors; see
//! [`OrderOutcome`](crate::OrderOutcome).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for collaborator calls
pub type ServiceResult<T> = std::result::Result<T, ServiceError>;

/// Failure reported by an external collaborator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// Payment provider could not process the request
    #[error("Payment service failed: {0}")]
    Payment(String),

    /// Mail transport could not deliver the message
    #[error("Email service failed: {0}")]
    Email(String),
}

/// Rejection produced by [`fetch_data`](crate::fetch_data)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("Fetch failed: {reasons}")]
pub struct FetchError {
    /// Why the fetch was rejected
    pub reasons: String,
}
