//! Simulated remote fetch

use crate::error::FetchError;
use tracing::warn;

/// Reason attached to every rejected fetch
pub const FETCH_FAILURE_REASON: &str = "Operation failed";

/// Fetch the remote dataset.
///
/// Models a network call whose backend is down: the future always resolves
/// to a [`FetchError`] and never to data.
pub async fn fetch_data() -> Result<Vec<i64>, FetchError> {
    warn!(target: "kata::services", reason = FETCH_FAILURE_REASON, "Fetch rejected");
    Err(FetchError {
        reasons: FETCH_FAILURE_REASON.to_string(),
    })
}
