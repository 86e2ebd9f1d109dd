//! Production collaborators that need no external account
//!
//! Analytics and mail delivery are logged through `tracing`; login codes
//! come from the thread-local RNG.

use crate::collaborators::{Analytics, CodeGenerator, Mailer};
use crate::error::ServiceResult;
use async_trait::async_trait;
use rand::Rng;
use tracing::info;

/// Smallest six-digit login code
pub const LOGIN_CODE_MIN: u32 = 100_000;
/// Exclusive upper bound for generated login codes
pub const LOGIN_CODE_BOUND: u32 = 1_000_000;

/// Six-digit login codes drawn uniformly from `LOGIN_CODE_MIN..LOGIN_CODE_BOUND`
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomCodeGenerator;

impl CodeGenerator for RandomCodeGenerator {
    fn generate_code(&self) -> u32 {
        rand::thread_rng().gen_range(LOGIN_CODE_MIN..LOGIN_CODE_BOUND)
    }
}

/// Analytics sink that emits one `info` event per page view
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAnalytics;

impl Analytics for TracingAnalytics {
    fn track_page_view(&self, path: &str) {
        info!(target: "kata::analytics", path, "Page view");
    }
}

/// Mailer that logs each message instead of delivering it
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingMailer;

#[async_trait]
impl Mailer for TracingMailer {
    async fn send_email(&self, to: &str, message: &str) -> ServiceResult<()> {
        info!(target: "kata::email", to, message, "Sending email");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_codes_have_six_digits() {
        let generator = RandomCodeGenerator;
        for _ in 0..1000 {
            let code = generator.generate_code();
            assert!((LOGIN_CODE_MIN..LOGIN_CODE_BOUND).contains(&code));
            assert_eq!(code.to_string().len(), 6);
        }
    }

    #[test]
    fn test_tracing_analytics_does_not_panic() {
        TracingAnalytics.track_page_view("/home");
    }

    #[tokio::test]
    async fn test_tracing_mailer_always_succeeds() {
        let result = TracingMailer.send_email("user@example.com", "hello").await;
        assert_eq!(result, Ok(()));
    }
}
