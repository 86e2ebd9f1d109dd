//! Account flows: sign-up and one-time-code login

use crate::collaborators::{CodeGenerator, Mailer};
use crate::error::ServiceResult;
use tracing::debug;

/// Message sent to every new account
pub const WELCOME_MESSAGE: &str = "Welcome aboard!";

/// Shortest accepted top-level domain
const MIN_TLD_LENGTH: usize = 2;

/// Check an address has the shape `local@domain.tld`.
///
/// - local part: one or more of `[A-Za-z0-9._%+-]`
/// - domain: one or more of `[A-Za-z0-9.-]`, then a dot
/// - tld: at least two ASCII letters
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, host)) = email.split_once('@') else {
        return false;
    };
    let Some((domain, tld)) = host.rsplit_once('.') else {
        return false;
    };

    let local_ok = !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '%' | '+' | '-'));
    let domain_ok = !domain.is_empty()
        && domain
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-'));
    let tld_ok = tld.len() >= MIN_TLD_LENGTH && tld.chars().all(|c| c.is_ascii_alphabetic());

    local_ok && domain_ok && tld_ok
}

/// Register `email` and send the welcome message.
///
/// Returns `Ok(false)` without sending anything if the address is malformed.
///
/// # Errors
///
/// Propagates any failure from the mailer.
pub async fn sign_up(mailer: &dyn Mailer, email: &str) -> ServiceResult<bool> {
    if !is_valid_email(email) {
        debug!(target: "kata::services", email, "Rejected sign-up address");
        return Ok(false);
    }
    mailer.send_email(email, WELCOME_MESSAGE).await?;
    Ok(true)
}

/// Mail a fresh one-time login code to `email`.
///
/// # Errors
///
/// Propagates any failure from the mailer.
pub async fn login(
    codes: &dyn CodeGenerator,
    mailer: &dyn Mailer,
    email: &str,
) -> ServiceResult<()> {
    let code = codes.generate_code();
    mailer.send_email(email, &code.to_string()).await
}
