//! Input validators
//!
//! Validators that take [`Value`] type-check their input themselves: a
//! non-string username or non-numeric age is a rejection, never a panic.
//!
//! ## Message contract
//!
//! Rejections carry text containing `"Invalid"` so existing callers that
//! match on message content keep working.

use crate::rulebook::Rulebook;
use kata_core::{Outcome, Value};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Reported by `validate_user_input` when every field passes
pub const VALIDATION_SUCCESSFUL: &str = "Validation successful";
/// Reason for a username that is not a string or has the wrong length
pub const INVALID_USERNAME: &str = "Invalid username";
/// Reason for an age that is not a number or is out of range
pub const INVALID_AGE: &str = "Invalid age";
/// Reason for a country code with no configured driving age
pub const INVALID_COUNTRY_CODE: &str = "Invalid country code";

/// Shortest password `is_strong_password` accepts
pub const MIN_PASSWORD_LENGTH: usize = 8;

impl Rulebook {
    /// Validate a sign-up form.
    ///
    /// Every violation is reported, username first, joined with `", "`.
    pub fn validate_user_input(&self, username: &Value, age: &Value) -> Outcome<&'static str> {
        let rules = &self.config.user_input;
        let mut errors = Vec::new();

        let username_ok = username
            .as_str()
            .is_some_and(|name| rules.username.contains(name.chars().count()));
        if !username_ok {
            errors.push(INVALID_USERNAME);
        }

        let age_ok = age.as_number().is_some_and(|age| {
            age >= f64::from(rules.min_age) && age <= f64::from(rules.max_age)
        });
        if !age_ok {
            errors.push(INVALID_AGE);
        }

        if errors.is_empty() {
            Outcome::Valid(VALIDATION_SUCCESSFUL)
        } else {
            debug!(target: "kata::rules", ?errors, "User input rejected");
            Outcome::invalid(errors.join(", "))
        }
    }

    /// True iff `username` is a string whose character count lies in the
    /// configured bounds. Non-string input is simply not valid.
    pub fn is_valid_username(&self, username: &Value) -> bool {
        username
            .as_str()
            .is_some_and(|name| self.config.username.contains(name.chars().count()))
    }

    /// Whether someone of `age` may drive in `country_code`.
    ///
    /// Unknown country codes are rejected with `"Invalid country code"`.
    pub fn can_drive(&self, age: u32, country_code: &str) -> Outcome<bool> {
        match self.config.driving_ages.get(country_code) {
            Some(&minimum) => Outcome::Valid(age >= minimum),
            None => {
                debug!(target: "kata::rules", country_code, "Unknown country code");
                Outcome::invalid(INVALID_COUNTRY_CODE)
            }
        }
    }
}

/// Validate a sign-up form against the standard rules.
/// See [`Rulebook::validate_user_input`].
pub fn validate_user_input(
    username: impl Into<Value>,
    age: impl Into<Value>,
) -> Outcome<&'static str> {
    Rulebook::standard().validate_user_input(&username.into(), &age.into())
}

/// Username check against the standard bounds (5 to 15 characters).
pub fn is_valid_username(username: impl Into<Value>) -> bool {
    Rulebook::standard().is_valid_username(&username.into())
}

/// Driving-age check against the standard jurisdictions (US 16, UK 17).
pub fn can_drive(age: u32, country_code: &str) -> Outcome<bool> {
    Rulebook::standard().can_drive(age, country_code)
}

/// True iff `min <= price <= max`
pub fn is_price_in_range(price: f64, min: f64, max: f64) -> bool {
    price >= min && price <= max
}

/// At least eight characters with an ASCII uppercase letter, an ASCII
/// lowercase letter and a digit.
pub fn is_strong_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LENGTH
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_digit())
}

// ============================================================================
// Product publishing
// ============================================================================

/// Product draft submitted for publishing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Display name; required and non-empty
    pub name: Option<String>,
    /// Price; required and positive
    pub price: Option<f64>,
}

/// Why a product draft was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProductRejection {
    /// Name absent or empty
    #[error("Name is missing")]
    InvalidName,
    /// Price absent, zero or negative
    #[error("Price is missing")]
    InvalidPrice,
}

impl ProductRejection {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            ProductRejection::InvalidName => "invalid_name",
            ProductRejection::InvalidPrice => "invalid_price",
        }
    }
}

/// Message returned for an accepted product
pub const PRODUCT_PUBLISHED: &str = "Product was successfully published";

/// Publish a product draft, checking the name before the price.
pub fn create_product(product: &Product) -> Result<&'static str, ProductRejection> {
    if product.name.as_deref().map_or(true, str::is_empty) {
        return Err(ProductRejection::InvalidName);
    }
    if !product.price.is_some_and(|price| price > 0.0) {
        return Err(ProductRejection::InvalidPrice);
    }
    Ok(PRODUCT_PUBLISHED)
}
