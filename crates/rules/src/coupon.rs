//! Coupon catalog and discount calculation

use crate::rulebook::Rulebook;
use kata_core::{Outcome, Value};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Rejection reason for a missing, non-numeric or non-positive price
pub const INVALID_PRICE: &str = "Invalid price";
/// Rejection reason for a discount code that is not a string
pub const INVALID_DISCOUNT_CODE: &str = "Invalid discount code";

/// Immutable catalog entry: a code and the fraction it takes off
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coupon {
    /// Code the customer types in; never empty
    pub code: String,
    /// Fraction removed from the price, strictly between 0 and 1
    pub discount: f64,
}

impl Coupon {
    /// Create a catalog entry
    pub fn new(code: impl Into<String>, discount: f64) -> Self {
        Coupon {
            code: code.into(),
            discount,
        }
    }
}

impl Rulebook {
    /// The coupon catalog, in lookup order
    pub fn coupons(&self) -> &[Coupon] {
        &self.config.coupons
    }

    /// Apply the coupon named by `code` to `price`.
    ///
    /// - `price` must be a positive number, else `Invalid("Invalid price")`
    /// - `code` must be a string, else `Invalid("Invalid discount code")`
    /// - an unknown code leaves the price unchanged
    pub fn calculate_discount(&self, price: &Value, code: &Value) -> Outcome<f64> {
        let price = match price.as_number() {
            Some(p) if p > 0.0 => p,
            _ => {
                debug!(target: "kata::rules", kind = price.type_name(), "Rejected price");
                return Outcome::invalid(INVALID_PRICE);
            }
        };
        let Some(code) = code.as_str() else {
            debug!(target: "kata::rules", kind = code.type_name(), "Rejected discount code");
            return Outcome::invalid(INVALID_DISCOUNT_CODE);
        };

        match self.coupons().iter().find(|c| c.code == code) {
            Some(coupon) => Outcome::Valid(price * (1.0 - coupon.discount)),
            None => {
                debug!(target: "kata::rules", code, "Unknown discount code, price unchanged");
                Outcome::Valid(price)
            }
        }
    }
}

/// The standard coupon catalog
pub fn get_coupons() -> Vec<Coupon> {
    Rulebook::standard().coupons().to_vec()
}

/// Apply a standard-catalog coupon to `price`. See [`Rulebook::calculate_discount`].
pub fn calculate_discount(price: impl Into<Value>, code: impl Into<Value>) -> Outcome<f64> {
    Rulebook::standard().calculate_discount(&price.into(), &code.into())
}
