//! Capability traits for external collaborators
//!
//! Each collaborator is a narrow trait so flows can be wired to a real
//! provider in production and to a recording fake (see [`mock`](crate::mock))
//! in tests.
//!
//! Thread safety: every trait requires `Send + Sync` so implementations can
//! be shared across tasks.

use crate::error::ServiceResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Currency exchange rates
pub trait ExchangeRates: Send + Sync {
    /// Units of `to_currency` one unit of `from_currency` buys
    fn get_exchange_rate(&self, from_currency: &str, to_currency: &str) -> f64;
}

/// Quote returned by a shipping provider
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShippingQuote {
    /// Shipping cost in dollars
    pub cost: f64,
    /// Estimated delivery time in days
    pub estimated_days: u32,
}

/// Shipping quotes
pub trait ShippingQuotes: Send + Sync {
    /// Quote for shipping to `destination`, or `None` if it is not served
    fn get_shipping_quote(&self, destination: &str) -> Option<ShippingQuote>;
}

/// Page-view analytics. Fire-and-forget: tracking never fails the caller.
pub trait Analytics: Send + Sync {
    /// Record a view of `path`
    fn track_page_view(&self, path: &str);
}

/// Card details handed to the payment provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditCard {
    /// Card number as entered
    pub number: String,
}

impl CreditCard {
    /// Card with the given number
    pub fn new(number: impl Into<String>) -> Self {
        CreditCard {
            number: number.into(),
        }
    }
}

/// Provider's verdict on a charge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChargeStatus {
    /// Funds captured
    Success,
    /// Charge declined
    Failed,
}

/// Result of a charge the provider processed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeResult {
    /// Whether the charge went through
    pub status: ChargeStatus,
}

/// Payment provider
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Charge `amount` to `card`.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Payment` if the provider could not process the
    /// request. A declined card is `Ok` with `ChargeStatus::Failed`.
    async fn charge(&self, card: &CreditCard, amount: f64) -> ServiceResult<ChargeResult>;
}

/// Outgoing mail
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Deliver `message` to `to`.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Email` if the message could not be handed off.
    async fn send_email(&self, to: &str, message: &str) -> ServiceResult<()>;
}

/// One-time login codes
pub trait CodeGenerator: Send + Sync {
    /// A fresh code
    fn generate_code(&self) -> u32;
}
