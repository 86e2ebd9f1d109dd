//! Storefront flows: pricing, shipping, page rendering and checkout

use crate::collaborators::{
    Analytics, ChargeStatus, CreditCard, ExchangeRates, PaymentGateway, ShippingQuotes,
};
use crate::error::ServiceResult;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Currency every catalog price is quoted in
pub const BASE_CURRENCY: &str = "USD";
/// Returned by `get_shipping_info` when no quote is available
pub const SHIPPING_UNAVAILABLE: &str = "Shipping Unavailable";
/// Path `render_page` reports to analytics
pub const HOME_PATH: &str = "/home";
/// Markup `render_page` returns
pub const HOME_CONTENT: &str = "<div>content</div>";
/// Error code for a declined charge
pub const PAYMENT_ERROR: &str = "payment_error";

/// Convert a `BASE_CURRENCY` price into `currency`
pub fn get_price_in_currency(rates: &dyn ExchangeRates, price: f64, currency: &str) -> f64 {
    let rate = rates.get_exchange_rate(BASE_CURRENCY, currency);
    price * rate
}

/// Human-readable shipping summary for `destination`
pub fn get_shipping_info(quotes: &dyn ShippingQuotes, destination: &str) -> String {
    match quotes.get_shipping_quote(destination) {
        Some(quote) => format!(
            "Shipping Cost: ${} ({} Days)",
            quote.cost, quote.estimated_days
        ),
        None => {
            debug!(target: "kata::services", destination, "No shipping quote");
            SHIPPING_UNAVAILABLE.to_string()
        }
    }
}

/// Render the home page, recording the view
pub fn render_page(analytics: &dyn Analytics) -> &'static str {
    analytics.track_page_view(HOME_PATH);
    HOME_CONTENT
}

/// Order awaiting payment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Amount to charge
    pub total_amount: f64,
}

/// What happened at checkout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderOutcome {
    /// True if the charge went through
    pub success: bool,
    /// Error code when `success` is false
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl OrderOutcome {
    /// Successful checkout
    pub fn accepted() -> Self {
        OrderOutcome {
            success: true,
            error: None,
        }
    }

    /// Checkout refused with `code`
    pub fn rejected(code: impl Into<String>) -> Self {
        OrderOutcome {
            success: false,
            error: Some(code.into()),
        }
    }
}

/// Charge the order total to `card`.
///
/// A declined charge is reported as `OrderOutcome { success: false,
/// error: Some("payment_error") }`.
///
/// # Errors
///
/// Propagates any failure from the payment provider.
pub async fn submit_order(
    payments: &dyn PaymentGateway,
    order: &Order,
    card: &CreditCard,
) -> ServiceResult<OrderOutcome> {
    let result = payments.charge(card, order.total_amount).await?;
    match result.status {
        ChargeStatus::Success => Ok(OrderOutcome::accepted()),
        ChargeStatus::Failed => {
            warn!(target: "kata::services", amount = order.total_amount, "Charge declined");
            Ok(OrderOutcome::rejected(PAYMENT_ERROR))
        }
    }
}
