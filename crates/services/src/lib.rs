//! Business flows that call external collaborators
//!
//! Each external service (currency, shipping, analytics, payment, email,
//! security codes) is reached through a narrow capability trait defined in
//! [`collaborators`]. Flows take those traits as `&dyn` arguments, so the
//! caller decides whether a real provider or a [`mock`] fake answers.
//!
//! - shop: `get_price_in_currency`, `get_shipping_info`, `render_page`, `submit_order`
//! - account: `is_valid_email`, `sign_up`, `login`
//! - fetch: `fetch_data`
//! - live: providers that need no external account
//! - mock: recording fakes

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod account;
pub mod collaborators;
pub mod error;
pub mod fetch;
pub mod live;
pub mod mock;
pub mod shop;

pub use account::{is_valid_email, login, sign_up, WELCOME_MESSAGE};
pub use collaborators::{
    Analytics, ChargeResult, ChargeStatus, CodeGenerator, CreditCard, ExchangeRates, Mailer,
    PaymentGateway, ShippingQuote, ShippingQuotes,
};
pub use error::{FetchError, ServiceError, ServiceResult};
pub use fetch::fetch_data;
pub use live::{RandomCodeGenerator, TracingAnalytics, TracingMailer};
pub use shop::{
    get_price_in_currency, get_shipping_info, render_page, submit_order, Order, OrderOutcome,
};
