//! Recording fakes for deterministic testing
//!
//! Each fake returns a scripted answer and remembers how it was called, so
//! tests can assert both on the flow's result and on the interaction.

use crate::collaborators::{
    Analytics, ChargeResult, ChargeStatus, CodeGenerator, CreditCard, ExchangeRates, Mailer,
    PaymentGateway, ShippingQuote, ShippingQuotes,
};
use crate::error::{ServiceError, ServiceResult};
use async_trait::async_trait;
use parking_lot::Mutex;

/// Exchange-rate provider that always quotes the same rate
#[derive(Debug)]
pub struct FixedRates {
    rate: f64,
    calls: Mutex<Vec<(String, String)>>,
}

impl FixedRates {
    /// Always quote `rate`
    pub fn new(rate: f64) -> Self {
        FixedRates {
            rate,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// `(from, to)` pairs requested so far, oldest first
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().clone()
    }
}

impl ExchangeRates for FixedRates {
    fn get_exchange_rate(&self, from_currency: &str, to_currency: &str) -> f64 {
        self.calls
            .lock()
            .push((from_currency.to_string(), to_currency.to_string()));
        self.rate
    }
}

/// Shipping provider with one canned answer for every destination
#[derive(Debug)]
pub struct StaticShipping {
    quote: Option<ShippingQuote>,
    destinations: Mutex<Vec<String>>,
}

impl StaticShipping {
    /// Answer every request with `quote`
    pub fn quoting(quote: ShippingQuote) -> Self {
        StaticShipping {
            quote: Some(quote),
            destinations: Mutex::new(Vec::new()),
        }
    }

    /// Serve no destination at all
    pub fn unavailable() -> Self {
        StaticShipping {
            quote: None,
            destinations: Mutex::new(Vec::new()),
        }
    }

    /// Destinations requested so far
    pub fn destinations(&self) -> Vec<String> {
        self.destinations.lock().clone()
    }
}

impl ShippingQuotes for StaticShipping {
    fn get_shipping_quote(&self, destination: &str) -> Option<ShippingQuote> {
        self.destinations.lock().push(destination.to_string());
        self.quote
    }
}

/// Analytics spy
#[derive(Debug, Default)]
pub struct RecordingAnalytics {
    paths: Mutex<Vec<String>>,
}

impl RecordingAnalytics {
    /// Empty spy
    pub fn new() -> Self {
        Self::default()
    }

    /// Paths tracked so far
    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().clone()
    }
}

impl Analytics for RecordingAnalytics {
    fn track_page_view(&self, path: &str) {
        self.paths.lock().push(path.to_string());
    }
}

/// A charge the fake payment provider received
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCharge {
    /// Card that was charged
    pub card: CreditCard,
    /// Amount requested
    pub amount: f64,
}

/// Payment provider with a scripted response
#[derive(Debug)]
pub struct ScriptedPayments {
    response: ServiceResult<ChargeStatus>,
    charges: Mutex<Vec<RecordedCharge>>,
}

impl ScriptedPayments {
    fn with_response(response: ServiceResult<ChargeStatus>) -> Self {
        ScriptedPayments {
            response,
            charges: Mutex::new(Vec::new()),
        }
    }

    /// Accept every charge
    pub fn succeeding() -> Self {
        Self::with_response(Ok(ChargeStatus::Success))
    }

    /// Decline every charge
    pub fn declining() -> Self {
        Self::with_response(Ok(ChargeStatus::Failed))
    }

    /// Fail every request with `ServiceError::Payment(reason)`
    pub fn failing(reason: impl Into<String>) -> Self {
        Self::with_response(Err(ServiceError::Payment(reason.into())))
    }

    /// Charges received so far, oldest first
    pub fn charges(&self) -> Vec<RecordedCharge> {
        self.charges.lock().clone()
    }
}

#[async_trait]
impl PaymentGateway for ScriptedPayments {
    async fn charge(&self, card: &CreditCard, amount: f64) -> ServiceResult<ChargeResult> {
        self.charges.lock().push(RecordedCharge {
            card: card.clone(),
            amount,
        });
        self.response
            .clone()
            .map(|status| ChargeResult { status })
    }
}

/// A message the fake mailer accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentEmail {
    /// Recipient address
    pub to: String,
    /// Message body
    pub message: String,
}

/// Mailer spy
#[derive(Debug, Default)]
pub struct RecordingMailer {
    failure: Option<String>,
    sent: Mutex<Vec<SentEmail>>,
}

impl RecordingMailer {
    /// Mailer that accepts every message
    pub fn new() -> Self {
        Self::default()
    }

    /// Mailer that records the attempt, then fails with `ServiceError::Email(reason)`
    pub fn failing(reason: impl Into<String>) -> Self {
        RecordingMailer {
            failure: Some(reason.into()),
            sent: Mutex::new(Vec::new()),
        }
    }

    /// Messages handed to the mailer so far, oldest first
    pub fn sent(&self) -> Vec<SentEmail> {
        self.sent.lock().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send_email(&self, to: &str, message: &str) -> ServiceResult<()> {
        self.sent.lock().push(SentEmail {
            to: to.to_string(),
            message: message.to_string(),
        });
        match &self.failure {
            Some(reason) => Err(ServiceError::Email(reason.clone())),
            None => Ok(()),
        }
    }
}

/// Code generator that always returns the same code
#[derive(Debug)]
pub struct FixedCode {
    code: u32,
    calls: Mutex<usize>,
}

impl FixedCode {
    /// Always generate `code`
    pub fn new(code: u32) -> Self {
        FixedCode {
            code,
            calls: Mutex::new(0),
        }
    }

    /// Number of codes generated so far
    pub fn calls(&self) -> usize {
        *self.calls.lock()
    }
}

impl CodeGenerator for FixedCode {
    fn generate_code(&self) -> u32 {
        *self.calls.lock() += 1;
        self.code
    }
}
