//! Kata - a worked exercise set of small, well-specified utilities
//!
//! Two independent leaves and one collaborator layer:
//! - [`Stack`]: generic LIFO container whose empty `pop`/`peek` is an error
//! - rules: validators, discount calculators and clock-gated business rules
//! - services: flows that reach currency, shipping, analytics, payment,
//!   email and code-generation collaborators through capability traits
//!
//! # Quick Start
//!
//! ```
//! use kata::{calculate_discount, validate_user_input, Outcome, Stack};
//!
//! let mut stack = Stack::new();
//! stack.push(1);
//! assert_eq!(stack.pop(), Ok(1));
//! assert!(stack.pop().is_err());
//!
//! assert_eq!(calculate_discount(10, "SAVE10"), Outcome::Valid(9.0));
//! assert!(validate_user_input("fulan", 27).is_valid());
//! ```

pub use kata_core::{Clock, Error, FixedClock, Outcome, Result, Stack, SystemClock, Value};

pub use kata_rules::{
    calculate_average, calculate_discount, can_drive, create_product, factorial, fizz_buzz,
    get_coupons, get_discount, is_online, is_price_in_range, is_strong_password,
    is_valid_username, max, validate_user_input, BusinessHours, ConfigError, ConfigResult,
    Coupon, HolidayDiscount, LengthBounds, Product, ProductRejection, Rulebook, RulesConfig,
    UserInputRules,
};

pub use kata_services::{
    fetch_data, get_price_in_currency, get_shipping_info, is_valid_email, login, render_page,
    sign_up, submit_order, Analytics, ChargeResult, ChargeStatus, CodeGenerator, CreditCard,
    ExchangeRates, FetchError, Mailer, Order, OrderOutcome, PaymentGateway, RandomCodeGenerator,
    ServiceError, ServiceResult, ShippingQuote, ShippingQuotes, TracingAnalytics, TracingMailer,
};

/// Recording fakes for every collaborator
pub use kata_services::mock;
