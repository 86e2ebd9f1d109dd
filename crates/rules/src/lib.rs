//! Validators, discount calculators and date-gated business rules
//!
//! Every rule is a pure function of its inputs plus, for the schedule
//! rules, an injected [`Clock`](kata_core::Clock). Rules read their bounds
//! from a [`RulesConfig`]; the free functions use the reference defaults.
//!
//! - coupon: catalog lookup and `calculate_discount`
//! - validate: user input, usernames, price range, driving age, passwords, products
//! - schedule: `is_online`, `get_discount`
//! - intro: warm-up exercises (`max`, `fizz_buzz`, `calculate_average`, `factorial`)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod coupon;
pub mod error;
pub mod intro;
pub mod rulebook;
pub mod schedule;
pub mod validate;

pub use config::{BusinessHours, HolidayDiscount, LengthBounds, RulesConfig, UserInputRules};
pub use coupon::{calculate_discount, get_coupons, Coupon};
pub use error::{ConfigError, ConfigResult};
pub use intro::{calculate_average, factorial, fizz_buzz, max};
pub use rulebook::Rulebook;
pub use schedule::{get_discount, is_online};
pub use validate::{
    can_drive, create_product, is_price_in_range, is_strong_password, is_valid_username,
    validate_user_input, Product, ProductRejection,
};
