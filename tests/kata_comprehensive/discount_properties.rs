//! Discount arithmetic
//!
//! - known code: price * (1 - discount)
//! - unknown code: price unchanged
//! - non-positive or non-numeric price: invalid

use kata::{calculate_discount, get_coupons, is_price_in_range, Outcome, Value};
use proptest::prelude::*;

#[test]
fn test_exact_decimal_expectations() {
    assert_eq!(calculate_discount(10, "SAVE10"), Outcome::Valid(9.0));
    assert_eq!(calculate_discount(10, "SAVE20"), Outcome::Valid(8.0));
}

#[test]
fn test_invalid_messages_match_case_insensitively() {
    for outcome in [
        calculate_discount("10", "SAVE10"),
        calculate_discount(0, "SAVE10"),
        calculate_discount(-1, "SAVE10"),
        calculate_discount(10, 10),
        calculate_discount(Value::Null, "SAVE10"),
    ] {
        assert!(outcome.to_string().to_lowercase().contains("invalid"));
    }
}

#[test]
fn test_price_range_table() {
    assert!(is_price_in_range(0.0, 0.0, 100.0));
    assert!(is_price_in_range(50.0, 0.0, 100.0));
    assert!(is_price_in_range(100.0, 0.0, 100.0));
    assert!(!is_price_in_range(-1.0, 0.0, 100.0));
    assert!(!is_price_in_range(200.0, 0.0, 100.0));
}

proptest! {
    #[test]
    fn prop_known_code_applies_catalog_discount(price in 0.01f64..1_000_000.0) {
        for coupon in get_coupons() {
            let expected = price * (1.0 - coupon.discount);
            prop_assert_eq!(
                calculate_discount(price, coupon.code.as_str()),
                Outcome::Valid(expected)
            );
        }
    }

    #[test]
    fn prop_unknown_code_keeps_price(price in 0.01f64..1_000_000.0, code in "[a-z]{1,12}") {
        prop_assert_eq!(calculate_discount(price, code), Outcome::Valid(price));
    }

    #[test]
    fn prop_non_positive_price_is_invalid(price in -1_000_000.0f64..=0.0) {
        prop_assert!(calculate_discount(price, "SAVE10").is_invalid());
    }
}
