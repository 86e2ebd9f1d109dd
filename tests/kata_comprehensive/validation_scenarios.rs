//! End-to-end validation scenarios

use kata::{can_drive, is_valid_username, validate_user_input, Outcome, Rulebook};

fn message(outcome: Outcome<&str>) -> String {
    outcome.to_string().to_lowercase()
}

#[test]
fn test_sign_up_form_scenarios() {
    assert!(message(validate_user_input("fulan", 27)).contains("success"));
    assert!(message(validate_user_input("", 18)).contains("invalid username"));
    assert!(message(validate_user_input("fulan", 0)).contains("invalid age"));
}

#[test]
fn test_username_limit_is_inclusive() {
    // The limit itself is valid; a doubled-character string of 255 repeats
    // (length 510) is not.
    assert!(validate_user_input("A".repeat(255), 18).is_valid());
    assert!(validate_user_input("AB".repeat(255), 18).is_invalid());
}

#[test]
fn test_is_valid_username_boundaries() {
    let bounds = Rulebook::standard().config().username;
    assert!(is_valid_username("x".repeat(bounds.min)));
    assert!(is_valid_username("x".repeat(bounds.max)));
    assert!(!is_valid_username("x".repeat(bounds.min - 1)));
    assert!(!is_valid_username("x".repeat(bounds.max + 1)));
    assert!(!is_valid_username(()));
    assert!(!is_valid_username(42));
}

#[test]
fn test_driving_age_table() {
    for (age, country, expected) in [
        (15, "US", false),
        (16, "US", true),
        (17, "US", true),
        (16, "UK", false),
        (17, "UK", true),
        (18, "UK", true),
    ] {
        assert_eq!(can_drive(age, country), Outcome::Valid(expected), "{age} in {country}");
    }
    assert!(can_drive(18, "XX").to_string().to_lowercase().contains("invalid"));
}
