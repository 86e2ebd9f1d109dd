//! Clock-gated rules with the clock pinned

use chrono::{Duration, NaiveDate, NaiveDateTime};
use kata::{get_discount, is_online, FixedClock};

fn at(month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, month, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

#[test]
fn test_online_window() {
    let clock = FixedClock::new(at(7, 7, 7, 59));
    assert!(!is_online(&clock));

    clock.set(at(7, 7, 8, 0));
    assert!(is_online(&clock));

    clock.set(at(7, 7, 19, 59));
    assert!(is_online(&clock));

    clock.advance(Duration::minutes(1));
    assert!(!is_online(&clock));
}

#[test]
fn test_holiday_discount_covers_whole_day() {
    let clock = FixedClock::new(at(12, 25, 0, 0));
    assert_eq!(get_discount(&clock), 0.2);

    clock.set(at(12, 25, 23, 59));
    assert_eq!(get_discount(&clock), 0.2);

    clock.advance(Duration::minutes(1));
    assert_eq!(get_discount(&clock), 0.0);
}
