//! Current-time capability
//!
//! Time-dependent rules never read the system clock directly. They take a
//! `&dyn Clock`, so tests can pin the instant with [`FixedClock`].
//!
//! ## Usage
//!
//! ```
//! use chrono::NaiveDate;
//! use kata_core::{Clock, FixedClock};
//!
//! let at = NaiveDate::from_ymd_opt(2024, 7, 7)
//!     .unwrap()
//!     .and_hms_opt(8, 0, 0)
//!     .unwrap();
//! let clock = FixedClock::new(at);
//! assert_eq!(clock.now(), at);
//! ```

use chrono::{Duration, Local, NaiveDateTime};
use parking_lot::Mutex;

/// Source of the current local wall-clock time
pub trait Clock: Send + Sync {
    /// The current instant in local time
    fn now(&self) -> NaiveDateTime;
}

/// Clock backed by the host's local time zone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock frozen at a chosen instant until moved explicitly
#[derive(Debug)]
pub struct FixedClock {
    instant: Mutex<NaiveDateTime>,
}

impl FixedClock {
    /// Freeze time at `instant`
    pub fn new(instant: NaiveDateTime) -> Self {
        FixedClock {
            instant: Mutex::new(instant),
        }
    }

    /// Move the clock to `instant`
    pub fn set(&self, instant: NaiveDateTime) {
        *self.instant.lock() = instant;
    }

    /// Move the clock forward by `by` (backward if negative)
    pub fn advance(&self, by: Duration) {
        let mut instant = self.instant.lock();
        *instant += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        *self.instant.lock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 7, 7)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn test_fixed_clock_is_frozen() {
        let clock = FixedClock::new(at(7, 59));
        assert_eq!(clock.now(), at(7, 59));
        assert_eq!(clock.now(), at(7, 59));
    }

    #[test]
    fn test_fixed_clock_set() {
        let clock = FixedClock::new(at(7, 59));
        clock.set(at(19, 59));
        assert_eq!(clock.now(), at(19, 59));
    }

    #[test]
    fn test_fixed_clock_advance() {
        let clock = FixedClock::new(at(7, 59));
        clock.advance(Duration::minutes(1));
        assert_eq!(clock.now().hour(), 8);
        assert_eq!(clock.now().minute(), 0);
    }

    #[test]
    fn test_system_clock_moves_forward() {
        let clock = SystemClock;
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
    }

    #[test]
    fn test_clock_is_object_safe() {
        let clock: Box<dyn Clock> = Box::new(FixedClock::new(at(12, 0)));
        assert_eq!(clock.now(), at(12, 0));
    }
}
