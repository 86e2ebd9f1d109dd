//! Date-gated business rules
//!
//! Both rules observe the current local time through an injected
//! [`Clock`]; neither reads the system time on its own.

use crate::rulebook::Rulebook;
use chrono::{Datelike, Timelike};
use kata_core::Clock;
use tracing::debug;

impl Rulebook {
    /// True iff the clock's local hour lies in `[open_hour, close_hour)`
    pub fn is_online(&self, clock: &dyn Clock) -> bool {
        let hours = &self.config.business_hours;
        let hour = clock.now().hour();
        let online = hour >= hours.open_hour && hour < hours.close_hour;
        debug!(target: "kata::rules", hour, online, "Checked business hours");
        online
    }

    /// The holiday discount on the holiday's calendar day, else 0
    pub fn get_discount(&self, clock: &dyn Clock) -> f64 {
        let holiday = &self.config.holiday;
        let today = clock.now();
        if today.month() == holiday.month && today.day() == holiday.day {
            debug!(target: "kata::rules", discount = holiday.discount, "Holiday discount applies");
            holiday.discount
        } else {
            0.0
        }
    }
}

/// Business-hours check with the standard 08:00-20:00 window
pub fn is_online(clock: &dyn Clock) -> bool {
    Rulebook::standard().is_online(clock)
}

/// Holiday discount with the standard rule (0.2 on December 25)
pub fn get_discount(clock: &dyn Clock) -> f64 {
    Rulebook::standard().get_discount(clock)
}
