//! Rule configuration via `kata.toml`
//!
//! Every bound the validators and date-gated rules use lives here. The
//! defaults reproduce the reference constants, so an empty file behaves
//! exactly like [`RulesConfig::default`].

use crate::coupon::Coupon;
use crate::error::{ConfigError, ConfigResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Config file name used by callers that keep rules next to their data.
pub const CONFIG_FILE_NAME: &str = "kata.toml";

/// Inclusive character-count bounds for a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthBounds {
    /// Shortest accepted length
    pub min: usize,
    /// Longest accepted length
    pub max: usize,
}

impl LengthBounds {
    /// True iff `len` lies in `[min, max]`
    #[inline]
    pub fn contains(&self, len: usize) -> bool {
        self.min <= len && len <= self.max
    }
}

/// Bounds applied by `validate_user_input`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInputRules {
    /// Youngest accepted age (default: 18)
    #[serde(default = "default_min_age")]
    pub min_age: u32,
    /// Oldest accepted age (default: 100)
    #[serde(default = "default_max_age")]
    pub max_age: u32,
    /// Username length bounds (default: 3..=255)
    #[serde(default = "default_user_input_username")]
    pub username: LengthBounds,
}

/// Opening window `[open_hour, close_hour)` in local hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessHours {
    /// First hour the shop is online (default: 8)
    #[serde(default = "default_open_hour")]
    pub open_hour: u32,
    /// First hour the shop is offline again (default: 20)
    #[serde(default = "default_close_hour")]
    pub close_hour: u32,
}

/// Discount granted for a whole calendar day every year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HolidayDiscount {
    /// Month of the holiday, 1-12 (default: 12)
    #[serde(default = "default_holiday_month")]
    pub month: u32,
    /// Day of the month (default: 25)
    #[serde(default = "default_holiday_day")]
    pub day: u32,
    /// Fraction taken off on that day (default: 0.2)
    #[serde(default = "default_holiday_discount")]
    pub discount: f64,
}

/// Rule configuration loaded from `kata.toml`.
///
/// # Example
///
/// ```toml
/// [username]
/// min = 5
/// max = 15
///
/// [driving_ages]
/// US = 16
/// UK = 17
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Bounds for `is_valid_username` (default: 5..=15)
    #[serde(default = "default_username")]
    pub username: LengthBounds,
    /// Bounds for `validate_user_input`
    #[serde(default = "default_user_input")]
    pub user_input: UserInputRules,
    /// Minimum driving age per country code
    #[serde(default = "default_driving_ages")]
    pub driving_ages: BTreeMap<String, u32>,
    /// When `is_online` reports true
    #[serde(default = "default_business_hours")]
    pub business_hours: BusinessHours,
    /// When and how much `get_discount` grants
    #[serde(default = "default_holiday")]
    pub holiday: HolidayDiscount,
    /// Coupon catalog, in lookup order
    #[serde(default = "default_coupons")]
    pub coupons: Vec<Coupon>,
}

fn default_username() -> LengthBounds {
    LengthBounds { min: 5, max: 15 }
}

fn default_user_input_username() -> LengthBounds {
    LengthBounds { min: 3, max: 255 }
}

fn default_min_age() -> u32 {
    18
}

fn default_max_age() -> u32 {
    100
}

fn default_user_input() -> UserInputRules {
    UserInputRules {
        min_age: default_min_age(),
        max_age: default_max_age(),
        username: default_user_input_username(),
    }
}

fn default_driving_ages() -> BTreeMap<String, u32> {
    BTreeMap::from([("US".to_string(), 16), ("UK".to_string(), 17)])
}

fn default_open_hour() -> u32 {
    8
}

fn default_close_hour() -> u32 {
    20
}

fn default_business_hours() -> BusinessHours {
    BusinessHours {
        open_hour: default_open_hour(),
        close_hour: default_close_hour(),
    }
}

fn default_holiday_month() -> u32 {
    12
}

fn default_holiday_day() -> u32 {
    25
}

fn default_holiday_discount() -> f64 {
    0.2
}

fn default_holiday() -> HolidayDiscount {
    HolidayDiscount {
        month: default_holiday_month(),
        day: default_holiday_day(),
        discount: default_holiday_discount(),
    }
}

fn default_coupons() -> Vec<Coupon> {
    vec![Coupon::new("SAVE20", 0.2), Coupon::new("SAVE10", 0.1)]
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            username: default_username(),
            user_input: default_user_input(),
            driving_ages: default_driving_ages(),
            business_hours: default_business_hours(),
            holiday: default_holiday(),
            coupons: default_coupons(),
        }
    }
}

impl RulesConfig {
    /// Check every value is in range.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` naming the first offending field.
    pub fn validate(&self) -> ConfigResult<()> {
        check_bounds("username", &self.username)?;
        check_bounds("user_input.username", &self.user_input.username)?;

        if self.user_input.min_age > self.user_input.max_age {
            return Err(ConfigError::invalid(format!(
                "user_input.min_age ({}) exceeds user_input.max_age ({})",
                self.user_input.min_age, self.user_input.max_age
            )));
        }

        if let Some(code) = self.driving_ages.keys().find(|code| code.is_empty()) {
            return Err(ConfigError::invalid(format!(
                "driving_ages contains an empty country code ({:?})",
                code
            )));
        }

        let hours = &self.business_hours;
        if hours.open_hour >= hours.close_hour || hours.close_hour > 24 {
            return Err(ConfigError::invalid(format!(
                "business_hours must satisfy open_hour < close_hour <= 24, got {}..{}",
                hours.open_hour, hours.close_hour
            )));
        }

        // 2000 is a leap year, so Feb 29 is accepted as a holiday date.
        if NaiveDate::from_ymd_opt(2000, self.holiday.month, self.holiday.day).is_none() {
            return Err(ConfigError::invalid(format!(
                "holiday {}/{} is not a calendar date",
                self.holiday.month, self.holiday.day
            )));
        }
        if !(0.0..1.0).contains(&self.holiday.discount) {
            return Err(ConfigError::invalid(format!(
                "holiday.discount must be in [0, 1), got {}",
                self.holiday.discount
            )));
        }

        if self.coupons.is_empty() {
            return Err(ConfigError::invalid("coupon catalog is empty"));
        }
        for coupon in &self.coupons {
            if coupon.code.is_empty() {
                return Err(ConfigError::invalid("coupon code cannot be empty"));
            }
            if !(coupon.discount > 0.0 && coupon.discount < 1.0) {
                return Err(ConfigError::invalid(format!(
                    "coupon {} discount must be in (0, 1), got {}",
                    coupon.code, coupon.discount
                )));
            }
        }

        Ok(())
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Kata rules configuration
#
# Bounds for is_valid_username (inclusive, in characters)
[username]
min = 5
max = 15

# Bounds for validate_user_input
[user_input]
min_age = 18
max_age = 100
username = { min = 3, max = 255 }

# Minimum driving age per country code
[driving_ages]
UK = 17
US = 16

# is_online is true for local hours in [open_hour, close_hour)
[business_hours]
open_hour = 8
close_hour = 20

# get_discount grants `discount` on this day every year
[holiday]
month = 12
day = 25
discount = 0.2

# Coupon catalog; discounts must be strictly between 0 and 1
[[coupons]]
code = "SAVE20"
discount = 0.2

[[coupons]]
code = "SAVE10"
discount = 0.1
"#
    }

    /// Parse and validate config text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML or a value is out of range.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: RulesConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> ConfigResult<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> ConfigResult<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn check_bounds(field: &str, bounds: &LengthBounds) -> ConfigResult<()> {
    if bounds.min > bounds.max {
        return Err(ConfigError::invalid(format!(
            "{}.min ({}) exceeds {}.max ({})",
            field, bounds.min, field, bounds.max
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_is_valid() {
        RulesConfig::default().validate().unwrap();
    }

    #[test]
    fn default_toml_matches_default() {
        let config = RulesConfig::from_toml_str(RulesConfig::default_toml()).unwrap();
        assert_eq!(config, RulesConfig::default());
    }

    #[test]
    fn empty_toml_uses_defaults() {
        let config = RulesConfig::from_toml_str("").unwrap();
        assert_eq!(config, RulesConfig::default());
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config = RulesConfig::from_toml_str("[user_input]\nmin_age = 21\n").unwrap();
        assert_eq!(config.user_input.min_age, 21);
        assert_eq!(config.user_input.max_age, 100);
        assert_eq!(config.user_input.username, LengthBounds { min: 3, max: 255 });
    }

    #[test]
    fn partial_hours_and_holiday_keep_other_defaults() {
        let toml = "[business_hours]\nopen_hour = 9\n\n[holiday]\nday = 24\n";
        let config = RulesConfig::from_toml_str(toml).unwrap();
        assert_eq!(
            config.business_hours,
            BusinessHours {
                open_hour: 9,
                close_hour: 20,
            }
        );
        assert_eq!(config.holiday.month, 12);
        assert_eq!(config.holiday.day, 24);
        assert_eq!(config.holiday.discount, 0.2);
    }

    #[test]
    fn inverted_username_bounds_rejected() {
        let err = RulesConfig::from_toml_str("[username]\nmin = 10\nmax = 2\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().contains("username.min"));
    }

    #[test]
    fn closed_shop_rejected() {
        let err = RulesConfig::from_toml_str("[business_hours]\nopen_hour = 20\nclose_hour = 8\n")
            .unwrap_err();
        assert!(err.to_string().contains("business_hours"));
    }

    #[test]
    fn impossible_holiday_rejected() {
        let err = RulesConfig::from_toml_str("[holiday]\nmonth = 2\nday = 30\ndiscount = 0.1\n")
            .unwrap_err();
        assert!(err.to_string().contains("not a calendar date"));
    }

    #[test]
    fn leap_day_holiday_accepted() {
        let config =
            RulesConfig::from_toml_str("[holiday]\nmonth = 2\nday = 29\ndiscount = 0.1\n").unwrap();
        assert_eq!(config.holiday.day, 29);
    }

    #[test]
    fn full_coupon_discount_rejected() {
        let toml = "[[coupons]]\ncode = \"FREE\"\ndiscount = 1.0\n";
        let err = RulesConfig::from_toml_str(toml).unwrap_err();
        assert!(err.to_string().contains("FREE"));
    }

    #[test]
    fn empty_coupon_catalog_rejected() {
        let mut config = RulesConfig::default();
        config.coupons.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let err = RulesConfig::from_toml_str("[username\nmin = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn write_default_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        assert!(!path.exists());

        RulesConfig::write_default_if_missing(&path).unwrap();
        assert!(path.exists());

        let config = RulesConfig::from_file(&path).unwrap();
        assert_eq!(config, RulesConfig::default());
    }

    #[test]
    fn write_default_does_not_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);

        std::fs::write(&path, "[driving_ages]\nDE = 18\n").unwrap();
        RulesConfig::write_default_if_missing(&path).unwrap();

        let config = RulesConfig::from_file(&path).unwrap();
        assert_eq!(config.driving_ages.get("DE"), Some(&18));
        assert!(!config.driving_ages.contains_key("US"));
    }

    #[test]
    fn write_to_file_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);

        let mut config = RulesConfig::default();
        config.business_hours = BusinessHours {
            open_hour: 9,
            close_hour: 17,
        };
        config.write_to_file(&path).unwrap();

        let parsed = RulesConfig::from_file(&path).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = RulesConfig::from_file(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
