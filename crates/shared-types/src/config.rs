use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::CalendarError;

pub const DEFAULT_BANK_HOLIDAYS_URL: &str = "https://www.gov.uk/bank-holidays.json";
pub const DEFAULT_DIVISION: &str = "england-and-wales";
pub const DEFAULT_HOLIDAY_FETCH_TIMEOUT_SECS: u64 = 10;

/// Holiday calendar settings, the `[calendar]` table of `config.toml`.
///
/// Every field has a default so that a missing or partial config file
/// still yields the England and Wales gov.uk calendar.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarConfig {
    #[serde(default = "default_bank_holidays_url")]
    pub bank_holidays_url: String,
    /// Division to load from the payload. Empty means every division.
    #[serde(default = "default_division")]
    pub division: String,
    #[serde(default = "default_timeout_secs")]
    pub holiday_fetch_timeout_secs: u64,
    /// Organisation closures on top of public holidays, as quoted ISO dates.
    #[serde(default)]
    pub extra_non_working_days: Vec<NaiveDate>,
    /// Optional file with one ISO date per line.
    #[serde(default)]
    pub extra_non_working_days_file: Option<PathBuf>,
}

impl CalendarConfig {
    /// The division filter, or `None` when every division should be merged.
    pub fn division_filter(&self) -> Option<&str> {
        let division = self.division.trim();
        if division.is_empty() {
            None
        } else {
            Some(division)
        }
    }

    /// Reject settings that can never produce a working calendar.
    pub fn validate(&self) -> Result<(), CalendarError> {
        if self.holiday_fetch_timeout_secs == 0 {
            return Err(CalendarError::malformed(
                "holiday_fetch_timeout_secs must be at least 1",
            ));
        }
        Ok(())
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            bank_holidays_url: default_bank_holidays_url(),
            division: default_division(),
            holiday_fetch_timeout_secs: default_timeout_secs(),
            extra_non_working_days: Vec::new(),
            extra_non_working_days_file: None,
        }
    }
}

fn default_bank_holidays_url() -> String {
    DEFAULT_BANK_HOLIDAYS_URL.to_string()
}

fn default_division() -> String {
    DEFAULT_DIVISION.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_HOLIDAY_FETCH_TIMEOUT_SECS
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub calendar: CalendarConfig,
}
