//! Wire types for the remote bank holiday calendar.
//!
//! The payload is a JSON object keyed by division id, for example:
//!
//! ```json
//! {
//!   "england-and-wales": {
//!     "division": "england-and-wales",
//!     "events": [
//!       { "title": "Christmas Day", "date": "2020-12-25", "notes": "", "bunting": true }
//!     ]
//!   }
//! }
//! ```
//!
//! Dates are kept as raw strings here so that the loader can reject the
//! whole payload with a precise message when one of them is invalid.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The full bank holiday payload, one entry per division.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BankHolidays {
    #[serde(flatten)]
    pub divisions: BTreeMap<String, Division>,
}

impl BankHolidays {
    pub fn division(&self, name: &str) -> Option<&Division> {
        self.divisions.get(name)
    }

    pub fn division_names(&self) -> Vec<&str> {
        self.divisions.keys().map(String::as_str).collect()
    }
}

/// A named holiday calendar within the payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Division {
    #[serde(default)]
    pub division: String,
    #[serde(default)]
    pub events: Vec<HolidayEvent>,
}

/// A single holiday entry. Only `date` is significant for deadline work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HolidayEvent {
    pub date: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub bunting: bool,
}
