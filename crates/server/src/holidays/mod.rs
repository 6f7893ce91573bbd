//! Public holiday source: the remote bank holiday calendar, flattened into
//! a [`NonWorkingDaySet`].
//!
//! Loading is all-or-nothing. A payload with even one unparseable date is
//! rejected, because a short holiday list would silently produce deadlines
//! on closed days.

#[cfg(feature = "server")]
pub mod client;

#[cfg(feature = "server")]
pub use client::BankHolidaysClient;

use chrono::NaiveDate;
use shared_types::{BankHolidays, CalendarError, Division};

use crate::calendar::NonWorkingDaySet;

/// Parse the raw JSON payload.
pub fn parse_bank_holidays(json: &str) -> Result<BankHolidays, CalendarError> {
    serde_json::from_str(json).map_err(|e| {
        CalendarError::malformed(format!("Bank holiday payload could not be parsed: {e}"))
    })
}

/// Flatten the selected division (or every division when `None`) into a
/// date set, discarding titles.
pub fn non_working_days(
    payload: &BankHolidays,
    division: Option<&str>,
) -> Result<NonWorkingDaySet, CalendarError> {
    let selected: Vec<(&str, &Division)> = match division {
        Some(name) => {
            let found = payload.division(name).ok_or_else(|| {
                CalendarError::malformed(format!(
                    "Division '{name}' not present in bank holiday payload (found: {})",
                    payload.division_names().join(", ")
                ))
            })?;
            vec![(name, found)]
        }
        None => payload
            .divisions
            .iter()
            .map(|(name, d)| (name.as_str(), d))
            .collect(),
    };

    let mut dates = Vec::new();
    for (name, division) in selected {
        for event in &division.events {
            dates.push(parse_event_date(name, &event.date)?);
        }
    }
    Ok(NonWorkingDaySet::from_dates(dates))
}

/// Parse and flatten in one step.
pub fn parse_non_working_days_payload(
    json: &str,
    division: Option<&str>,
) -> Result<NonWorkingDaySet, CalendarError> {
    non_working_days(&parse_bank_holidays(json)?, division)
}

fn parse_event_date(division: &str, raw: &str) -> Result<NaiveDate, CalendarError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|e| {
        CalendarError::malformed(format!(
            "Division '{division}' has invalid holiday date '{raw}': {e}"
        ))
    })
}
