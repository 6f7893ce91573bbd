use chrono::NaiveDate;
use shared_types::{CalendarConfig, CalendarError};
use std::collections::HashSet;
use std::path::Path;

/// Immutable set of calendar dates on which no deadline may fall.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NonWorkingDaySet {
    dates: HashSet<NaiveDate>,
}

impl NonWorkingDaySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_dates<I: IntoIterator<Item = NaiveDate>>(dates: I) -> Self {
        Self {
            dates: dates.into_iter().collect(),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn union(&self, other: &NonWorkingDaySet) -> NonWorkingDaySet {
        Self {
            dates: self.dates.union(&other.dates).copied().collect(),
        }
    }

    /// All dates in ascending order.
    pub fn sorted(&self) -> Vec<NaiveDate> {
        let mut dates: Vec<NaiveDate> = self.dates.iter().copied().collect();
        dates.sort();
        dates
    }
}

impl FromIterator<NaiveDate> for NonWorkingDaySet {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        Self::from_dates(iter)
    }
}

/// Parse a non-working-days listing: one ISO date per line.
/// Blank lines and `#` comments are skipped; any other bad line rejects
/// the whole listing.
pub fn parse_non_working_days(text: &str) -> Result<NonWorkingDaySet, CalendarError> {
    let mut dates = HashSet::new();
    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let date = NaiveDate::parse_from_str(line, "%Y-%m-%d").map_err(|e| {
            CalendarError::malformed(format!(
                "Invalid non-working day '{line}' on line {}: {e}",
                index + 1
            ))
        })?;
        dates.insert(date);
    }
    Ok(NonWorkingDaySet { dates })
}

pub fn load_non_working_days(path: &Path) -> Result<NonWorkingDaySet, CalendarError> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        CalendarError::unavailable(format!(
            "Failed to read non-working days from {}: {e}",
            path.display()
        ))
    })?;
    let days = parse_non_working_days(&contents)?;
    tracing::debug!(path = %path.display(), count = days.len(), "Loaded non-working days file");
    Ok(days)
}

/// Merge the configured extra dates with the optional extra-days file.
pub fn load_extra_non_working_days(
    config: &CalendarConfig,
) -> Result<NonWorkingDaySet, CalendarError> {
    let configured = NonWorkingDaySet::from_dates(config.extra_non_working_days.iter().copied());
    match &config.extra_non_working_days_file {
        Some(path) => Ok(configured.union(&load_non_working_days(path)?)),
        None => Ok(configured),
    }
}
