use chrono::{Datelike, NaiveDate, Weekday};

use super::non_working_days::NonWorkingDaySet;

/// Check if a date is a weekend.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Answers whether a date is a working day: not Saturday or Sunday, not a
/// public holiday, not an extra closure.
///
/// Immutable after construction and shared read-only by every calculation.
#[derive(Debug, Clone, Default)]
pub struct WorkingDayIndicator {
    public_holidays: NonWorkingDaySet,
    extra_non_working_days: NonWorkingDaySet,
}

impl WorkingDayIndicator {
    pub fn new(
        public_holidays: NonWorkingDaySet,
        extra_non_working_days: NonWorkingDaySet,
    ) -> Self {
        Self {
            public_holidays,
            extra_non_working_days,
        }
    }

    pub fn public_holidays(&self) -> &NonWorkingDaySet {
        &self.public_holidays
    }

    pub fn extra_non_working_days(&self) -> &NonWorkingDaySet {
        &self.extra_non_working_days
    }

    pub fn is_weekend(&self, date: NaiveDate) -> bool {
        is_weekend(date)
    }

    pub fn is_public_holiday(&self, date: NaiveDate) -> bool {
        self.public_holidays.contains(date)
    }

    pub fn is_extra_non_working_day(&self, date: NaiveDate) -> bool {
        self.extra_non_working_days.contains(date)
    }

    pub fn is_working_day(&self, date: NaiveDate) -> bool {
        !self.is_weekend(date)
            && !self.is_public_holiday(date)
            && !self.is_extra_non_working_day(date)
    }

    /// First working day strictly after `date`. Never returns `date` itself.
    pub fn next_working_day(&self, date: NaiveDate) -> NaiveDate {
        let mut current = date;
        while let Some(next) = current.succ_opt() {
            if self.is_working_day(next) {
                return next;
            }
            current = next;
        }
        current
    }

    /// Last working day strictly before `date`.
    pub fn previous_working_day(&self, date: NaiveDate) -> NaiveDate {
        let mut current = date;
        while let Some(prev) = current.pred_opt() {
            if self.is_working_day(prev) {
                return prev;
            }
            current = prev;
        }
        current
    }

    /// Smallest working day on or after `date`. A working day maps to itself.
    pub fn working_day_on_or_after(&self, date: NaiveDate) -> NaiveDate {
        if self.is_working_day(date) {
            date
        } else {
            self.next_working_day(date)
        }
    }

    /// Every non-working day (weekends included) in `[from, to]`.
    pub fn non_working_days_between(&self, from: NaiveDate, to: NaiveDate) -> Vec<NaiveDate> {
        from.iter_days()
            .take_while(|d| *d <= to)
            .filter(|d| !self.is_working_day(*d))
            .collect()
    }
}
