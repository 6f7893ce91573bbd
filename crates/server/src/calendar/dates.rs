use chrono::{Days, Months, NaiveDate, NaiveDateTime, NaiveTime};

const fn time_of_day(hour: u32, min: u32) -> NaiveTime {
    match NaiveTime::from_hms_opt(hour, min, 0) {
        Some(time) => time,
        None => panic!("invalid time of day"),
    }
}

pub const MIDNIGHT: NaiveTime = time_of_day(0, 0);

pub const FOUR_PM: NaiveTime = time_of_day(16, 0);

/// Latest time a response is accepted on its due date.
pub const END_OF_BUSINESS_DAY: NaiveTime = time_of_day(16, 0);

/// Add calendar months, clamping to the last day of the target month.
///
/// 31 July + 4 months is 30 November; 30 October 2015 + 4 months is
/// 29 February 2016. Saturates at `NaiveDate::MAX`.
pub fn plus_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX)
}

/// Add calendar days. Saturates at `NaiveDate::MAX`.
pub fn plus_days(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_add_days(Days::new(days))
        .unwrap_or(NaiveDate::MAX)
}

pub fn plus_months_at_midnight(date: NaiveDate, months: u32) -> NaiveDateTime {
    plus_months(date, months).and_time(MIDNIGHT)
}

pub fn plus_days_at(date: NaiveDate, days: u64, time: NaiveTime) -> NaiveDateTime {
    plus_days(date, days).and_time(time)
}
