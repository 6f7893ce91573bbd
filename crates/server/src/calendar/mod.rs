//! Calendar primitives: non-working-day sets, the working-day indicator
//! and the date arithmetic the deadline rules are built from.

pub mod dates;
pub mod non_working_days;
pub mod working_day;

pub use non_working_days::{
    load_extra_non_working_days, load_non_working_days, parse_non_working_days, NonWorkingDaySet,
};
pub use working_day::{is_weekend, WorkingDayIndicator};
