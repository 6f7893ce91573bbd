pub mod calendar;

pub mod deadlines;

pub mod holidays;

pub mod startup;

#[cfg(feature = "server")]
pub mod config;

#[cfg(feature = "server")]
pub mod telemetry;

pub use calendar::{NonWorkingDaySet, WorkingDayIndicator};
pub use deadlines::DeadlinesCalculator;
