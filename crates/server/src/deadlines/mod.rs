//! Deadline rules and the calculator that rolls them onto working days.

pub mod calculator;
pub mod rules;

pub use calculator::DeadlinesCalculator;
pub use rules::{candidate, CLAIM_DETAILS_NOTIFICATION_DAYS, CLAIM_NOTIFICATION_MONTHS};
