//! One-time assembly of the deadline calculator.
//!
//! The holiday calendar is loaded once, at process start or lazily on first
//! use. A load failure is a construction failure: the process should refuse
//! to become ready rather than compute deadlines against a partial calendar.

use shared_types::{CalendarConfig, CalendarError};

use crate::calendar::{load_extra_non_working_days, NonWorkingDaySet, WorkingDayIndicator};
use crate::deadlines::DeadlinesCalculator;
use crate::holidays::{non_working_days, parse_bank_holidays};

/// Assemble a calculator from already-loaded public holidays plus the
/// configured extra non-working days.
pub fn assemble_calculator(
    public_holidays: NonWorkingDaySet,
    config: &CalendarConfig,
) -> Result<DeadlinesCalculator, CalendarError> {
    let extra = load_extra_non_working_days(config)?;
    tracing::info!(
        public_holidays = public_holidays.len(),
        extra_non_working_days = extra.len(),
        "Working day calendar assembled"
    );
    Ok(DeadlinesCalculator::new(WorkingDayIndicator::new(
        public_holidays,
        extra,
    )))
}

/// Build from a cached payload instead of the remote authority.
pub fn build_calculator_from_payload(
    json: &str,
    config: &CalendarConfig,
) -> Result<DeadlinesCalculator, CalendarError> {
    let payload = parse_bank_holidays(json)?;
    let public_holidays = non_working_days(&payload, config.division_filter())?;
    assemble_calculator(public_holidays, config)
}

#[cfg(feature = "server")]
static CALCULATOR: tokio::sync::OnceCell<DeadlinesCalculator> = tokio::sync::OnceCell::const_new();

/// Fetch the remote calendar and build a calculator.
#[cfg(feature = "server")]
pub async fn build_calculator(config: &CalendarConfig) -> Result<DeadlinesCalculator, CalendarError> {
    let client = crate::holidays::BankHolidaysClient::new(config)?;
    let public_holidays = client.fetch().await?;
    assemble_calculator(public_holidays, config)
}

/// Process-wide calculator, built on first call and reused afterwards.
///
/// A failed load is not memoised; the next call tries again.
#[cfg(feature = "server")]
pub async fn calculator(
    config: &CalendarConfig,
) -> Result<&'static DeadlinesCalculator, CalendarError> {
    CALCULATOR
        .get_or_try_init(|| build_calculator(config))
        .await
}
