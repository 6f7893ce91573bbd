use chrono::NaiveDateTime;
use shared_types::DeadlineRule;

use crate::calendar::dates::{
    plus_days_at, plus_months_at_midnight, END_OF_BUSINESS_DAY, FOUR_PM,
};

/// Calendar months allowed to notify the defendant of an issued claim.
pub const CLAIM_NOTIFICATION_MONTHS: u32 = 4;

/// Calendar days allowed to notify claim details after the claim.
pub const CLAIM_DETAILS_NOTIFICATION_DAYS: u64 = 14;

/// Unadjusted deadline for `rule`: calendar offset applied and time of day
/// normalised, but not yet rolled onto a working day.
pub fn candidate(rule: &DeadlineRule, anchor: NaiveDateTime) -> NaiveDateTime {
    let date = anchor.date();
    match rule {
        DeadlineRule::ClaimNotification => {
            plus_months_at_midnight(date, CLAIM_NOTIFICATION_MONTHS)
        }
        DeadlineRule::ClaimDetailsNotification => {
            plus_days_at(date, CLAIM_DETAILS_NOTIFICATION_DAYS, FOUR_PM)
        }
        DeadlineRule::ApplicantResponse { track } => {
            plus_days_at(date, track.response_period_days(), END_OF_BUSINESS_DAY)
        }
    }
}
