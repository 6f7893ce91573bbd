//! Deadline computation for claim lifecycle events.
//!
//! Every rule first applies a calendar offset to the anchor date, then
//! normalises the time of day, then rolls the date forward to the smallest
//! working day on or after the candidate. A candidate that already falls
//! on a working day is returned unchanged.
//!
//! Calculation is pure: the only inputs are the anchor and the injected
//! [`WorkingDayIndicator`]. There is no clock and no error path.

use chrono::{NaiveDate, NaiveDateTime};
use shared_types::{AllocatedTrack, DeadlineCalculation, DeadlineRule};

use super::rules::candidate;
use crate::calendar::dates::MIDNIGHT;
use crate::calendar::WorkingDayIndicator;

#[derive(Debug, Clone)]
pub struct DeadlinesCalculator {
    working_day_indicator: WorkingDayIndicator,
}

impl DeadlinesCalculator {
    pub fn new(working_day_indicator: WorkingDayIndicator) -> Self {
        Self {
            working_day_indicator,
        }
    }

    pub fn working_day_indicator(&self) -> &WorkingDayIndicator {
        &self.working_day_indicator
    }

    /// Issue date + 4 months, at midnight.
    pub fn claim_notification_deadline(&self, issue_date: NaiveDate) -> NaiveDateTime {
        self.calculate(&DeadlineRule::ClaimNotification, issue_date.and_time(MIDNIGHT))
            .deadline
    }

    /// Notification date + 14 days, at 4pm.
    pub fn claim_details_notification_deadline(&self, notification_date: NaiveDate) -> NaiveDateTime {
        self.calculate(
            &DeadlineRule::ClaimDetailsNotification,
            notification_date.and_time(MIDNIGHT),
        )
        .deadline
    }

    /// Response date + 14 days on the small claims track, + 28 otherwise,
    /// at end of business day.
    pub fn applicant_response_deadline(
        &self,
        response_date: NaiveDateTime,
        track: AllocatedTrack,
    ) -> NaiveDateTime {
        self.calculate(&DeadlineRule::ApplicantResponse { track }, response_date)
            .deadline
    }

    /// Apply `rule` to `anchor` and roll the result onto a working day.
    pub fn calculate(&self, rule: &DeadlineRule, anchor: NaiveDateTime) -> DeadlineCalculation {
        let candidate = candidate(rule, anchor);
        let due_date = self
            .working_day_indicator
            .working_day_on_or_after(candidate.date());
        let deadline = due_date.and_time(candidate.time());
        let rolled_forward = due_date != candidate.date();

        if rolled_forward {
            tracing::debug!(
                rule = rule.name(),
                %anchor,
                %candidate,
                %deadline,
                "Candidate falls on a non-working day; rolled forward"
            );
        }

        DeadlineCalculation {
            rule: rule.clone(),
            anchor,
            candidate,
            deadline,
            rolled_forward,
        }
    }
}
