//! Claim deadline tests against the real England and Wales bank holidays.

use crate::common::*;
use chrono::{NaiveDate, NaiveDateTime};
use pretty_assertions::assert_eq;
use server::calendar::dates::{END_OF_BUSINESS_DAY, MIDNIGHT};
use shared_types::{AllocatedTrack, DeadlineRule};

fn midnight(year: i32, month: u32, day: u32) -> NaiveDateTime {
    date(year, month, day).and_time(MIDNIGHT)
}

fn end_of_business(year: i32, month: u32, day: u32) -> NaiveDateTime {
    date(year, month, day).and_time(END_OF_BUSINESS_DAY)
}

// ─── Claim notification: issue date + 4 months, midnight ───────

fn assert_claim_notification(issue_date: NaiveDate, expected: NaiveDateTime) {
    let deadline = calculator().claim_notification_deadline(issue_date);
    assert_weekday(deadline);
    assert_eq!(deadline, expected, "issue date {issue_date}");
}

#[test]
fn candidate_on_saturday_rolls_to_monday() {
    assert_claim_notification(date(2020, 8, 5), midnight(2020, 12, 7));
}

#[test]
fn candidate_on_sunday_rolls_to_monday() {
    assert_claim_notification(date(2020, 8, 6), midnight(2020, 12, 7));
}

#[test]
fn candidate_on_monday_is_kept() {
    assert_claim_notification(date(2020, 8, 7), midnight(2020, 12, 7));
}

#[test]
fn christmas_2020_rolls_past_boxing_day_substitute() {
    assert_claim_notification(date(2020, 8, 25), midnight(2020, 12, 29));
}

#[test]
fn christmas_2017_rolls_past_boxing_day() {
    assert_claim_notification(date(2017, 8, 25), midnight(2017, 12, 27));
}

#[test]
fn thirty_first_clamps_to_month_end() {
    assert_claim_notification(date(2020, 7, 31), midnight(2020, 11, 30));
}

#[test]
fn february_in_non_leap_year() {
    assert_claim_notification(date(2018, 10, 30), midnight(2019, 2, 28));
}

#[test]
fn february_in_leap_year() {
    assert_claim_notification(date(2015, 10, 30), midnight(2016, 2, 29));
}

#[test]
fn from_end_of_february() {
    assert_claim_notification(date(2018, 2, 28), midnight(2018, 6, 28));
}

// ─── Claim details notification: + 14 days, 4pm ────────────────

fn assert_claim_details(notification_date: NaiveDate, expected: NaiveDateTime) {
    let deadline = calculator().claim_details_notification_deadline(notification_date);
    assert_weekday(deadline);
    assert_eq!(deadline, expected, "notification date {notification_date}");
}

#[test]
fn details_landing_on_saturday_rolls_to_monday() {
    assert_claim_details(date(2020, 8, 1), at(2020, 8, 17, 16, 0));
}

#[test]
fn details_landing_on_sunday_rolls_to_monday() {
    assert_claim_details(date(2020, 8, 2), at(2020, 8, 17, 16, 0));
}

#[test]
fn details_landing_on_monday_is_kept() {
    assert_claim_details(date(2020, 8, 3), at(2020, 8, 17, 16, 0));
}

#[test]
fn details_landing_on_christmas_rolls_to_next_working_day() {
    assert_claim_details(date(2020, 12, 11), at(2020, 12, 29, 16, 0));
}

// ─── Applicant response: track based ───────────────────────────

#[test]
fn small_claim_weekday_response_adds_fourteen_days() {
    let deadline = calculator()
        .applicant_response_deadline(at(2021, 2, 4, 16, 0), AllocatedTrack::SmallClaim);
    assert_weekday(deadline);
    assert_eq!(deadline, end_of_business(2021, 2, 18));
}

#[test]
fn small_claim_weekend_response_rolls_to_monday() {
    let deadline = calculator()
        .applicant_response_deadline(at(2021, 2, 6, 16, 0), AllocatedTrack::SmallClaim);
    assert_weekday(deadline);
    assert_eq!(deadline, end_of_business(2021, 2, 22));
}

#[test]
fn other_tracks_weekday_response_adds_twenty_eight_days() {
    for track in [AllocatedTrack::FastClaim, AllocatedTrack::MultiClaim] {
        let deadline = calculator().applicant_response_deadline(at(2021, 2, 4, 16, 0), track);
        assert_weekday(deadline);
        assert_eq!(deadline, end_of_business(2021, 3, 4), "{track}");
    }
}

#[test]
fn other_tracks_weekend_response_rolls_to_monday() {
    for track in [AllocatedTrack::FastClaim, AllocatedTrack::MultiClaim] {
        let deadline = calculator().applicant_response_deadline(at(2021, 2, 6, 16, 0), track);
        assert_weekday(deadline);
        assert_eq!(deadline, end_of_business(2021, 3, 8), "{track}");
    }
}

#[test]
fn response_time_is_normalised_regardless_of_anchor_time() {
    let deadline = calculator()
        .applicant_response_deadline(at(2021, 2, 4, 9, 30), AllocatedTrack::SmallClaim);
    assert_eq!(deadline, end_of_business(2021, 2, 18));
}

// ─── Rule dispatch ─────────────────────────────────────────────

#[test]
fn calculate_reports_candidate_and_roll_forward() {
    let result = calculator().calculate(&DeadlineRule::ClaimNotification, midnight(2020, 8, 25));
    assert_eq!(result.candidate, midnight(2020, 12, 25));
    assert_eq!(result.deadline, midnight(2020, 12, 29));
    assert!(result.rolled_forward);
    assert_eq!(result.rule, DeadlineRule::ClaimNotification);
}

#[test]
fn calculate_matches_named_operations() {
    let calculator = calculator();
    let anchor = at(2021, 2, 6, 16, 0);
    for track in AllocatedTrack::ALL {
        assert_eq!(
            calculator
                .calculate(&DeadlineRule::ApplicantResponse { track }, anchor)
                .deadline,
            calculator.applicant_response_deadline(anchor, track)
        );
    }
    assert_eq!(
        calculator
            .calculate(&DeadlineRule::ClaimDetailsNotification, midnight(2020, 8, 1))
            .deadline,
        calculator.claim_details_notification_deadline(date(2020, 8, 1))
    );
}

#[test]
fn repeated_calculation_is_deterministic() {
    let first = calculator().claim_notification_deadline(date(2015, 10, 30));
    let second = calculator().claim_notification_deadline(date(2015, 10, 30));
    assert_eq!(first, second);
}

#[test]
fn every_deadline_in_2020_lands_on_a_working_day() {
    let calculator = calculator();
    let indicator = calculator.working_day_indicator();
    for anchor in date(2020, 1, 1).iter_days().take(366) {
        for rule in [
            DeadlineRule::ClaimNotification,
            DeadlineRule::ClaimDetailsNotification,
            DeadlineRule::ApplicantResponse {
                track: AllocatedTrack::SmallClaim,
            },
        ] {
            let result = calculator.calculate(&rule, anchor.and_time(MIDNIGHT));
            assert!(indicator.is_working_day(result.deadline.date()), "{rule:?} {anchor}");
            assert!(result.deadline >= result.candidate);
        }
    }
}
