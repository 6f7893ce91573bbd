use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

// ─── Allocated Track ───────────────────────────────────────────

/// Case track allocated by the court. Used only as a branch key when
/// selecting the applicant response period.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AllocatedTrack {
    SmallClaim,
    FastClaim,
    MultiClaim,
}

impl AllocatedTrack {
    pub const ALL: [AllocatedTrack; 3] = [Self::SmallClaim, Self::FastClaim, Self::MultiClaim];

    /// Calendar days the applicant has to respond on this track.
    pub fn response_period_days(&self) -> u64 {
        match self {
            Self::SmallClaim => 14,
            Self::FastClaim | Self::MultiClaim => 28,
        }
    }

    /// Parse a kebab-case (`small-claim`) or wire-format (`SMALL_CLAIM`) name,
    /// as accepted by the `deadline` CLI.
    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().replace('-', "_").as_str() {
            "SMALL_CLAIM" => Some(Self::SmallClaim),
            "FAST_CLAIM" => Some(Self::FastClaim),
            "MULTI_CLAIM" => Some(Self::MultiClaim),
            _ => None,
        }
    }
}

impl fmt::Display for AllocatedTrack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SmallClaim => write!(f, "SMALL_CLAIM"),
            Self::FastClaim => write!(f, "FAST_CLAIM"),
            Self::MultiClaim => write!(f, "MULTI_CLAIM"),
        }
    }
}

// ─── Deadline Rules ────────────────────────────────────────────

/// The closed set of deadline rules. Each names an unadjusted calendar
/// offset plus a time of day; roll-forward is applied by the calculator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum DeadlineRule {
    /// Claim form must be notified within four calendar months of issue, by midnight.
    ClaimNotification,
    /// Claim details follow within fourteen calendar days, by 4pm.
    ClaimDetailsNotification,
    /// Applicant responds within a track-dependent period, by end of business day.
    ApplicantResponse { track: AllocatedTrack },
}

impl DeadlineRule {
    /// Stable rule name; rules are versioned by name only.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ClaimNotification => "claim_notification",
            Self::ClaimDetailsNotification => "claim_details_notification",
            Self::ApplicantResponse { .. } => "applicant_response",
        }
    }
}

// ─── Calculation Result ────────────────────────────────────────

/// Audit record of a single deadline computation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeadlineCalculation {
    pub rule: DeadlineRule,
    pub anchor: NaiveDateTime,
    /// Offset applied and time normalised, before roll-forward.
    pub candidate: NaiveDateTime,
    pub deadline: NaiveDateTime,
    pub rolled_forward: bool,
}
