use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorization of calendar loading errors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CalendarErrorKind {
    /// The holiday authority (or a local data file) could not be reached or read.
    Unavailable,
    /// The data was retrieved but contains something that is not a valid date.
    Malformed,
}

impl fmt::Display for CalendarErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalendarErrorKind::Unavailable => write!(f, "Unavailable"),
            CalendarErrorKind::Malformed => write!(f, "Malformed"),
        }
    }
}

/// Error raised while assembling the non-working-day calendar.
///
/// Both kinds are fatal to calculator construction. Once a calculator
/// exists, deadline computation has no error path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalendarError {
    pub kind: CalendarErrorKind,
    pub message: String,
}

impl CalendarError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            kind: CalendarErrorKind::Unavailable,
            message: message.into(),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self {
            kind: CalendarErrorKind::Malformed,
            message: message.into(),
        }
    }

    pub fn is_unavailable(&self) -> bool {
        self.kind == CalendarErrorKind::Unavailable
    }

    pub fn is_malformed(&self) -> bool {
        self.kind == CalendarErrorKind::Malformed
    }
}

impl fmt::Display for CalendarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for CalendarError {}
