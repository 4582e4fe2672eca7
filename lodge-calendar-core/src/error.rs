//! Error types for the lodge calendar.
//!
//! Generating a year never fails; these cover the parsing done at the edges
//! (category filters, "HH:MM" times).

use thiserror::Error;

/// Errors that can occur when parsing calendar inputs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("Unknown category '{0}'. Expected one of: all, aldenham, radlett, elstree, loi")]
    UnknownCategory(String),

    #[error("Invalid time '{0}'. Expected HH:MM")]
    InvalidTime(String),
}

/// Result type alias for lodge calendar operations.
pub type CalendarResult<T> = Result<T, CalendarError>;
