//! Error types for building weekday options.

use thiserror::Error;

/// Errors that can occur when building [`WeekdaysOptions`](crate::WeekdaysOptions)
/// values from untyped input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionsError {
    #[error("unknown weekday style '{0}' (expected full, abbreviated or minimal)")]
    UnknownStyle(String),

    #[error("unknown case policy '{0}' (expected native, capitalized, upper or lower)")]
    UnknownCase(String),

    #[error("invalid first day '{0}' (expected 0-6, a weekday name or \"current\")")]
    InvalidFirstDay(String),

    #[error("first day index {0} out of range (maximum 6)")]
    FirstDayOutOfRange(u8),
}
