//! Error types for the train finder.
//!
//! Input errors ([`QueryError`]) and data errors ([`DecodeError`]) are kept
//! apart; [`FinderError`] wraps both for the CLI.

use thiserror::Error;

/// Result type alias for finder operations
pub type Result<T> = std::result::Result<T, FinderError>;

/// Caller-supplied query values that failed validation.
///
/// Display strings are part of the public contract.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryError {
    #[error("empty departure station")]
    EmptyDepartureStation,

    #[error("bad departure station input")]
    BadDepartureStationInput,

    #[error("empty arrival station")]
    EmptyArrivalStation,

    #[error("bad arrival station input")]
    BadArrivalStationInput,

    #[error("unsupported criteria")]
    UnsupportedCriteria,
}

/// A time-of-day string that is not `HH:MM:SS`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    pub(crate) fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// The schedule source could not be turned into train records.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// Malformed JSON or a missing/mistyped field
    #[error("malformed schedule: {0}")]
    Json(#[from] serde_json::Error),

    /// A time-of-day field did not match `HH:MM:SS`
    #[error("train {train_id}: {field} {value:?}: {source}")]
    InvalidTime {
        train_id: i64,
        field: &'static str,
        value: String,
        source: TimeError,
    },

    /// Prices are never negative
    #[error("train {train_id}: negative price {price}")]
    NegativePrice { train_id: i64, price: String },
}

/// Errors that can occur while running a query end to end.
#[derive(Error, Debug)]
pub enum FinderError {
    /// Failed to open or read the schedule file, or to talk to the terminal
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid query input
    #[error("{0}")]
    Query(#[from] QueryError),

    /// Invalid schedule data
    #[error("{0}")]
    Decode(#[from] DecodeError),

    /// Failed to write the result table
    #[error("CSV output error: {0}")]
    Csv(#[from] csv::Error),

    /// Missing schedule file argument
    #[error("Missing schedule file argument. Usage: train-finder <schedule.json> [<departure> <arrival> <criterion>]")]
    MissingArgument,

    /// Query values must be given all together or not at all
    #[error("Expected 1 or 4 arguments, got {0}. Usage: train-finder <schedule.json> [<departure> <arrival> <criterion>]")]
    UnexpectedArguments(usize),
}
