//! Time-of-day values for schedule entries.
//!
//! Schedules carry wall-clock times as `HH:MM:SS` text with no date. Only the
//! strict, zero-padded 24-hour form is accepted.

use crate::error::TimeError;
use chrono::{NaiveTime, Timelike};
use std::fmt;
use std::str::FromStr;

/// A clock time in `[00:00:00, 23:59:59]` with second precision.
///
/// # Examples
///
/// ```
/// use train_finder::TimeOfDay;
///
/// let t = TimeOfDay::parse_hms("04:15:00").unwrap();
/// assert_eq!(t.to_string(), "04:15:00");
/// assert!(TimeOfDay::parse_hms("25:00:00").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    /// Creates a time from its components, or `None` if any is out of range.
    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, second).map(TimeOfDay)
    }

    /// Parses `HH:MM:SS`.
    pub fn parse_hms(s: &str) -> Result<Self, TimeError> {
        if s.len() != 8 {
            return Err(TimeError::new("expected HH:MM:SS format"));
        }

        let bytes = s.as_bytes();
        if bytes[2] != b':' || bytes[5] != b':' {
            return Err(TimeError::new("expected colons at positions 2 and 5"));
        }

        let hour =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;
        let second = parse_two_digits(&bytes[6..8])
            .ok_or_else(|| TimeError::new("invalid second digits"))?;

        // chrono owns the range check (hour 0-23, minute and second 0-59)
        Self::from_hms(hour, minute, second)
            .ok_or_else(|| TimeError::new("time out of range 00:00:00-23:59:59"))
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    pub fn second(&self) -> u32 {
        self.0.second()
    }

    /// Returns the underlying chrono time.
    pub fn as_naive(&self) -> NaiveTime {
        self.0
    }
}

fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    match bytes {
        [a @ b'0'..=b'9', b @ b'0'..=b'9'] => Some(u32::from(a - b'0') * 10 + u32::from(b - b'0')),
        _ => None,
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hms(s)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M:%S"))
    }
}
