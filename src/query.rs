//! Query validation.
//!
//! Turns three raw strings into a [`Query`]. A `Query` only exists once all
//! three values have passed validation.

use crate::error::QueryError;
use std::fmt;
use std::str::FromStr;

/// The field trains are ranked by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    /// Cheapest first.
    Price,

    /// Earliest arrival first.
    ArrivalTime,

    /// Earliest departure first.
    DepartureTime,
}

impl Criterion {
    /// The exact, case-sensitive input spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Criterion::Price => "price",
            Criterion::ArrivalTime => "arrival-time",
            Criterion::DepartureTime => "departure-time",
        }
    }
}

impl FromStr for Criterion {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "price" => Ok(Criterion::Price),
            "arrival-time" => Ok(Criterion::ArrivalTime),
            "departure-time" => Ok(Criterion::DepartureTime),
            _ => Err(QueryError::UnsupportedCriteria),
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated query.
///
/// Departure and arrival may name the same station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Query {
    departure_station_id: u32,
    arrival_station_id: u32,
    criterion: Criterion,
}

impl Query {
    pub fn departure_station_id(&self) -> u32 {
        self.departure_station_id
    }

    pub fn arrival_station_id(&self) -> u32 {
        self.arrival_station_id
    }

    pub fn criterion(&self) -> Criterion {
        self.criterion
    }
}

/// Validates raw query input.
///
/// Checks run in a fixed order and the first failure is reported:
/// empty departure, bad departure, empty arrival, bad arrival, criterion.
///
/// # Examples
///
/// ```
/// use train_finder::{validate, Criterion, QueryError};
///
/// let query = validate("1902", "1929", "price").unwrap();
/// assert_eq!(query.criterion(), Criterion::Price);
///
/// assert_eq!(validate("", "", ""), Err(QueryError::EmptyDepartureStation));
/// ```
pub fn validate(departure: &str, arrival: &str, criterion: &str) -> Result<Query, QueryError> {
    if departure.is_empty() {
        return Err(QueryError::EmptyDepartureStation);
    }
    let departure_station_id =
        parse_station_id(departure).ok_or(QueryError::BadDepartureStationInput)?;

    if arrival.is_empty() {
        return Err(QueryError::EmptyArrivalStation);
    }
    let arrival_station_id =
        parse_station_id(arrival).ok_or(QueryError::BadArrivalStationInput)?;

    let criterion = criterion.parse()?;

    Ok(Query {
        departure_station_id,
        arrival_station_id,
        criterion,
    })
}

/// Station ids are integers >= 1. No trimming is done.
fn parse_station_id(s: &str) -> Option<u32> {
    let value: i64 = s.parse().ok()?;
    if value < 1 {
        return None;
    }
    u32::try_from(value).ok()
}
