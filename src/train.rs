//! Train records: the raw schedule entry and the decoded domain record.
//!
//! Decoding is two-stage. Serde reads each entry into a [`RawTrainRecord`]
//! with its times still as text, then [`decode`] maps every raw entry into a
//! [`TrainRecord`]. A single bad entry fails the whole set.

use crate::error::DecodeError;
use crate::price::Price;
use crate::time::TimeOfDay;
use log::debug;
use serde::{Deserialize, Serialize};

/// A schedule entry as it appears in the source data.
///
/// Field names match the source exactly (`trainId`, `departureStationId`,
/// `arrivalStationId`, `price`, `arrivalTime`, `departureTime`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTrainRecord {
    pub train_id: i64,
    pub departure_station_id: u32,
    pub arrival_station_id: u32,
    pub price: Price,
    pub arrival_time: String,
    pub departure_time: String,
}

impl RawTrainRecord {
    /// Maps the raw entry into a domain record, parsing both times.
    pub fn parse(&self) -> Result<TrainRecord, DecodeError> {
        if self.price.is_negative() {
            return Err(DecodeError::NegativePrice {
                train_id: self.train_id,
                price: self.price.to_string(),
            });
        }

        Ok(TrainRecord {
            id: self.train_id,
            departure_station_id: self.departure_station_id,
            arrival_station_id: self.arrival_station_id,
            price: self.price,
            arrival_time: self.parse_time("arrivalTime", &self.arrival_time)?,
            departure_time: self.parse_time("departureTime", &self.departure_time)?,
        })
    }

    fn parse_time(&self, field: &'static str, value: &str) -> Result<TimeOfDay, DecodeError> {
        TimeOfDay::parse_hms(value).map_err(|source| DecodeError::InvalidTime {
            train_id: self.train_id,
            field,
            value: value.to_string(),
            source,
        })
    }
}

/// A decoded, immutable train record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainRecord {
    /// Train id; only used to break ranking ties
    #[serde(rename = "trainId")]
    pub id: i64,
    pub departure_station_id: u32,
    pub arrival_station_id: u32,
    pub price: Price,
    #[serde(serialize_with = "serialize_time")]
    pub arrival_time: TimeOfDay,
    #[serde(serialize_with = "serialize_time")]
    pub departure_time: TimeOfDay,
}

fn serialize_time<S>(time: &TimeOfDay, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_str(time)
}

/// Decodes raw entries into train records, preserving order.
///
/// Fails on the first bad entry; no partial set is ever returned.
pub fn decode(raw: &[RawTrainRecord]) -> Result<Vec<TrainRecord>, DecodeError> {
    let records = raw
        .iter()
        .map(RawTrainRecord::parse)
        .collect::<Result<Vec<_>, _>>()?;
    debug!("Decoded {} train records", records.len());
    Ok(records)
}

/// Decodes a JSON array of schedule entries.
pub fn decode_json(bytes: &[u8]) -> Result<Vec<TrainRecord>, DecodeError> {
    let raw: Vec<RawTrainRecord> = serde_json::from_slice(bytes)?;
    decode(&raw)
}
