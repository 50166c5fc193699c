//! Core query engine.
//!
//! Filters a decoded record set down to one station pair, ranks it by the
//! query's criterion and keeps the best [`MAX_RESULTS`]. The engine never
//! mutates the record set it is given.

use crate::error::FinderError;
use crate::query::{Criterion, Query};
use crate::train::{decode_json, TrainRecord};
use log::{debug, info};
use std::cmp::Ordering;
use std::io::Read;

/// Number of trains returned by a query.
pub const MAX_RESULTS: usize = 3;

/// Finds the best trains for a query.
///
/// Keeps records whose departure AND arrival stations both match, sorts them
/// ascending by the criterion with ties broken by ascending train id, and
/// returns at most [`MAX_RESULTS`] of them. No match is an empty result, not
/// an error.
pub fn find_trains(query: &Query, records: &[TrainRecord]) -> Vec<TrainRecord> {
    let mut matching: Vec<&TrainRecord> = records
        .iter()
        .filter(|r| {
            r.departure_station_id == query.departure_station_id()
                && r.arrival_station_id == query.arrival_station_id()
        })
        .collect();

    debug!(
        "{} of {} records run {} -> {}",
        matching.len(),
        records.len(),
        query.departure_station_id(),
        query.arrival_station_id()
    );

    let criterion = query.criterion();
    matching.sort_by(|a, b| compare(criterion, a, b));

    let result: Vec<TrainRecord> = matching.into_iter().take(MAX_RESULTS).cloned().collect();

    if result.is_empty() {
        info!(
            "No trains from {} to {}",
            query.departure_station_id(),
            query.arrival_station_id()
        );
    }

    result
}

/// Orders two records by the criterion key, then by id.
fn compare(criterion: Criterion, a: &TrainRecord, b: &TrainRecord) -> Ordering {
    let by_key = match criterion {
        Criterion::Price => a.price.cmp(&b.price),
        Criterion::ArrivalTime => a.arrival_time.cmp(&b.arrival_time),
        Criterion::DepartureTime => a.departure_time.cmp(&b.departure_time),
    };
    by_key.then_with(|| a.id.cmp(&b.id))
}

/// A decoded train schedule.
///
/// Holds the full record set in source order. Queries borrow it immutably, so
/// one schedule can serve any number of queries.
#[derive(Debug, Clone, Default)]
pub struct Schedule {
    records: Vec<TrainRecord>,
}

impl Schedule {
    /// Creates a schedule from already-decoded records.
    pub fn from_records(records: Vec<TrainRecord>) -> Self {
        Schedule { records }
    }

    /// Reads and decodes a JSON schedule.
    ///
    /// The whole source is read before decoding; any bad entry fails the load.
    pub fn from_json_reader<R: Read>(mut reader: R) -> Result<Self, FinderError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        let records = decode_json(&bytes)?;
        Ok(Schedule { records })
    }

    pub fn records(&self) -> &[TrainRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Runs a query against this schedule. See [`find_trains`].
    pub fn find_trains(&self, query: &Query) -> Vec<TrainRecord> {
        find_trains(query, &self.records)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::price::Price;
    use crate::query::validate;
    use crate::time::TimeOfDay;
    use chrono::Timelike;
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    /// Small station and price ranges so that matches and ties are common.
    fn record_strategy() -> impl Strategy<Value = TrainRecord> {
        (
            -25i64..25,
            1u32..4,
            1u32..4,
            0i64..500,
            0u32..86_400,
            0u32..86_400,
        )
            .prop_map(|(id, dep, arr, cents, arr_secs, dep_secs)| TrainRecord {
                id,
                departure_station_id: dep,
                arrival_station_id: arr,
                price: Price::new(Decimal::new(cents, 2)),
                arrival_time: secs_to_time(arr_secs),
                departure_time: secs_to_time(dep_secs),
            })
    }

    fn secs_to_time(secs: u32) -> TimeOfDay {
        TimeOfDay::from_hms(secs / 3600, (secs / 60) % 60, secs % 60).unwrap()
    }

    fn query_strategy() -> impl Strategy<Value = Query> {
        (
            1u32..4,
            1u32..4,
            prop_oneof![
                Just("price"),
                Just("arrival-time"),
                Just("departure-time")
            ],
        )
            .prop_map(|(dep, arr, c)| validate(&dep.to_string(), &arr.to_string(), c).unwrap())
    }

    /// Generated prices all have scale 2, so the mantissa orders them.
    fn key(criterion: Criterion, r: &TrainRecord) -> (i128, i64) {
        let k = match criterion {
            Criterion::Price => r.price.as_decimal().mantissa(),
            Criterion::ArrivalTime => i128::from(r.arrival_time.as_naive().num_seconds_from_midnight()),
            Criterion::DepartureTime => {
                i128::from(r.departure_time.as_naive().num_seconds_from_midnight())
            }
        };
        (k, r.id)
    }

    proptest! {
        #[test]
        fn result_is_bounded(query in query_strategy(), records in prop::collection::vec(record_strategy(), 0..40)) {
            prop_assert!(find_trains(&query, &records).len() <= MAX_RESULTS);
        }

        #[test]
        fn result_only_holds_exact_station_pair(query in query_strategy(), records in prop::collection::vec(record_strategy(), 0..40)) {
            for r in find_trains(&query, &records) {
                prop_assert_eq!(r.departure_station_id, query.departure_station_id());
                prop_assert_eq!(r.arrival_station_id, query.arrival_station_id());
            }
        }

        #[test]
        fn result_is_sorted_with_id_tie_break(query in query_strategy(), records in prop::collection::vec(record_strategy(), 0..40)) {
            let result = find_trains(&query, &records);
            for window in result.windows(2) {
                let a = key(query.criterion(), &window[0]);
                let b = key(query.criterion(), &window[1]);
                prop_assert!(a <= b, "Not sorted: {:?} should come before {:?}", a, b);
            }
        }

        #[test]
        fn result_is_the_best_of_all_matches(query in query_strategy(), records in prop::collection::vec(record_strategy(), 0..40)) {
            let result = find_trains(&query, &records);
            let matching = records
                .iter()
                .filter(|r| {
                    r.departure_station_id == query.departure_station_id()
                        && r.arrival_station_id == query.arrival_station_id()
                })
                .count();
            prop_assert_eq!(result.len(), matching.min(MAX_RESULTS));

            if let Some(last) = result.last() {
                let worst_kept = key(query.criterion(), last);
                for r in records.iter().filter(|r| {
                    r.departure_station_id == query.departure_station_id()
                        && r.arrival_station_id == query.arrival_station_id()
                        && !result.contains(r)
                }) {
                    prop_assert!(key(query.criterion(), r) >= worst_kept);
                }
            }
        }

        #[test]
        fn find_trains_is_idempotent(query in query_strategy(), records in prop::collection::vec(record_strategy(), 0..40)) {
            prop_assert_eq!(find_trains(&query, &records), find_trains(&query, &records));
        }
    }
}
