//! # Train Finder
//!
//! Finds the best three scheduled trains between two stations, ranked by
//! price, arrival time or departure time.
//!
//! ## Design Principles
//!
//! - **Typed input**: raw strings become a [`Query`] only after validation
//! - **Atomic decoding**: one malformed schedule entry fails the whole load
//! - **Exact prices**: fixed-point comparison via `rust_decimal`
//! - **Deterministic output**: equal keys are ordered by train id
//!
//! ## Example
//!
//! ```no_run
//! use train_finder::{validate, Schedule};
//! use std::fs::File;
//!
//! let schedule = Schedule::from_json_reader(File::open("data.json").unwrap()).unwrap();
//! let query = validate("1902", "1929", "price").unwrap();
//! train_finder::write_trains(&schedule.find_trains(&query), std::io::stdout()).unwrap();
//! ```

pub mod engine;
pub mod error;
pub mod input;
pub mod output;
pub mod price;
pub mod query;
pub mod time;
pub mod train;

pub use engine::{find_trains, Schedule, MAX_RESULTS};
pub use error::{DecodeError, FinderError, QueryError, Result, TimeError};
pub use input::{prompt_query, RawQuery};
pub use output::write_trains;
pub use price::Price;
pub use query::{validate, Criterion, Query};
pub use time::TimeOfDay;
pub use train::{decode, decode_json, RawTrainRecord, TrainRecord};
