//! Ticket price type.
//!
//! Uses `rust_decimal` so that prices read from the schedule compare exactly
//! (`164.65 == 164.65`) when ranking, without floating-point drift.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A ticket price.
///
/// Deserializes from either a JSON number or a numeric string and displays
/// with exactly two decimal places.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use train_finder::Price;
///
/// let price = Price::from_str("164.65").unwrap();
/// assert_eq!(price.to_string(), "164.65");
/// assert_eq!(Price::from_str("280").unwrap().to_string(), "280.00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(Decimal);

impl Price {
    /// Number of decimal places used for display.
    pub const DISPLAY_SCALE: usize = 2;

    /// Zero value.
    pub const ZERO: Self = Price(Decimal::ZERO);

    pub fn new(value: Decimal) -> Self {
        Price(value)
    }

    /// Returns `true` if the price is below zero.
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }
}

impl FromStr for Price {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Decimal::from_str(s.trim()).map(Price)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.*}", Self::DISPLAY_SCALE, self.0)
    }
}

impl Serialize for Price {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        <Decimal as Deserialize>::deserialize(deserializer).map(Price)
    }
}
