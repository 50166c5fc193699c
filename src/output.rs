//! CSV rendering of query results.

use crate::error::Result;
use crate::train::TrainRecord;
use std::io::Write;

const HEADER: [&str; 6] = [
    "trainId",
    "departureStationId",
    "arrivalStationId",
    "price",
    "arrivalTime",
    "departureTime",
];

/// Writes trains as CSV in the given order.
///
/// The header is always written, so an empty result is a header-only table.
pub fn write_trains<W: Write>(trains: &[TrainRecord], writer: W) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(HEADER)?;
    for train in trains {
        csv_writer.serialize(train)?;
    }

    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::price::Price;
    use crate::time::TimeOfDay;
    use std::str::FromStr;

    fn render(trains: &[TrainRecord]) -> String {
        let mut output = Vec::new();
        write_trains(trains, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_output_format() {
        let train = TrainRecord {
            id: 2201,
            departure_station_id: 1902,
            arrival_station_id: 1929,
            price: Price::from_str("280").unwrap(),
            arrival_time: TimeOfDay::from_hms(6, 15, 0).unwrap(),
            departure_time: TimeOfDay::from_hms(14, 55, 0).unwrap(),
        };

        let output = render(&[train]);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            vec![
                "trainId,departureStationId,arrivalStationId,price,arrivalTime,departureTime",
                "2201,1902,1929,280.00,06:15:00,14:55:00",
            ]
        );
    }

    #[test]
    fn test_empty_result_is_header_only() {
        let output = render(&[]);
        assert_eq!(
            output.trim_end(),
            "trainId,departureStationId,arrivalStationId,price,arrivalTime,departureTime"
        );
    }
}
