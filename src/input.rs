//! Interactive query input.
//!
//! Prompts for the three query values one line at a time. Values are only
//! trimmed here; validation is left to [`crate::validate`].

use crate::error::Result;
use std::io::{BufRead, Write};

/// Unvalidated query values as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawQuery {
    pub departure: String,
    pub arrival: String,
    pub criterion: String,
}

/// Asks for departure station, arrival station and criterion.
///
/// End of input yields empty strings.
pub fn prompt_query<R: BufRead, W: Write>(mut reader: R, mut writer: W) -> Result<RawQuery> {
    let departure = ask(&mut reader, &mut writer, "Departure station id?")?;
    let arrival = ask(&mut reader, &mut writer, "Arrival station id?")?;
    let criterion = ask(
        &mut reader,
        &mut writer,
        "Sort by (price, arrival-time, departure-time)?",
    )?;

    Ok(RawQuery {
        departure,
        arrival,
        criterion,
    })
}

fn ask<R: BufRead, W: Write>(reader: &mut R, writer: &mut W, prompt: &str) -> Result<String> {
    writeln!(writer, "{}", prompt)?;
    writer.flush()?;

    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line.trim().to_string())
}
