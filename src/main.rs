//! Train Finder CLI
//!
//! Reads a JSON train schedule and prints the best three trains between two
//! stations as CSV.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- data.json 1902 1929 price > trains.csv
//! cargo run -- data.json            # prompts for the query on stdin
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `info` to control logging verbosity

use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::process;
use train_finder::{prompt_query, validate, write_trains, FinderError, RawQuery, Result, Schedule};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    let raw = match args.len() {
        0 => return Err(FinderError::MissingArgument),
        1 => {
            let stdin = io::stdin();
            prompt_query(stdin.lock(), io::stderr())?
        }
        4 => RawQuery {
            departure: args[1].clone(),
            arrival: args[2].clone(),
            criterion: args[3].clone(),
        },
        n => return Err(FinderError::UnexpectedArguments(n)),
    };

    let query = validate(&raw.departure, &raw.arrival, &raw.criterion)?;

    let file = File::open(&args[0])?;
    let schedule = Schedule::from_json_reader(BufReader::new(file))?;

    let trains = schedule.find_trains(&query);

    let stdout = io::stdout();
    write_trains(&trains, stdout.lock())?;

    Ok(())
}
