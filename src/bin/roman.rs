//! Command-line interface for romanum
//! This binary converts a Roman numeral given on the command line into its
//! integer value.
//!
//! Usage:
//!   roman `<numeral>` [--format `<format>`]

use clap::{Arg, Command};
use romanum::roman::roman_to_integer;
use serde::Serialize;

/// JSON payload for the `json` output format
#[derive(Serialize)]
struct Conversion<'a> {
    numeral: &'a str,
    value: u32,
}

fn main() {
    let matches = Command::new("roman")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert a Roman numeral to its integer value")
        .arg(
            Arg::new("numeral")
                .help("The Roman numeral to convert")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format ('plain' or 'json')")
                .default_value("plain"),
        )
        .get_matches();

    let numeral = matches.get_one::<String>("numeral").unwrap();
    let format = matches.get_one::<String>("format").unwrap();

    let value = match roman_to_integer(numeral) {
        Ok(value) => value,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    match format.as_str() {
        "plain" => println!("{}", value),
        "json" => {
            let conversion = Conversion { numeral, value };
            let output = serde_json::to_string(&conversion).unwrap_or_else(|e| {
                eprintln!("Serialization error: {}", e);
                std::process::exit(1);
            });
            println!("{}", output);
        }
        other => {
            eprintln!("Unknown format: {}", other);
            std::process::exit(1);
        }
    }
}
