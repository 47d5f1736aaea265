//! `json-check` — parse a JSON document and report only the status.
//!
//! Usage:
//!   json-check [FILE]
//!
//! Reads from FILE when given, stdin otherwise. Exits 0 when the document
//! parses, 1 otherwise.

use json_tree::parse;
use std::io::{self, Read};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut input = Vec::new();
    if let Some(path) = args.get(1) {
        match std::fs::read(path) {
            Ok(data) => input = data,
            Err(_) => {
                eprintln!("Unable to open file.");
                std::process::exit(1);
            }
        }
    } else if let Err(e) = io::stdin().read_to_end(&mut input) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match parse(&input) {
        Ok(_) => println!("Parsing completed"),
        Err(e) => {
            println!("Parsing failed with error code {}", e.code());
            std::process::exit(1);
        }
    }
}
