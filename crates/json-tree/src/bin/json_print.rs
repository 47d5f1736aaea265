//! `json-print` — parse a JSON document and pretty-print it to stdout.
//!
//! Usage:
//!   json-print [--ascii] [FILE]
//!
//! Reads from FILE when given, stdin otherwise. On success the printed
//! document is followed by a blank line and the exit code is 0; a parse
//! failure reports the status code and exits 1.

use json_tree::{parse, JsonPrinter};
use std::io::{self, Read, Write};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut ascii = false;
    let mut file: Option<String> = None;
    for arg in &args[1..] {
        match arg.as_str() {
            "--ascii" => ascii = true,
            _ => file = Some(arg.clone()),
        }
    }

    let mut input = Vec::new();
    if let Some(path) = &file {
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
        Ok(tree) => {
            let text = JsonPrinter::new().ascii(ascii).print(&tree);
            io::stdout().write_all(&text).unwrap();
            println!();
        }
        Err(e) => {
            println!("Parsing failed with error code {}", e.code());
            std::process::exit(1);
        }
    }
}
