//! Sweep driver: runs every strategy across seeded random instances and
//! prints one record per instance.
//!
//! Usage: strategy-sweep [--json] [max_n] [instances_per_n] [base_seed]

use std::env;
use std::process;

use cointour_validation::{run_instance, SweepRecord};

fn main() {
    let mut json = false;
    let mut positional = Vec::new();
    for arg in env::args().skip(1) {
        if arg == "--json" {
            json = true;
        } else if arg.starts_with('-') {
            eprintln!("unknown flag {arg}");
            eprintln!("usage: strategy-sweep [--json] [max_n] [instances_per_n] [base_seed]");
            process::exit(2);
        } else {
            positional.push(arg);
        }
    }

    let max_n: usize = parse_or(positional.first(), 8);
    let per_n: u64 = parse_or(positional.get(1), 5);
    let base_seed: u64 = parse_or(positional.get(2), 42);

    if !json {
        println!("{}", SweepRecord::CSV_HEADER);
    }
    for n in 2..=max_n {
        for k in 0..per_n {
            let record = run_instance(n, base_seed + 1000 * n as u64 + k);
            if json {
                match serde_json::to_string(&record) {
                    Ok(line) => println!("{line}"),
                    Err(err) => {
                        eprintln!("failed to serialize record: {err}");
                        process::exit(1);
                    }
                }
            } else {
                println!("{}", record.to_csv_row());
            }
        }
    }
}

fn parse_or<T: std::str::FromStr>(arg: Option<&String>, default: T) -> T {
    match arg {
        Some(raw) => match raw.parse() {
            Ok(value) => value,
            Err(_) => {
                eprintln!("bad argument {raw:?}");
                process::exit(2);
            }
        },
        None => default,
    }
}
