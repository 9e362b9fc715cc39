//! `proquint` — convert between numbers and pronounceable phrases.
//!
//! Decimal or hex input encodes to a proquint phrase; anything else is
//! decoded as a phrase back to decimal. `-r` prints a random phrase
//! first. Exit codes: 0 success, 1 entropy failure, 2 bad input.

use std::io::{self, BufRead};
use std::process;

use clap::Parser;

use proquint_core::{numeral, phrase, random};

/// Convert between numbers and pronounceable proquint phrases.
#[derive(Debug, Parser)]
#[command(name = "proquint", version, about)]
struct Cli {
    /// Generate a random proquint phrase with at least this many bits
    /// if non-zero.
    #[arg(short = 'r', long = "random-bits", value_name = "BITS", default_value_t = 0)]
    random_bits: u64,

    /// Number (decimal, or hex with a 0x prefix) to encode, or phrase
    /// to decode; "-" reads one line from standard input.
    input: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    if cli.random_bits != 0 {
        match random::random_phrase(cli.random_bits) {
            Ok(generated) => println!("{generated}"),
            Err(err) => {
                eprintln!("error: {err}");
                process::exit(1);
            }
        }
    }

    let Some(arg) = cli.input else {
        return;
    };

    let arg = match resolve_input(&arg) {
        Ok(resolved) => resolved,
        Err(err) => {
            eprintln!("error: reading standard input: {err}");
            process::exit(2);
        }
    };

    let result = if numeral::is_number(&arg) {
        numeral::parse(&arg).map(|n| phrase::encode(&n.value, n.leading_zeros))
    } else {
        phrase::decode(&arg)
    };
    match result {
        Ok(line) => println!("{line}"),
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(2);
        }
    }
}

/// Resolve "-" to one line read from standard input; on EOF the
/// literal argument falls through to conversion (and fails there as
/// an invalid phrase).
fn resolve_input(arg: &str) -> io::Result<String> {
    if arg != "-" {
        return Ok(arg.to_string());
    }
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(arg.to_string());
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
