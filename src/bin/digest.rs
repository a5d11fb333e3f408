//! Command-line digest driver.
//!
//! Hashes standard input in full with the algorithm named by the single
//! positional argument and prints the hex digest on stdout.

use std::env;
use std::io;
use std::process::ExitCode;

use rfc3174::hash_reader;

fn usage() -> ExitCode {
    eprintln!("usage: digest <algorithm>");
    eprintln!("supported algorithms: sha1");
    ExitCode::FAILURE
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let [algorithm] = args.as_slice() else {
        return usage();
    };
    if algorithm.as_str() != "sha1" {
        eprintln!("unknown algorithm: {algorithm}");
        return usage();
    }

    match hash_reader(io::stdin().lock()) {
        Ok(hex) => {
            println!("{hex}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("digest: {err}");
            ExitCode::FAILURE
        }
    }
}
