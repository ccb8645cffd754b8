//! dataval CLI entry point
//!
//! This is a minimal entrypoint that:
//! 1. Parses CLI arguments and dispatches commands (via cli::run)
//! 2. Prints errors to stderr
//! 3. Exits with non-zero on failure
//!
//! All logic is delegated to the CLI module.

use dataval::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
