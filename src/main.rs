//! # Executor Main Entry Point
//!
//! Thin shell over the library: reads lines from stdin, expands embedded
//! `{command args}>` patterns and prints the result.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use executor::cmd_args::CommandLineArgs;
use executor::Expander;

fn main() -> Result<()> {
    let args = CommandLineArgs::parse();

    let default_filter = if args.verbose() { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .init();

    println!("Executor - type text containing {{command args}}> patterns");
    println!("Try {{help}}> for the command list, Ctrl+D to quit");

    let expander = Expander::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = line?;
        match expander.expand(&line) {
            Some(expanded) => writeln!(stdout, "{expanded}")?,
            None => writeln!(stdout, "{line}")?,
        }
    }

    Ok(())
}
