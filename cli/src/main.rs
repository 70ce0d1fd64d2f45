//! `cbits` calls the runtime's exported functions from the command line, so that their output
//! can be observed on a real standard output.

use std::ffi::CString;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Calls `print_int`.
    Int {
        #[arg(allow_negative_numbers = true)]
        value: i32,
    },
    /// Calls `print_float`.
    Float {
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },
    /// Calls `print_string`.
    String { value: String },
    /// Calls `putchard` once per value.
    Putchard {
        #[arg(allow_negative_numbers = true)]
        values: Vec<f64>,
    },
}

/// Logs go to stderr so that stdout only ever carries what the runtime wrote.
fn init_logging() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::WARN.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Int { value } => cbits::print_int(value),
        Command::Float { value } => cbits::print_float(value),
        Command::String { value } => {
            let string = CString::new(value)
                .context("strings passed to the runtime cannot contain nul bytes")?;
            // SAFETY: `string` is nul-terminated and outlives the call.
            unsafe { cbits::print_string(string.as_ptr()) }
        }
        Command::Putchard { values } => {
            for value in values {
                cbits::putchard(value);
            }
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    init_logging();

    let args = Args::parse();
    tracing::debug!(command = ?args.command, "calling the runtime");

    run(args.command)
}
