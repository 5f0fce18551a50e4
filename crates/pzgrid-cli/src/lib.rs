//! The `pzgrid` command-line tool.
//!
//! Thin orchestration over `pzgrid-scheme` and `pzgrid-dataset`: every
//! subcommand reads its inputs, calls into the libraries and prints JSON or
//! canonical text to stdout. Logs go to stderr.

use std::{
    fs,
    io::{self, Read as _},
    path::Path,
};

use pzgrid_dataset::{build_derived_record, build_record};
use pzgrid_scheme::{SchemeRegistry, derive_problem};

pub use self::error::*;
use self::{
    batch::run_batch,
    cli::{Args, BatchArgs, Command, DecodeArgs, DeriveArgs},
};

pub mod batch;
pub mod cli;
mod error;
pub mod version;

/// Runs the parsed command.
///
/// # Errors
///
/// Returns an error if an input cannot be read, a single-puzzle command fails
/// to decode, or every record of a batch fails.
pub fn run(args: &Args) -> Result<(), CliError> {
    match &args.command {
        Command::Decode(decode) => run_decode(decode),
        Command::Batch(batch) => {
            let text = read_input(&batch.input)?;
            run_batch_command(batch, &text)
        }
        Command::Derive(derive) => run_derive(derive),
        Command::Schemes => {
            for name in SchemeRegistry::with_all_schemes().names() {
                println!("{name}");
            }
            Ok(())
        }
    }
}

fn run_decode(args: &DecodeArgs) -> Result<(), CliError> {
    let record = build_record(&args.to_request())?;
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}

fn run_batch_command(args: &BatchArgs, text: &str) -> Result<(), CliError> {
    let dataset = run_batch(text, args.name.as_deref(), args.jobs)?;
    println!("{}", serde_json::to_string_pretty(&dataset)?);
    Ok(())
}

fn run_derive(args: &DeriveArgs) -> Result<(), CliError> {
    let solution = read_input(&args.solution)?;
    let grid = read_input(&args.grid)?;
    let derived = derive_problem(&solution, &grid)?;
    let record = build_derived_record(&args.name, &args.source, &derived);
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}

/// Reads a whole file, or stdin when `path` is `-`.
fn read_input(path: &Path) -> Result<String, CliError> {
    let result = if path == Path::new("-") {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text).map(|_| text)
    } else {
        fs::read_to_string(path)
    };
    result.map_err(|source| CliError::Read {
        path: path.to_owned(),
        source,
    })
}
