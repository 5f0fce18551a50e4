//! Command-line arguments.

use std::{num::NonZeroUsize, path::PathBuf};

use clap::{Args as ClapArgs, Parser, Subcommand};
use pzgrid_core::EdgeClues;
use pzgrid_dataset::RecordRequest;

use crate::version::VERSION;

/// Decode logic-puzzle compact strings into canonical grid text.
#[derive(Debug, Parser)]
#[command(author, version = VERSION.as_str(), about)]
pub struct Args {
    /// Log decoder details (sets the default log level to `debug`).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// `pzgrid` subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Decode one compact string and print its record as JSON.
    Decode(DecodeArgs),
    /// Decode a JSON-lines file of record requests into a dataset.
    Batch(BatchArgs),
    /// Derive edge clues from a solved grid and print problem and solution.
    Derive(DeriveArgs),
    /// List the registered puzzle types.
    Schemes,
}

/// Arguments of `pzgrid decode`.
#[derive(Debug, ClapArgs)]
pub struct DecodeArgs {
    /// Puzzle type (see `pzgrid schemes`).
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub puzzle_type: String,

    /// Number of grid rows. Ignored by schemes that take edge clues.
    #[arg(short, long, default_value_t = 0)]
    pub rows: usize,

    /// Number of grid columns. Ignored by schemes that take edge clues.
    #[arg(short, long, default_value_t = 0)]
    pub cols: usize,

    /// Column clues, comma-separated, left to right.
    #[arg(long, value_name = "N,..", value_delimiter = ',')]
    pub cols_top: Vec<usize>,

    /// Row clues, comma-separated, top to bottom.
    #[arg(long, value_name = "N,..", value_delimiter = ',')]
    pub rows_left: Vec<usize>,

    /// Site difficulty rating.
    #[arg(long, default_value_t = 0)]
    pub difficulty: u32,

    /// Where the puzzle was found.
    #[arg(long, default_value = "")]
    pub source: String,

    /// The compact string.
    pub compact: String,
}

impl DecodeArgs {
    /// Converts the arguments into a record request.
    #[must_use]
    pub fn to_request(&self) -> RecordRequest {
        let request = RecordRequest::new(&*self.puzzle_type, self.rows, self.cols, &*self.compact)
            .with_difficulty(self.difficulty)
            .with_source(&*self.source);
        if self.cols_top.is_empty() && self.rows_left.is_empty() {
            request
        } else {
            request.with_clues(EdgeClues::new(
                self.cols_top.clone(),
                self.rows_left.clone(),
            ))
        }
    }
}

/// Arguments of `pzgrid batch`.
#[derive(Debug, ClapArgs)]
pub struct BatchArgs {
    /// Number of worker threads (default: one per CPU).
    #[arg(short, long, value_name = "N")]
    pub jobs: Option<NonZeroUsize>,

    /// Dataset name (default: the first request's puzzle type).
    #[arg(short, long)]
    pub name: Option<String>,

    /// JSON-lines file of record requests, `-` for stdin.
    #[arg(value_name = "FILE")]
    pub input: PathBuf,
}

/// Arguments of `pzgrid derive`.
#[derive(Debug, ClapArgs)]
pub struct DeriveArgs {
    /// Name the puzzle was published under, used as the id prefix.
    #[arg(short, long)]
    pub name: String,

    /// Where the puzzle was found.
    #[arg(long, default_value = "")]
    pub source: String,

    /// File holding the solved grid, `-` for stdin.
    #[arg(value_name = "SOLUTION_FILE")]
    pub solution: PathBuf,

    /// File holding the unsolved grid body, `-` for stdin.
    #[arg(value_name = "GRID_FILE")]
    pub grid: PathBuf,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_command_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_decode_with_clues() {
        let args = Args::try_parse_from([
            "pzgrid",
            "decode",
            "--type",
            "battleship",
            "--cols-top",
            "2,1",
            "--rows-left",
            "1,2",
            "0a1",
        ])
        .unwrap();
        let Command::Decode(decode) = args.command else {
            panic!("expected decode, got {:?}", args.command);
        };
        let request = decode.to_request();
        assert_eq!(request.puzzle_type, "battleship");
        assert_eq!(request.compact, "0a1");
        assert_eq!(request.clues, Some(EdgeClues::new(vec![2, 1], vec![1, 2])));
    }

    #[test]
    fn test_decode_without_clues() {
        let args = Args::try_parse_from([
            "pzgrid", "-v", "decode", "-t", "shikaku", "-r", "1", "-c", "3", "--source", "x", "a5",
        ])
        .unwrap();
        assert!(args.verbose);
        let Command::Decode(decode) = args.command else {
            panic!("expected decode, got {:?}", args.command);
        };
        assert_eq!(
            decode.to_request(),
            RecordRequest::new("shikaku", 1, 3, "a5").with_source("x")
        );
    }

    #[test]
    fn test_batch_rejects_zero_jobs() {
        assert!(Args::try_parse_from(["pzgrid", "batch", "--jobs", "0", "-"]).is_err());
        let args = Args::try_parse_from(["pzgrid", "batch", "-j", "4", "in.jsonl"]).unwrap();
        let Command::Batch(batch) = args.command else {
            panic!("expected batch, got {:?}", args.command);
        };
        assert_eq!(batch.jobs.map(NonZeroUsize::get), Some(4));
        assert_eq!(batch.input, PathBuf::from("in.jsonl"));
    }
}
