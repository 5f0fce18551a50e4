//! `pzgrid`: decode logic-puzzle compact strings from the command line.

use std::process::ExitCode;

use clap::Parser as _;
use pzgrid_cli::cli::Args;

fn main() -> ExitCode {
    better_panic::install();

    let args = Args::parse();
    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    log::debug!("pzgrid {}", pzgrid_cli::version::build_version());
    match pzgrid_cli::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
