mod cli;
mod commands;
mod error;
mod page_range;
mod pdf;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use error::SplitError;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // `{:#}` keeps the context chain on a single line
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let path = cli.path.ok_or(SplitError::MissingArgument)?;
    commands::split::run(&path, cli.ranges.as_deref())
}
