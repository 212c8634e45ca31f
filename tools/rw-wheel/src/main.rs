//! RW-Wheel: operator CLI for the reporting wheel

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use crossterm::style::Stylize;

use rw_01_wheel_codec::{RandomStartIndex, StartIndexSource, MAX_START_INDEX};
use rw_telemetry::{init_telemetry, TelemetryConfig};
use rw_wheel::{run, Args, Prompter};

fn main() -> ExitCode {
    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("{}", "FAILED".red());
            println!("{}", format!("{e:#}").red());
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _telemetry = init_telemetry(TelemetryConfig::for_cli("rw-wheel"))
        .context("failed to initialize logging")?;

    let start_index = args
        .start_index
        .unwrap_or_else(|| RandomStartIndex::new().next_start_index(MAX_START_INDEX));

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    run(&args, start_index, &mut prompter).context("could not build the report code")?;

    Ok(())
}
