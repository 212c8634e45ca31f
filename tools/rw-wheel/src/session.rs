//! One operator session: collect the fields, spin the wheel, print the code.

use crate::args::Args;
use crate::prompt::{PromptError, Prompter};
use crossterm::style::Stylize;
use rw_01_wheel_codec::{
    zero_pad3, EncodedReport, FixedStartIndex, WheelCodecApi, WheelError, WheelSeeds,
    WheelService,
};
use std::io::{BufRead, Write};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Shown when no reporting number is configured
pub const DEFAULT_RECIPIENT: &str = "your reporting number";

/// Session failures
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error(transparent)]
    Wheel(#[from] WheelError),
}

impl From<std::io::Error> for SessionError {
    fn from(err: std::io::Error) -> Self {
        SessionError::Prompt(PromptError::Io(err))
    }
}

/// Run a full session against an already chosen start index.
///
/// Each accepted field is echoed with its segment before the next one is
/// asked for.
pub fn run<R: BufRead, W: Write>(
    args: &Args,
    start_index: usize,
    prompter: &mut Prompter<R, W>,
) -> Result<EncodedReport, SessionError> {
    let seeds = WheelSeeds::at(start_index)?;

    let day = prompter.day(args.day.as_deref())?;
    prompter.accepted(&format!("day={}, code={}", day, zero_pad3(day * seeds.day)))?;

    let condition = prompter.condition(args.condition.as_deref())?;
    prompter.accepted(&format!(
        "disease={}, code={}",
        condition.name(),
        zero_pad3(condition.rank() * seeds.condition)
    ))?;

    let cases = prompter.cases(args.cases.as_deref())?;
    prompter.accepted(&format!("cases={}, code={}", cases, zero_pad3(cases * seeds.cases)))?;

    let wheel = WheelService::new(Arc::new(FixedStartIndex(start_index)));
    let report = wheel.encode_report(day, condition, cases)?;
    info!(start_index, code = %report.message, "Encoded report");

    let recipient = args.to.as_deref().unwrap_or(DEFAULT_RECIPIENT);
    let out = prompter.output();
    writeln!(out, "Please text {} to {}", report.message, recipient)?;
    writeln!(out, "{}", "THANK YOU!".green())?;
    out.flush()?;

    Ok(report)
}
