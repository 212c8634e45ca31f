//! Interactive re-prompting for report fields.
//!
//! Works over any `BufRead`/`Write` pair so sessions can be scripted.

use crossterm::style::{style, Stylize};
use rw_01_wheel_codec::{validate_case_count, validate_day, ConditionType};
use std::io::{BufRead, Write};
use thiserror::Error;

pub const INVALID_DAY: &str = "Missing/invalid day provided (1-31 required)";
pub const INVALID_CONDITION: &str = "Missing/invalid condition code provided";
pub const INVALID_CASES: &str = "Missing/invalid cases metric provided (1-20 required)";

/// Prompting failures
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("input closed while waiting for {field}")]
    EndOfInput { field: &'static str },

    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Asks for report fields until each one is valid.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Borrow the output stream.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Day of month, starting from an optional command-line value.
    pub fn day(&mut self, initial: Option<&str>) -> Result<u32, PromptError> {
        self.resolve(
            "day",
            initial,
            INVALID_DAY,
            "What day of the month is this report for?: ",
            |raw| raw.trim().parse().ok().and_then(|d| validate_day(d).ok()),
        )
    }

    /// Condition from its single-letter mnemonic.
    pub fn condition(&mut self, initial: Option<&str>) -> Result<ConditionType, PromptError> {
        let mut question =
            String::from("Which condition are you reporting? (use the single-letter code only):\n");
        for condition in ConditionType::ALL {
            question.push_str(&format!("{}: {}\n", condition.mnemonic(), condition.name()));
        }

        self.resolve(
            "condition",
            initial,
            INVALID_CONDITION,
            &question,
            ConditionType::from_mnemonic,
        )
    }

    /// Case count, starting from an optional command-line value.
    pub fn cases(&mut self, initial: Option<&str>) -> Result<u32, PromptError> {
        self.resolve(
            "cases",
            initial,
            INVALID_CASES,
            "How many cases are you reporting?: ",
            |raw| raw.trim().parse().ok().and_then(|n| validate_case_count(n).ok()),
        )
    }

    /// Print an accepted value in green.
    pub fn accepted(&mut self, line: &str) -> Result<(), PromptError> {
        writeln!(self.output, "{}", style(line).green())?;
        writeln!(self.output)?;
        Ok(())
    }

    fn resolve<T, F>(
        &mut self,
        field: &'static str,
        initial: Option<&str>,
        notice: &str,
        question: &str,
        parse: F,
    ) -> Result<T, PromptError>
    where
        F: Fn(&str) -> Option<T>,
    {
        let mut candidate = initial.and_then(&parse);

        loop {
            if let Some(value) = candidate {
                return Ok(value);
            }

            writeln!(self.output, "{}", style(notice).red())?;
            write!(self.output, "{question}")?;
            self.output.flush()?;

            let line = self.read_line(field)?;
            candidate = parse(&line);
            if candidate.is_none() {
                tracing::debug!(field, input = line.trim(), "Rejected prompt input");
            }
        }
    }

    fn read_line(&mut self, field: &'static str) -> Result<String, PromptError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::EndOfInput { field });
        }
        Ok(line)
    }
}
