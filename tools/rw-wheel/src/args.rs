//! Command-line arguments.
//!
//! Report fields are taken as raw text so a bad value is re-prompted
//! instead of aborting the run.

use clap::Parser;

/// RW-Wheel: encode a field report as a 9-digit SMS code
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(name = "rw-wheel")]
#[command(about = "Encode a disease report into a 9-digit code to text")]
pub struct Args {
    /// Day of the month the report is for (1-31)
    #[arg(short, long)]
    pub day: Option<String>,

    /// Single-letter condition code (c, d, m, j, t, h, v)
    #[arg(short = 'i', long = "disease", visible_alias = "condition")]
    pub condition: Option<String>,

    /// Number of cases observed (1-20)
    #[arg(short, long)]
    pub cases: Option<String>,

    /// Wheel start index (0-8); random when omitted
    #[arg(long)]
    pub start_index: Option<usize>,

    /// Number to text the code to
    #[arg(long, env = "RW_SMS_NUMBER")]
    pub to: Option<String>,
}
