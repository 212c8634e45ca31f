//! RW-Wheel: operator CLI for the reporting wheel
//!
//! Collects a day of month, a condition and a case count (from flags or by
//! asking), then prints the 9-digit code to text to the reporting number.
//!
//! ```text
//! $ rw-wheel -d 5 -i m -c 4 --start-index 3
//! day=5, code=035
//!
//! disease=MALARIA, code=033
//!
//! cases=4, code=052
//!
//! Please text 035033052 to your reporting number
//! THANK YOU!
//! ```

pub mod args;
pub mod prompt;
pub mod session;

pub use args::Args;
pub use prompt::{PromptError, Prompter};
pub use session::{run, SessionError, DEFAULT_RECIPIENT};
