//! progtrim - collapse the middle of tqdm-style progress bars in log files.
//!
//! Training and download logs often contain thousands of progress bar
//! redraws. This crate keeps the start (<=10%) and end (>=90%) of each bar
//! and replaces the run in between with a single placeholder line, leaving
//! every other line untouched.
//!
//! # Module Structure
//!
//! - [`detect`] - Recognizes progress bar lines and extracts their percentage
//! - [`filter`] - The collapse state machine
//! - [`lines`] - Line scanning (`\n`, `\r\n`, lone `\r`, lossy UTF-8)
//! - [`run`] - Drives the filter over a file or reader
//! - [`cli`] - Command-line definition

pub mod cli;
pub mod detect;
pub mod error;
pub mod filter;
pub mod lines;
pub mod run;

pub use detect::{detect, ProgressMatch};
pub use error::FilterError;
pub use filter::{
    decide, filter_lines, Action, Emit, FilterState, FilterStats, LineFilter, PLACEHOLDER,
};
pub use lines::LogLines;
pub use run::{filter_file, filter_reader};
