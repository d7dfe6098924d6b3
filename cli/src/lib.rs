//! Overlap CLI library.
//!
//! A thin driver over `overlap_engine::Dataset`. It is split into modules:
//!
//! - `args`: command-line parsing
//! - `run`: command execution
//! - `format`: output formatting utilities

mod args;
mod error;
mod format;
mod run;

pub use args::{parse_args, Args, Command};
pub use error::{CliError, CliResult, MSG_UNABLE_TO_ANALYZE};
pub use format::{format_browsers, format_help, format_result, format_search};
pub use run::run;
