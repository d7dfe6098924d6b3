//! Overlap - check whether a web-platform feature is safe to adopt alongside
//! one already relied upon.
//!
//! This is the entry point for the `overlap` binary.

use std::env;
use std::process::ExitCode;

use overlap_cli::{format_help, parse_args, run};
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = match parse_args(env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprint!("{}", format_help());
            return ExitCode::from(2);
        }
    };

    init_logging(args.verbose);

    match run(&args).await {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
