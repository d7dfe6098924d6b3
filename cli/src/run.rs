//! Command execution.

use overlap_core::DatasetConfig;
use overlap_engine::Dataset;
use overlap_registry::BrowserRegistry;

use crate::{
    format_browsers, format_help, format_result, format_search, Args, CliError, CliResult, Command,
};

/// Dataset configuration from the environment, with `--data` taking precedence.
fn dataset_config(args: &Args) -> DatasetConfig {
    let config = DatasetConfig::from_env();
    match &args.data_dir {
        Some(dir) => config.with_root(dir),
        None => config,
    }
}

/// Execute a command and return the text to print.
pub async fn run(args: &Args) -> CliResult<String> {
    match &args.command {
        Command::Help => Ok(format_help()),
        Command::Browsers => Ok(format_browsers(&BrowserRegistry::curated())),
        Command::Search(query) => {
            let dataset = Dataset::open(&dataset_config(args))?;
            Ok(format_search(&dataset.catalog().search(query)))
        }
        Command::Check { base, target } => {
            // Same-id pairs are rejected here, before the engine sees them.
            if base == target {
                return Err(CliError::SamePair(base.clone()));
            }
            let dataset = Dataset::open(&dataset_config(args))?;
            let result = dataset
                .check(base, target)
                .await
                .ok_or(CliError::Unanalyzable)?;
            Ok(format_result(
                &result,
                base,
                target,
                dataset.catalog(),
                dataset.browsers(),
            ))
        }
    }
}
