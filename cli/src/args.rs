//! Command-line parsing.

use std::path::PathBuf;

use crate::{CliError, CliResult};

/// A CLI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Fuzzy-search the catalog.
    Search(String),
    /// Check a base/target feature pair.
    Check { base: String, target: String },
    /// List known browser names.
    Browsers,
    /// Print usage.
    Help,
}

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    /// Dataset root override (`--data DIR`).
    pub data_dir: Option<PathBuf>,
    /// Debug logging (`-v`).
    pub verbose: bool,
    pub command: Command,
}

/// Parse arguments (without the program name).
pub fn parse_args<I, T>(args: I) -> CliResult<Args>
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    let mut data_dir = None;
    let mut verbose = false;
    let mut rest: Vec<String> = Vec::new();

    let mut iter = args.into_iter().map(Into::into);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-v" | "--verbose" => verbose = true,
            "-d" | "--data" => {
                let dir = iter
                    .next()
                    .ok_or_else(|| CliError::usage("--data requires a directory"))?;
                data_dir = Some(PathBuf::from(dir));
            }
            "-h" | "--help" => rest.insert(0, "help".to_string()),
            _ => rest.push(arg),
        }
    }

    let command = match rest.split_first() {
        None => Command::Help,
        Some((name, params)) => match (name.as_str(), params) {
            ("help", _) => Command::Help,
            ("search", terms) => Command::Search(terms.join(" ")),
            ("browsers", []) => Command::Browsers,
            ("check", [base, target]) => Command::Check {
                base: base.clone(),
                target: target.clone(),
            },
            ("check", _) => return Err(CliError::usage("check <base> <target>")),
            (other, _) => return Err(CliError::usage(format!("unknown command: {other}"))),
        },
    };

    Ok(Args {
        data_dir,
        verbose,
        command,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_check_with_options() {
        let args = parse_args(["--data", "/srv/d", "check", "flexbox", "css-grid", "-v"]).unwrap();

        assert_eq!(args.data_dir, Some(PathBuf::from("/srv/d")));
        assert!(args.verbose);
        assert_eq!(
            args.command,
            Command::Check {
                base: "flexbox".to_string(),
                target: "css-grid".to_string()
            }
        );
    }

    #[test]
    fn test_parse_search_joins_terms() {
        let args = parse_args(["search", "grid", "layout"]).unwrap();
        assert_eq!(args.command, Command::Search("grid layout".to_string()));

        let args = parse_args(["search"]).unwrap();
        assert_eq!(args.command, Command::Search(String::new()));
    }

    #[test]
    fn test_parse_defaults_to_help() {
        assert_eq!(parse_args(Vec::<String>::new()).unwrap().command, Command::Help);
        assert_eq!(parse_args(["--help"]).unwrap().command, Command::Help);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse_args(["check", "a"]), Err(CliError::Usage(_))));
        assert!(matches!(parse_args(["frobnicate"]), Err(CliError::Usage(_))));
        assert!(matches!(parse_args(["--data"]), Err(CliError::Usage(_))));
        assert!(matches!(parse_args(["browsers", "x"]), Err(CliError::Usage(_))));
    }
}
