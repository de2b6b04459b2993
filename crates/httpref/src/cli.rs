//! CLI command definitions and handlers

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

use httpref_core::{lookup, Category, Config, Width};

use crate::output::print_results;

const LONG_ABOUT: &str = "\
This displays useful information related to HTTP.

It will prefer exact matches where there are multiple entries matching the
filter (e.g. Accept and Accept-Language). If you want to match everything with
the same prefix then you can use * as a wildcard suffix, for example:

    httpref 'Accept*'

Most of the content comes from the Mozilla developer documentation
(https://developer.mozilla.org/en-US/docs/Web/HTTP) and is copyright Mozilla
and individual contributors. See
https://developer.mozilla.org/en-US/docs/MDN/About#Copyrights_and_licenses for
details.";

/// httpref - Command line access to HTTP references
#[derive(Parser, Debug)]
#[command(name = "httpref")]
#[command(version)]
#[command(about = "Command line access to HTTP references")]
#[command(long_about = LONG_ABOUT)]
#[command(after_help = "\
EXAMPLES:
    httpref 404                    Describe a status code
    httpref 'Accept*'              Summarize every header starting with Accept
    httpref --titles               List everything that can be looked up
    httpref methods                List the HTTP methods
    httpref headers Age -w 60      Describe a header at 60 columns
    httpref statuses '5*' --json   Server errors as JSON")]
pub struct Cli {
    /// Name to look up; end it with * to match a prefix
    pub filter: Option<String>,

    #[command(flatten)]
    pub options: GlobalOptions,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Args, Debug, Clone)]
pub struct GlobalOptions {
    /// List titles of the summaries available
    #[arg(short, long, global = true)]
    pub titles: bool,

    /// Width to fit the output to [default: config file, else 100]
    #[arg(short, long, global = true, allow_negative_numbers = true)]
    pub width: Option<i64>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Read configuration from this file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// References for common HTTP methods
    #[command(alias = "method")]
    Methods {
        /// Method to look up; end it with * to match a prefix
        filter: Option<String>,
    },

    /// References for common HTTP statuses
    #[command(alias = "status")]
    Statuses {
        /// Status code to look up; end it with * to match a prefix
        filter: Option<String>,
    },

    /// References for common HTTP headers
    #[command(alias = "header")]
    Headers {
        /// Header to look up; end it with * to match a prefix
        filter: Option<String>,
    },
}

impl Commands {
    pub fn category(&self) -> Category {
        match self {
            Self::Methods { .. } => Category::Methods,
            Self::Statuses { .. } => Category::Statuses,
            Self::Headers { .. } => Category::Headers,
        }
    }

    pub fn filter(&self) -> Option<&str> {
        match self {
            Self::Methods { filter } | Self::Statuses { filter } | Self::Headers { filter } => {
                filter.as_deref()
            }
        }
    }
}

/// Dispatch a parsed command line
pub fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.options.config.as_deref())?;
    if !config.color {
        colored::control::set_override(false);
    }

    let width = config.resolve_width(cli.options.width);
    debug!(%width, "resolved output width");

    match &cli.command {
        Some(command) => cmd_reference(command, width, cli.options.json),
        None => cmd_root(cli.filter.as_deref(), cli.options.titles, width, cli.options.json),
    }
}

/// Look up a filter across every category
pub fn cmd_root(filter: Option<&str>, titles: bool, width: Width, json: bool) -> Result<()> {
    let results = lookup::select_everywhere(filter, titles)?;
    print_results(&results, width, json)
}

/// Look up a filter in one category, listing titles when there is none
pub fn cmd_reference(command: &Commands, width: Width, json: bool) -> Result<()> {
    let category = command.category();
    debug!(%category, filter = ?command.filter(), "category lookup");

    let results = lookup::select(&category.collection(), command.filter());
    print_results(&results, width, json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use httpref_core::LookupError;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_width_help_names_config_default() {
        let command = Cli::command();
        let width = command
            .get_arguments()
            .find(|arg| arg.get_id() == "width")
            .unwrap();
        let help = width.get_help().unwrap().to_string();
        assert!(help.contains("default: config file, else 100"));
    }

    #[test]
    fn test_root_filter() {
        let cli = parse(&["httpref", "Accept*"]);
        assert_eq!(cli.filter.as_deref(), Some("Accept*"));
        assert!(cli.command.is_none());
        assert!(!cli.options.titles);
        assert_eq!(cli.options.width, None);
    }

    #[test]
    fn test_global_flags() {
        let cli = parse(&["httpref", "-t", "-w", "60", "--json"]);
        assert!(cli.options.titles);
        assert_eq!(cli.options.width, Some(60));
        assert!(cli.options.json);
    }

    #[test]
    fn test_negative_width_parses() {
        let cli = parse(&["httpref", "GET", "--width", "-5"]);
        assert_eq!(cli.options.width, Some(-5));
    }

    #[test]
    fn test_subcommands_and_aliases() {
        let cli = parse(&["httpref", "methods", "GET"]);
        assert_eq!(cli.command.as_ref().map(Commands::category), Some(Category::Methods));
        assert_eq!(cli.command.as_ref().and_then(Commands::filter), Some("GET"));

        let cli = parse(&["httpref", "status", "404"]);
        assert_eq!(cli.command.as_ref().map(Commands::category), Some(Category::Statuses));

        let cli = parse(&["httpref", "header"]);
        assert_eq!(cli.command, Some(Commands::Headers { filter: None }));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = parse(&["httpref", "headers", "Age", "-w", "40", "--json"]);
        assert_eq!(cli.options.width, Some(40));
        assert!(cli.options.json);
    }

    #[test]
    fn test_root_without_filter_is_missing_filter() {
        let err = cmd_root(None, false, Width::default(), false).unwrap_err();
        assert_eq!(err.downcast_ref::<LookupError>(), Some(&LookupError::MissingFilter));
    }

    #[test]
    fn test_unknown_name_is_no_results() {
        let err = cmd_root(Some("999"), false, Width::default(), false).unwrap_err();
        assert_eq!(err.downcast_ref::<LookupError>(), Some(&LookupError::NoResults));

        let command = Commands::Statuses {
            filter: Some("999".into()),
        };
        let err = cmd_reference(&command, Width::default(), true).unwrap_err();
        assert_eq!(err.to_string(), "Filter not found any results");
    }

    #[test]
    fn test_run_reads_config_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();

        let cli = parse(&["httpref", "GET", "--config", path.to_str().unwrap()]);
        let err = run(cli).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
