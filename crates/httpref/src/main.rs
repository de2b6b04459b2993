//! httpref - Command line access to HTTP references
//!
//! Looks up HTTP methods, status codes and headers by name. Exact matches
//! are preferred; a trailing `*` matches every name with that prefix.

mod cli;
mod output;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use cli::Cli;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(err) = cli::run(cli) {
        eprintln!("{}", format!("{:#}", err).red());
        std::process::exit(1);
    }
}
