//! grocer - a command-line inventory tally tool
//!
//! grocer provides:
//! - Item counting from whitespace-separated text files
//! - A sorted `name count` snapshot of the counts
//! - An interactive menu with item search, a quantity table and a histogram

use clap::Parser;

mod cli;
mod core;
mod session;

fn main() {
    let cli = cli::Cli::parse();
    crate::core::logger::init_cli_logger(cli.verbose, cli.quiet);

    if let Err(e) = cli::run(cli) {
        tracing::debug!(error = ?e, "grocer failed");
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
