//! numwords CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, convert the
//! numbers given on the command line or start an interactive session, and
//! exit with appropriate status. For programmatic use, prefer the library API
//! (`numwords::api`).

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
