//! bjj - ingest BJJ training records and report dashboard metrics

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod logging;

use cli::Cli;
use commands::{ingest, metrics, migrate};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.global.verbose);

    match &cli.command {
        cli::Commands::Ingest(args) => ingest::execute(args, &cli.global),
        cli::Commands::Migrate => migrate::execute(&cli.global),
        cli::Commands::Metrics(args) => metrics::execute(args, &cli.global),
    }
}
