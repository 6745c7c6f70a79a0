//! Hevea Marketplace CLI

mod cli;

use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

fn main() {
    let _env = dotenvy::dotenv();

    init_logging();

    let cli = Cli::parse();

    if let Err(error) = cli::run(cli) {
        eprintln!("{error}");
        process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .compact()
        .with_target(false)
        .with_env_filter(filter)
        .init();
}
