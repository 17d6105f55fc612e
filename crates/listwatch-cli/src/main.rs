//! listwatch CLI - report new listings on a watched page.
//!
//! Entry point only: argument parsing, logging setup, and dispatch into the
//! command module.

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod cli;
mod commands;

use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    // A .env file is optional; an already-populated environment works alone.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_logging(&cli)?;

    commands::watch(cli.into_config()).await
}

fn initialize_logging(cli: &Cli) -> Result<()> {
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    // Diagnostics go to stderr; stdout carries only listing events.
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
