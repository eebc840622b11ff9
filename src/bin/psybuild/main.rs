//! Psybuild CLI - build-plan generator for Psychtoolbox Python extension modules

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("psybuild=debug")
    } else {
        EnvFilter::new("psybuild=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    // Execute command
    match cli.command {
        Commands::Plan(args) => commands::plan::execute(args),
        Commands::Profile(args) => commands::profile::execute(args),
        Commands::Modules(args) => commands::modules::execute(args),
    }
}
