//! # Dispatch-route CLI
//!
//! Command-line interface for the dispatch-route library.
//! Reads JSON scenario files and prints the chosen endpoint, minimum cost,
//! and realized path as JSON on stdout; diagnostics go to stderr.

use clap::{Parser, Subcommand};
use log::error;
use std::path::PathBuf;

mod cli;

/// Command-line interface for dispatch-route
#[derive(Parser)]
#[command(name = "dispatch-route")]
#[command(about = "Minimum-cost route planning over weighted transport networks")]
#[command(long_about = "Finds minimum-cost routes from JSON scenario files:
  dispatch-route route city.json     # nearest of several destinations
  dispatch-route stages network.json # cheapest path crossing every stage
  dispatch-route batch fleet.json    # many independent queries, in parallel

Scenario files describe the network and the query; results are printed as
JSON on stdout. Set RUST_LOG=debug for engine diagnostics on stderr.")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the cheapest route from a source to the nearest acceptable destination
    Route {
        /// JSON scenario file: network, source, candidate destinations
        scenario: PathBuf,
    },
    /// Find the cheapest front-to-back route through a staged network
    Stages {
        /// JSON scenario file: stage sizes and consecutive-stage links
        scenario: PathBuf,
    },
    /// Run many independent route queries over one network
    Batch {
        /// JSON scenario file: network and request list
        scenario: PathBuf,
    },
}

fn main() {
    if let Err(e) = run() {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging to stderr
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Stderr)
        .init();

    match cli.command {
        Commands::Route { scenario } => cli::run_route(&scenario),
        Commands::Stages { scenario } => cli::run_stages(&scenario),
        Commands::Batch { scenario } => cli::run_batch(&scenario),
    }
}
