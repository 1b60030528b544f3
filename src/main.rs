//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `campaign_map` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use campaign_map::config::{Cli, Command};
use campaign_map::initialization::init_logger_with;
use campaign_map::{run_cluster, run_density};

fn main() -> Result<()> {
    // A missing .env file is fine; RUST_LOG may also come from the shell
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    init_logger_with(cli.log_level.clone().into(), cli.log_format.clone())
        .context("Failed to initialize logger")?;

    // JSON goes to stdout, so the human summary goes to stderr
    let result = match &cli.command {
        Command::Cluster(args) => run_cluster(args).map(|report| {
            eprintln!(
                "Clustered {} record{} into {} group{} ({} skipped) in {:.3}s",
                report.total_records,
                if report.total_records == 1 { "" } else { "s" },
                report.summary.group_count,
                if report.summary.group_count == 1 { "" } else { "s" },
                report.summary.skipped_records,
                report.elapsed_seconds
            );
            if let Some(path) = &report.output {
                eprintln!("Results saved in {}", path.display());
            }
        }),
        Command::Density(args) => run_density(args).map(|report| {
            eprintln!(
                "Aggregated {} record{} into {} neighborhood{} using {} related entities",
                report.total_records,
                if report.total_records == 1 { "" } else { "s" },
                report.bucket_count,
                if report.bucket_count == 1 { "" } else { "s" },
                report.related_entities
            );
            if let Some(path) = &report.output {
                eprintln!("Results saved in {}", path.display());
            }
        }),
    };

    if let Err(e) = result {
        eprintln!("campaign_map error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}
