//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::constants::DEFAULT_BASE_RADIUS_METERS;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line interface of the `campaign_map` binary.
#[derive(Debug, Parser)]
#[command(name = "campaign_map", version, about)]
pub struct Cli {
    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info, global = true)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain, global = true)]
    pub log_format: LogFormat,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands of the `campaign_map` binary.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Group registrations into proximity clusters
    Cluster(ClusterArgs),
    /// Aggregate registrations per neighborhood with density shading
    Density(DensityArgs),
}

/// Options for the `cluster` subcommand.
#[derive(Debug, Clone, Parser)]
pub struct ClusterArgs {
    /// JSON file containing an array of registrations
    pub file: PathBuf,

    /// Base radius of a proximity group in meters
    #[arg(long, default_value_t = DEFAULT_BASE_RADIUS_METERS)]
    pub base_radius: f64,

    /// Output file (stdout if omitted)
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Options for the `density` subcommand.
#[derive(Debug, Clone, Parser)]
pub struct DensityArgs {
    /// JSON file containing an array of registrations
    pub file: PathBuf,

    /// JSON file with related entities (e.g. teams) carrying a `neighborhood` field
    #[arg(long)]
    pub related: Option<PathBuf>,

    /// Output file (stdout if omitted)
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_log_format_debug() {
        assert_eq!(format!("{:?}", LogFormat::Plain), "Plain");
        assert_eq!(format!("{:?}", LogFormat::Json), "Json");
    }

    #[test]
    fn test_cluster_defaults() {
        let cli = Cli::try_parse_from(["campaign_map", "cluster", "regs.json"])
            .expect("Should parse cluster command");
        match cli.command {
            Command::Cluster(args) => {
                assert_eq!(args.file, PathBuf::from("regs.json"));
                assert_eq!(args.base_radius, DEFAULT_BASE_RADIUS_METERS);
                assert!(args.output.is_none());
            }
            Command::Density(_) => panic!("Expected cluster subcommand"),
        }
    }

    #[test]
    fn test_global_log_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "campaign_map",
            "density",
            "regs.json",
            "--log-format",
            "json",
        ])
        .expect("Global flags should be accepted after the subcommand");
        assert!(matches!(cli.log_format, LogFormat::Json));
    }
}
