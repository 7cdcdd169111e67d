//! Command line argument parsing for the Intentia CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Intentia - query understanding for chat front-ends
#[derive(Parser, Debug, Clone)]
#[command(name = "intentia")]
#[command(about = "Normalize user queries, extract entities and classify intent")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct IntentiaArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Parser configuration file (JSON)
    #[arg(short, long, env = "INTENTIA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl IntentiaArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Parse queries and print the structured results
    Parse(ParseArgs),

    /// Parse queries and print parser statistics
    Stats(StatsArgs),
}

/// Arguments for parsing queries
#[derive(Parser, Debug, Clone)]
pub struct ParseArgs {
    /// Queries to parse. Reads one query per line from stdin when omitted.
    pub queries: Vec<String>,
}

/// Arguments for showing statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Queries to parse before the statistics are printed. Reads one query
    /// per line from stdin when omitted.
    pub queries: Vec<String>,

    /// Parse every query this many times, to exercise the cache
    #[arg(long, default_value = "1")]
    pub repeat: usize,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}
