//! CLI argument parsing for deptrace
//!
//! Uses clap for argument parsing.
//! Supports global flags: --format, --quiet, --verbose, --log-level, --log-json

pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use deptrace_core::format::OutputFormat;
use parse::parse_format;

/// Deptrace - dependency path tracing and cycle classification CLI
#[derive(Parser, Debug)]
#[command(name = "deptrace")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "DEPTRACE_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a dependency file and report every path
    Analyze {
        /// Input file, one `A -> B` record per line
        #[arg(default_value = "dependencies.txt")]
        input: PathBuf,
    },

    /// Generate a random dependency file for exercising the analyzer
    Generate {
        /// Output file for the generated records
        #[arg(default_value = "dependencies.txt")]
        output: PathBuf,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
}
