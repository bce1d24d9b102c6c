//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

/// Default schools resource (Chicago Public Schools school profiles).
pub const SCHOOLS_URL: &str =
    "https://data.cityofchicago.org/api/views/cu4u-b4d9/rows.csv?accessType=DOWNLOAD";

/// Default libraries resource (Chicago Public Library locations).
pub const LIBRARIES_URL: &str =
    "https://data.cityofchicago.org/api/views/x8fc-8rcq/rows.csv?accessType=DOWNLOAD";

#[derive(Parser)]
#[command(
    name = "facloc-prep",
    version,
    about = "Prepare Chicago civic datasets for facility-location analysis",
    long_about = "Download the Chicago school and library datasets, standardize them\n\
                  into client points and candidate facility locations, and write both\n\
                  as CSV files for a downstream coverage-optimization analysis."
)]
pub struct Cli {
    /// Directory the output CSV files are written to.
    #[arg(long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Schools source (URL or local CSV path).
    #[arg(long = "schools-url", value_name = "SOURCE", default_value = SCHOOLS_URL)]
    pub schools_url: String,

    /// Libraries source (URL or local CSV path).
    #[arg(long = "libraries-url", value_name = "SOURCE", default_value = LIBRARIES_URL)]
    pub libraries_url: String,

    /// Fetch and clean both datasets without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
