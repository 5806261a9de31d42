//! CLI argument definitions for the itinerary prettifier.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "itin-cli",
    version,
    about = "Itinerary Prettifier - rewrite airport codes and timestamps in itinerary text",
    long_about = "Rewrite a plain-text flight itinerary into its customer-facing form.\n\n\
                  Airport code tokens (#LAX, ##KJFK, *#LAX, *##KJFK) are resolved against\n\
                  an airport lookup CSV; D(..), T12(..), and T24(..) tokens are reformatted\n\
                  as dates and clock times."
)]
pub struct Cli {
    /// Path to the input itinerary text file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Path the prettified text is written to.
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Path to the airport lookup CSV file.
    #[arg(value_name = "LOOKUP")]
    pub lookup: PathBuf,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
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
