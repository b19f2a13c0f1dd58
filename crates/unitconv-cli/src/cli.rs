//! CLI argument definitions for the unit converter.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "unitconv",
    version,
    about = "Unit converter - browse units and normalize values",
    long_about = "Browse the units offered by a conversion backend and normalize typed values.\n\n\
                  The backend is read from --api-url, then UNITCONV_API_URL, then\n\
                  http://localhost:3000."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Backend base URL (overrides UNITCONV_API_URL).
    #[arg(long = "api-url", value_name = "URL", global = true)]
    pub api_url: Option<String>,

    /// Request timeout in seconds (overrides UNITCONV_TIMEOUT_SECS).
    #[arg(long = "timeout-secs", value_name = "SECS", global = true)]
    pub timeout_secs: Option<u64>,

    /// Print views as JSON instead of tables.
    #[arg(long = "json", global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Resolve an application path and render its view.
    Open(OpenArgs),

    /// List all units (the home view).
    Units,

    /// Show one unit (the converter view).
    Unit(UnitArgs),

    /// Print the canonical form of numeric text. Makes no requests.
    Normalize(NormalizeArgs),
}

#[derive(Parser)]
pub struct OpenArgs {
    /// Path such as `/` or `/converter/length`.
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Value to canonicalize on the converter view.
    #[arg(long = "value", value_name = "TEXT", allow_hyphen_values = true)]
    pub value: Option<String>,
}

#[derive(Parser)]
pub struct UnitArgs {
    /// Unit name as known to the backend.
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Value to canonicalize.
    #[arg(long = "value", value_name = "TEXT", allow_hyphen_values = true)]
    pub value: Option<String>,
}

#[derive(Parser)]
pub struct NormalizeArgs {
    /// Values to normalize, one result line each.
    #[arg(value_name = "TEXT", required = true, allow_hyphen_values = true)]
    pub values: Vec<String>,

    /// Also show the whitespace-free intermediate form.
    #[arg(long = "steps")]
    pub steps: bool,
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
