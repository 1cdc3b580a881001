//! Library interface for the `voxstat` CLI.
//!
//! This crate exposes the CLI's argument parser and command structure as a library,
//! primarily for documentation generation and testing. The actual entry point is
//! in `main.rs`.
//!
//! # Structure
//!
//! - [`Cli`] - The root argument parser (clap derive)
//! - [`Commands`] - Available subcommands
//! - [`commands`] - Command implementations

pub mod commands;

use camino::Utf8PathBuf;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Color output preference.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect terminal capabilities automatically.
    #[default]
    Auto,
    /// Always emit colors.
    Always,
    /// Never emit colors.
    Never,
}

impl ColorChoice {
    /// Configure global color output based on this choice.
    ///
    /// Call this once at startup to set the color mode.
    pub fn apply(self) {
        match self {
            Self::Auto => {} // owo-colors auto-detects by default
            Self::Always => owo_colors::set_override(true),
            Self::Never => owo_colors::set_override(false),
        }
    }
}

const ENV_HELP: &str = "\
ENVIRONMENT VARIABLES:
    RUST_LOG               Log filter (e.g., debug, voxstat_core=trace)
    VOXSTAT_LOG_PATH       Explicit log file path
    VOXSTAT_LOG_DIR        Log directory
    VOXSTAT_STORE_PATH     Transcript store file
";
/// Command-line interface definition for voxstat.
#[derive(Parser)]
#[command(name = "voxstat")]
#[command(about = "Per-user transcript analytics: word frequency, phrases, and similarity", long_about = None)]
#[command(version, arg_required_else_help = true)]
#[command(after_long_help = ENV_HELP)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print only the version number (for scripting)
    #[arg(long)]
    pub version_only: bool,

    /// Path to configuration file (overrides discovery)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Run as if started in DIR
    #[arg(short = 'C', long, global = true)]
    pub chdir: Option<PathBuf>,

    /// Transcript store file (overrides configuration)
    #[arg(long, global = true, value_name = "FILE")]
    pub store: Option<Utf8PathBuf>,

    /// Only print errors (suppresses warnings/info)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// More detail (repeatable; e.g. -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Colorize output
    #[arg(long, global = true, value_enum, default_value_t)]
    pub color: ColorChoice,

    /// Output as JSON (for scripting)
    #[arg(long, global = true)]
    pub json: bool,
}

/// Available subcommands for the CLI.
#[derive(Subcommand)]
pub enum Commands {
    /// Store a transcription for a user
    Ingest(commands::ingest::IngestArgs),

    /// Bulk-load transcriptions from a JSON Lines file
    Import(commands::import::ImportArgs),

    /// List a user's stored transcriptions
    History(commands::history::HistoryArgs),

    /// Word frequencies for a user and for all users
    Frequency(commands::frequency::FrequencyArgs),

    /// Most frequent phrases in a user's speech
    Phrases(commands::phrases::PhrasesArgs),

    /// Users whose vocabulary is closest to a user's
    Similar(commands::similar::SimilarArgs),

    /// Frequency, phrases, and similarity in one report
    Report(commands::report::ReportArgs),

    /// Print the JSON Schema of an output document
    Schema(commands::schema::SchemaArgs),

    /// Show package information
    Info(commands::info::InfoArgs),
}

/// Returns the clap command for documentation generation
pub fn command() -> clap::Command {
    Cli::command()
}
