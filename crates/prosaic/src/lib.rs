//! Argument parsing and command dispatch for the `prosaic` binary.
//!
//! [`Cli`] is the clap root; each [`Commands`] variant maps to one module in
//! [`commands`]. Detection and rewriting live in `prosaic_core`; this crate
//! only reads input, applies configuration and renders results.

pub mod commands;

#[cfg(feature = "mcp")]
pub mod server;

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
    /// Set the process-wide owo-colors override. Call once, before any output.
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
    RUST_LOG               Log filter (e.g., debug, prosaic_core=trace)
    PROSAIC_LOG_PATH       Explicit log file path
    PROSAIC_LOG_DIR        Log directory
    PROSAIC_TONE           Default rewrite tone (academic, business, formal, casual)
    PROSAIC_SEED           Seed for reproducible rewrites
";

/// Command-line interface definition for prosaic.
#[derive(Parser)]
#[command(name = "prosaic")]
#[command(
    about = "Score text for machine-generated style and rewrite it in a chosen tone",
    long_about = None
)]
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
    /// Score how machine-generated a text looks (0-100)
    Detect(commands::detect::DetectArgs),

    /// Rewrite a text in a tone
    Paraphrase(commands::paraphrase::ParaphraseArgs),

    /// Detect, rewrite, and re-detect a text
    Humanize(commands::humanize::HumanizeArgs),

    /// Identify the language of a text (Indonesian or English)
    Language(commands::language::LanguageArgs),

    /// Show package information
    Info(commands::info::InfoArgs),

    /// Start MCP (Model Context Protocol) server on stdio
    #[cfg(feature = "mcp")]
    Serve(commands::serve::ServeArgs),
}

/// The clap command tree, for completions and man pages.
pub fn command() -> clap::Command {
    Cli::command()
}
