//! CLI argument parsing using clap derive macros.
//!
//! This module defines the command-line interface for the feast CLI.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Guidance shown when the day command is given an empty filter.
pub const FILTER_MESSAGE: &str = "Please provide a filter, e.g. 04-15 for April 15th \
    or 02 for February. Partial months are also supported, e.g. 1 for \
    October through December. Partial days are also supported, e.g. 05-0 \
    for May 1st - 9th.";

/// feast - A Rust CLI for the Feastival day-of-year calendar
#[derive(Parser, Debug)]
#[command(name = "feast")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose output (show debug information)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Force JSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colors in output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Override dataset file path (default: data/2025.json)
    #[arg(long, global = true, env = "FEAST_DATA", value_name = "FILE")]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show what is celebrated today
    #[command(alias = "t")]
    Today,

    /// Show the full year's calendar
    #[command(alias = "y")]
    Year,

    /// Show days matching a month/day filter
    #[command(alias = "d", after_help = FILTER_MESSAGE)]
    Day {
        /// Month/day filter, e.g. "04-15", "02", or "05-0"
        filter: String,
    },

    /// Aggregate celebrations for every day in a date range
    #[command(alias = "r")]
    Range {
        /// Start date (yyyy-mm-dd, inclusive)
        start: String,

        /// End date (yyyy-mm-dd, inclusive)
        end: String,
    },

    /// Show version information
    About,

    /// Generate shell completions
    Completions {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completion generation
#[derive(ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}
