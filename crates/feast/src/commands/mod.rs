//! Command implementations for the feast CLI.
//!
//! This module contains the actual command handlers that are invoked by the CLI.

pub mod about;
pub mod completions;
pub mod day;
pub mod range;
pub mod today;
pub mod year;

use std::path::PathBuf;

use feastival_core_rs::{Dataset, DatasetStore};

use crate::cli::Cli;

/// Error type for command execution.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// Filtering error (invalid range dates).
    #[error("filter error: {0}")]
    Filter(#[from] feastival_core_rs::FilterError),

    /// Dataset loading error.
    #[error("dataset error: {0}")]
    Store(#[from] feastival_core_rs::DatasetStoreError),

    /// Invalid command usage.
    #[error("{0}")]
    Usage(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for command execution.
pub type Result<T> = std::result::Result<T, CommandError>;

/// Context for command execution, containing common dependencies.
pub struct CommandContext {
    /// Whether to output JSON.
    pub json_output: bool,
    /// Whether to use colors.
    pub use_colors: bool,
    /// Whether to be quiet (errors only).
    pub quiet: bool,
    /// Whether to be verbose.
    pub verbose: bool,
    /// Dataset path override from the CLI.
    pub data_path: Option<PathBuf>,
}

impl CommandContext {
    /// Creates a new command context from CLI arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            json_output: cli.json,
            use_colors: !cli.no_color,
            quiet: cli.quiet,
            verbose: cli.verbose,
            data_path: cli.data.clone(),
        }
    }
}

/// Loads the calendar dataset, honoring the context's path override.
pub fn load_dataset(ctx: &CommandContext) -> Result<Dataset> {
    let store = match &ctx.data_path {
        Some(path) => DatasetStore::with_path(path.clone()),
        None => DatasetStore::new()?,
    };

    if ctx.verbose {
        eprintln!("Loading dataset from {}", store.path().display());
    }

    Ok(store.load()?)
}
