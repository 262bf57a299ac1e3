//! Year command implementation.
//!
//! Emits the entire calendar dataset unfiltered.

use super::{load_dataset, CommandContext, Result};
use crate::output::print_mapping;

/// Executes the year command.
///
/// # Errors
///
/// Returns an error if the dataset cannot be loaded.
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let data = load_dataset(ctx)?;
    print_mapping(ctx, "Year", &data)
}
