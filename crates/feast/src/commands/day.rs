//! Day command implementation.
//!
//! Filters the dataset by a month/day string: a full `MM-dd`, a month
//! prefix like `02`, or a partial day like `05-0`.

use feastival_core_rs::filter;

use super::{load_dataset, CommandContext, CommandError, Result};
use crate::cli::FILTER_MESSAGE;
use crate::output::print_mapping;

/// Executes the day command.
///
/// # Errors
///
/// Returns `CommandError::Usage` for an empty filter, or an error if the
/// dataset cannot be loaded.
pub fn execute(ctx: &CommandContext, pattern: &str) -> Result<()> {
    if pattern.is_empty() {
        return Err(CommandError::Usage(FILTER_MESSAGE.to_string()));
    }

    let data = load_dataset(ctx)?;
    let matched = filter(&data, pattern);

    print_mapping(ctx, &format!("Days matching '{pattern}'"), &matched)
}
