//! Today command implementation.
//!
//! Shows the dataset entries celebrated on the current local date.

use chrono::Local;
use feastival_core_rs::filter;

use super::{load_dataset, CommandContext, Result};
use crate::output::print_mapping;

/// Executes the today command.
///
/// Filters the dataset with the current local date formatted `MM-dd`.
///
/// # Errors
///
/// Returns an error if the dataset cannot be loaded.
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let today = Local::now().format("%m-%d").to_string();
    execute_for_day(ctx, &today)
}

/// Executes the today command for an explicit `MM-dd` value.
///
/// Split out from [`execute`] so the current-date lookup can be tested
/// deterministically.
fn execute_for_day(ctx: &CommandContext, day: &str) -> Result<()> {
    if ctx.verbose {
        eprintln!("Today filter: {day}");
    }

    let data = load_dataset(ctx)?;
    let matched = filter(&data, day);

    print_mapping(ctx, &format!("Today ({day})"), &matched)
}
