//! Range command implementation.
//!
//! Aggregates celebrations for every calendar day in an inclusive date
//! range, one result entry per day.

use feastival_core_rs::filter_range;

use super::{load_dataset, CommandContext, Result};
use crate::output::print_mapping;

/// Executes the range command.
///
/// # Errors
///
/// Returns a filter error if either bound is not a valid `yyyy-mm-dd`
/// calendar date, or an error if the dataset cannot be loaded.
pub fn execute(ctx: &CommandContext, start: &str, end: &str) -> Result<()> {
    let data = load_dataset(ctx)?;
    let result = filter_range(&data, start, end)?;

    print_mapping(ctx, &format!("{start} to {end}"), &result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    use crate::commands::CommandError;

    fn quiet_ctx(data_path: std::path::PathBuf) -> CommandContext {
        CommandContext {
            json_output: false,
            use_colors: false,
            quiet: true,
            verbose: false,
            data_path: Some(data_path),
        }
    }

    fn fixture_ctx(temp_dir: &tempfile::TempDir) -> CommandContext {
        let path = temp_dir.path().join("2025.json");
        fs::write(
            &path,
            r#"{"2025-04-29": ["National Shrimp Scampi Day"], "2025-05-02": ["National Truffles Day"]}"#,
        )
        .unwrap();
        quiet_ctx(path)
    }

    #[test]
    fn test_execute_valid_range() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let ctx = fixture_ctx(&temp_dir);

        assert!(execute(&ctx, "2025-04-29", "2025-05-02").is_ok());
    }

    #[test]
    fn test_execute_invalid_date_is_filter_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let ctx = fixture_ctx(&temp_dir);

        match execute(&ctx, "2025-02-31", "2025-03-01") {
            Err(CommandError::Filter(e)) => {
                assert!(e.to_string().contains("2025-02-31"));
            }
            other => panic!("expected Filter error, got {:?}", other),
        }
    }
}
