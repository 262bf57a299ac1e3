//! Shared formatting for label-to-events mappings.
//!
//! Every listing command produces the same shape of data: a mapping from a
//! date label to the event names celebrated on it. JSON output serializes
//! the mapping directly (the same object body the dataset itself uses);
//! table output prints one date per line with its events.

use feastival_core_rs::Dataset;
use owo_colors::OwoColorize;

/// Formats a mapping as pretty-printed JSON.
pub fn format_mapping_json(data: &Dataset) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(data)
}

/// Formats a mapping as a human-readable table.
pub fn format_mapping_table(header: &str, data: &Dataset, use_colors: bool) -> String {
    let mut output = String::new();

    let count = data.len();
    let day_word = if count == 1 { "day" } else { "days" };
    let title = format!("{} ({} {})", header, count, day_word);
    if use_colors {
        output.push_str(&format!("{}\n\n", title.bold()));
    } else {
        output.push_str(&format!("{}\n\n", title));
    }

    if count == 0 {
        output.push_str("Nothing is celebrated.\n");
        return output;
    }

    for (label, names) in data {
        let events = if names.is_empty() {
            "-".to_string()
        } else {
            names.join(", ")
        };
        if use_colors {
            output.push_str(&format!("  {}  {}\n", label.cyan(), events));
        } else {
            output.push_str(&format!("  {}  {}\n", label, events));
        }
    }

    output
}

/// Prints a mapping according to the context's output settings.
pub fn print_mapping(
    ctx: &crate::commands::CommandContext,
    header: &str,
    data: &Dataset,
) -> crate::commands::Result<()> {
    if ctx.json_output {
        println!("{}", format_mapping_json(data)?);
    } else if !ctx.quiet {
        print!("{}", format_mapping_table(header, data, ctx.use_colors));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_mapping() -> Dataset {
        let mut data = Dataset::new();
        data.insert(
            "2025-04-15".to_string(),
            vec![
                "McDonald's Day".to_string(),
                "National Glazed Spiral Ham Day".to_string(),
            ],
        );
        data.insert("2025-04-16".to_string(), vec![]);
        data
    }

    #[test]
    fn test_format_mapping_json_is_object_body() {
        let data = sample_mapping();
        let json = format_mapping_json(&data).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(
            parsed["2025-04-15"][0],
            serde_json::Value::from("McDonald's Day")
        );
        assert!(parsed["2025-04-16"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_format_mapping_table_no_colors() {
        let data = sample_mapping();
        let table = format_mapping_table("April 15-16", &data, false);

        assert!(table.starts_with("April 15-16 (2 days)\n"));
        assert!(table.contains("  2025-04-15  McDonald's Day, National Glazed Spiral Ham Day\n"));
        assert!(table.contains("  2025-04-16  -\n"));
    }

    #[test]
    fn test_format_mapping_table_singular_day_word() {
        let mut data = Dataset::new();
        data.insert("2025-05-04".to_string(), vec!["Star Wars Day".to_string()]);

        let table = format_mapping_table("May the 4th", &data, false);
        assert!(table.starts_with("May the 4th (1 day)\n"));
    }

    #[test]
    fn test_format_mapping_table_empty() {
        let data = Dataset::new();
        let table = format_mapping_table("Nothing", &data, false);

        assert!(table.contains("(0 days)"));
        assert!(table.contains("Nothing is celebrated."));
    }
}
