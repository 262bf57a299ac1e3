//! About command implementation.
//!
//! Reports the version of the feast CLI.

use serde::Serialize;

use super::{CommandContext, Result};

/// Version of this crate, baked in at compile time.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// JSON shape of the about report.
#[derive(Serialize)]
struct AboutOutput<'a> {
    name: &'a str,
    version: &'a str,
}

/// Executes the about command.
pub fn execute(ctx: &CommandContext) -> Result<()> {
    if ctx.json_output {
        let output = AboutOutput {
            name: "feast",
            version: VERSION,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        println!("feast {VERSION}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_nonempty_semver() {
        assert!(!VERSION.is_empty());
        assert_eq!(VERSION.split('.').count(), 3);
    }

    #[test]
    fn test_about_json_shape() {
        let output = AboutOutput {
            name: "feast",
            version: VERSION,
        };
        let json = serde_json::to_string(&output).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["name"], "feast");
        assert_eq!(parsed["version"], VERSION);
    }
}
