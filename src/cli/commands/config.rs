//! Config command implementation.

use recordbook_lib::{RecordError, Result};

use crate::config::Config;

/// Print the effective configuration as YAML (or JSON with `--json`).
///
/// # Errors
///
/// Returns an error if the configuration cannot be serialized.
pub fn execute(config: &Config, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(config)?);
    } else {
        let yaml = serde_yaml::to_string(config).map_err(|e| RecordError::Config(e.to_string()))?;
        print!("{yaml}");
    }
    Ok(())
}
