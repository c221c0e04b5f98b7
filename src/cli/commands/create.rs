//! Create command implementation.

use recordbook_lib::{AlwaysConfirm, FormValues, Result};

use crate::cli::CreateArgs;
use crate::config::{Config, open_controller};
use crate::format::{field_errors, format_record_line};

/// Execute the create command.
///
/// # Errors
///
/// Returns `Validation` with every rejected field, or a storage error.
pub fn execute(args: CreateArgs, config: &Config, json: bool) -> Result<()> {
    let mut controller = open_controller(config, AlwaysConfirm);

    let form = FormValues {
        user: args.user,
        severity: args.severity,
        status: args.status,
        text: args.text,
    };

    let record = match controller.create(form) {
        Ok(record) => record,
        Err(e) => {
            if let (true, Some(errors)) = (json, e.field_errors()) {
                let output = serde_json::json!({ "errors": field_errors(errors) });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            return Err(e);
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        println!("Created {}", format_record_line(&record));
    }

    Ok(())
}
