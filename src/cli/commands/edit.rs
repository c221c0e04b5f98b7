//! Edit command implementation.
//!
//! Drives the edit overlay: open on the record, overwrite the given fields,
//! save. Fields not passed keep their current values.

use recordbook_lib::{AlwaysConfirm, Field, Result};

use crate::cli::EditArgs;
use crate::config::{Config, open_controller};
use crate::format::{field_errors, format_record_line};

/// Execute the edit command.
///
/// # Errors
///
/// Returns `RecordNotFound`, `Validation`, or a storage error.
pub fn execute(args: &EditArgs, config: &Config, json: bool) -> Result<()> {
    let mut controller = open_controller(config, AlwaysConfirm);
    controller.open_edit(args.id)?;

    let changes = [
        (Field::User, &args.user),
        (Field::Severity, &args.severity),
        (Field::Status, &args.status),
        (Field::Text, &args.text),
    ];
    for (field, value) in changes {
        if let Some(value) = value {
            controller.edit_field(field, value.as_str());
        }
    }

    let record = match controller.submit_edit() {
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
        println!("Updated {}", format_record_line(&record));
    }

    Ok(())
}
