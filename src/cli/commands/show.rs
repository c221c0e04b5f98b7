//! Show command implementation.

use recordbook_lib::{AlwaysConfirm, RecordError, Result};

use crate::cli::ShowArgs;
use crate::config::{Config, open_controller};

/// Execute the show command.
///
/// The text is printed as stored; terminals are a plain-text channel.
///
/// # Errors
///
/// Returns `RecordNotFound` for an unknown id.
pub fn execute(args: &ShowArgs, config: &Config, json: bool) -> Result<()> {
    let mut controller = open_controller(config, AlwaysConfirm);

    if !controller.show_detail(args.id) {
        return Err(RecordError::not_found(args.id));
    }

    if json {
        if let Some(record) = controller.store().get(args.id) {
            println!("{}", serde_json::to_string_pretty(record)?);
        }
    } else if let Some(text) = controller.modal().text() {
        println!("{text}");
    }

    Ok(())
}
