//! List command implementation.
//!
//! Shows the current view (search, filter, sort) with display numbers.

use recordbook_lib::{AlwaysConfirm, Result};

use crate::cli::ListArgs;
use crate::config::{Config, open_controller};
use crate::format::{ListedRecord, format_table};

/// Execute the list command.
///
/// # Errors
///
/// Returns an error if `--sort` is invalid or output cannot be serialized.
pub fn execute(args: &ListArgs, config: &Config, json: bool) -> Result<()> {
    let query = args.view.to_query(config)?;
    let mut controller = open_controller(config, AlwaysConfirm);
    controller.set_query(query);

    let visible = controller.visible();

    if json {
        let listed: Vec<ListedRecord<'_>> = visible
            .iter()
            .copied()
            .enumerate()
            .map(|(idx, record)| ListedRecord {
                number: idx + 1,
                record,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&listed)?);
    } else if visible.is_empty() {
        println!("No records found.");
    } else {
        print!("{}", format_table(&visible));
        println!("\n{} record(s)", visible.len());
    }

    Ok(())
}
