//! Delete command implementation.

use std::io::{self, BufRead, Write};

use recordbook_lib::{Confirm, Result};

use crate::cli::DeleteArgs;
use crate::config::{Config, open_controller};

/// Asks on the terminal, or approves without asking when `assume_yes`.
#[derive(Debug, Clone, Copy)]
pub struct TerminalConfirm {
    pub assume_yes: bool,
}

impl Confirm for TerminalConfirm {
    fn confirm(&mut self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        ask(&mut io::stderr(), &mut io::stdin().lock(), prompt)
    }
}

/// Print `prompt` and read one answer line. A prompt that cannot be
/// written is logged; the answer is still read.
fn ask(out: &mut impl Write, input: &mut impl BufRead, prompt: &str) -> bool {
    if let Err(e) = write!(out, "{prompt} [y/N] ").and_then(|()| out.flush()) {
        tracing::debug!(error = %e, "Could not flush prompt");
    }

    let mut answer = String::new();
    if input.read_line(&mut answer).is_err() {
        return false;
    }
    is_yes(&answer)
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Execute the delete command.
///
/// An unknown id is not an error; nothing is removed.
///
/// # Errors
///
/// Returns a storage error if the list cannot be written.
pub fn execute(args: &DeleteArgs, config: &Config, json: bool) -> Result<()> {
    let confirm = TerminalConfirm {
        assume_yes: args.yes || !config.confirm_delete,
    };
    let mut controller = open_controller(config, confirm);

    let existed = controller.store().get(args.id).is_some();
    let removed = controller.request_delete(args.id)?;

    if json {
        let output = serde_json::json!({ "id": args.id, "deleted": removed });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if removed {
        println!("Deleted record {}", args.id);
    } else if existed {
        println!("Kept record {}", args.id);
    } else {
        tracing::info!(id = args.id, "No record with this id");
    }

    Ok(())
}
