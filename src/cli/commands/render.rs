//! Render command implementation.
//!
//! Emits the escaped table body, or a full page with the controls, for the
//! current view.

use std::fs;

use recordbook_lib::render::{render_page, render_tbody};
use recordbook_lib::{AlwaysConfirm, Result};

use crate::cli::RenderArgs;
use crate::config::{Config, open_controller};

/// Execute the render command.
///
/// # Errors
///
/// Returns an error if `--sort` is invalid or the output file cannot be
/// written.
pub fn execute(args: &RenderArgs, config: &Config) -> Result<()> {
    let query = args.view.to_query(config)?;
    let mut controller = open_controller(config, AlwaysConfirm);
    controller.set_query(query);

    let html = if args.page {
        render_page(controller.rows(), controller.query())
    } else {
        render_tbody(controller.rows())
    };

    match &args.output {
        Some(path) => {
            fs::write(path, &html)?;
            tracing::info!(path = %path.display(), rows = controller.rows().len(), "Rendered table");
        }
        None => print!("{html}"),
    }

    Ok(())
}
