//! Output formatting for `rb`.
//!
//! Supports human-readable text tables and machine-parseable JSON.
//!
//! # JSON Output Types
//!
//! - [`ListedRecord`] - Record with its display number (list)
//! - [`FieldErrorOutput`] - One rejected form field (create/edit)

mod output;
mod text;

pub use output::{FieldErrorOutput, ListedRecord, field_errors};
pub use text::{format_record_line, format_table, truncate_to_width};
