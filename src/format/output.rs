use recordbook_lib::{FieldErrors, Record};
use serde::Serialize;

/// Record with its 1-based position in the current view.
#[derive(Debug, Clone, Serialize)]
pub struct ListedRecord<'a> {
    pub number: usize,
    #[serde(flatten)]
    pub record: &'a Record,
}

/// A rejected form field.
#[derive(Debug, Clone, Serialize)]
pub struct FieldErrorOutput {
    pub field: &'static str,
    pub message: String,
}

#[must_use]
pub fn field_errors(errors: &FieldErrors) -> Vec<FieldErrorOutput> {
    errors
        .iter()
        .map(|(field, message)| FieldErrorOutput {
            field: field.as_str(),
            message: message.to_string(),
        })
        .collect()
}
