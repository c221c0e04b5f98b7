//! Error types for `recordbook-lib`.

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

use crate::model::Field;

/// Primary error type for recordbook operations.
#[derive(Error, Debug)]
pub enum RecordError {
    // === Record Errors ===
    /// Record with the specified ID was not found.
    #[error("Record not found: {id}")]
    RecordNotFound { id: u64 },

    /// No id is left to hand out.
    #[error("Record ids exhausted (highest id {last})")]
    IdSpaceExhausted { last: u64 },

    // === Validation Errors ===
    /// One or more form fields failed validation.
    #[error("Validation errors: {errors}")]
    Validation { errors: FieldErrors },

    /// Severity string is not one of Low, Medium, High.
    #[error("Invalid severity: {severity}")]
    InvalidSeverity { severity: String },

    /// Status string is not one of Open, InProgress, Done.
    #[error("Invalid status: {status}")]
    InvalidStatus { status: String },

    /// Sort key is not one of user, severity, status.
    #[error("Invalid sort key: {key}")]
    InvalidSortKey { key: String },

    // === UI Errors ===
    /// The host's edit template lacks required fields.
    #[error("Edit form is missing fields: {missing:?}")]
    IncompleteEditForm { missing: Vec<Field> },

    /// Edit submitted while no edit overlay is open.
    #[error("No record is being edited")]
    NoActiveEdit,

    // === Configuration Errors ===
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    // === Storage Errors ===
    /// Generic storage error.
    #[error("Storage error: {0}")]
    Storage(String),

    // === I/O Errors ===
    /// File system I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RecordError {
    #[must_use]
    pub const fn not_found(id: u64) -> Self {
        Self::RecordNotFound { id }
    }

    /// The per-field errors carried by a validation failure, if any.
    #[must_use]
    pub const fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Validation { errors } => Some(errors),
            _ => None,
        }
    }
}

impl From<FieldErrors> for RecordError {
    fn from(errors: FieldErrors) -> Self {
        Self::Validation { errors }
    }
}

/// Per-field validation messages, keyed and ordered by form field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for `field`, replacing any earlier one.
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn clear_field(&mut self, field: Field) {
        self.0.remove(&field);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// Result type using `RecordError`.
pub type Result<T> = std::result::Result<T, RecordError>;
