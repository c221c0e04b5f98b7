//! Core data types for recordbook-lib.
//!
//! The serde format of [`Record`] is the persisted layout: a flat object with
//! `id`, `user`, `severity`, `status` and `text`, enums written as their
//! variant names.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RecordError;

/// Record priority classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(RecordError::InvalidSeverity {
                severity: s.to_string(),
            }),
        }
    }
}

/// Record workflow state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Status {
    #[default]
    Open,
    InProgress,
    Done,
}

impl Status {
    pub const ALL: [Self; 3] = [Self::Open, Self::InProgress, Self::Done];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::InProgress => "InProgress",
            Self::Done => "Done",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "open" => Ok(Self::Open),
            "inprogress" | "in_progress" | "in-progress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            _ => Err(RecordError::InvalidStatus {
                status: s.to_string(),
            }),
        }
    }
}

/// A form field, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    User,
    Severity,
    Status,
    Text,
}

impl Field {
    pub const ALL: [Self; 4] = [Self::User, Self::Severity, Self::Status, Self::Text];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Severity => "severity",
            Self::Status => "status",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One user-created entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    /// Unique, positive, never reused.
    pub id: u64,

    /// Nickname (1-10 chars).
    pub user: String,

    pub severity: Severity,

    #[serde(default)]
    pub status: Status,

    /// Free text (1-4000 chars).
    pub text: String,
}

impl Record {
    /// Apply validated fields. A missing status leaves the current one.
    pub fn apply(&mut self, fields: RecordFields) {
        self.user = fields.user;
        self.severity = fields.severity;
        if let Some(status) = fields.status {
            self.status = status;
        }
        self.text = fields.text;
    }
}

/// The four editable attributes after validation (trimmed, typed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFields {
    pub user: String,
    pub severity: Severity,
    pub status: Option<Status>,
    pub text: String,
}

/// Raw form input, exactly as typed. An empty string means unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub user: String,
    pub severity: String,
    pub status: String,
    pub text: String,
}

impl FormValues {
    /// Populate a form from a record's current values.
    #[must_use]
    pub fn from_record(record: &Record) -> Self {
        Self {
            user: record.user.clone(),
            severity: record.severity.as_str().to_string(),
            status: record.status.as_str().to_string(),
            text: record.text.clone(),
        }
    }

    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::User => &self.user,
            Field::Severity => &self.severity,
            Field::Status => &self.status,
            Field::Text => &self.text,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::User => self.user = value,
            Field::Severity => self.severity = value,
            Field::Status => self.status = value,
            Field::Text => self.text = value,
        }
    }
}
