//! In-memory record store.
//!
//! Records are kept in insertion order. Ids come from a counter that only
//! grows, so a deleted id is never handed out again within the session.

use crate::error::{RecordError, Result};
use crate::model::{Record, RecordFields};

/// Ordered records plus the next-id counter.
#[derive(Debug, Clone)]
pub struct RecordStore {
    records: Vec<Record>,
    next_id: u64,
}

impl RecordStore {
    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// Build a store from loaded records, seeding the counter past the
    /// highest existing id.
    ///
    /// # Errors
    ///
    /// Returns `IdSpaceExhausted` if the highest id leaves no successor.
    pub fn from_records(records: Vec<Record>) -> Result<Self> {
        let next_id = match records.iter().map(|r| r.id).max() {
            Some(max) => max
                .checked_add(1)
                .ok_or(RecordError::IdSpaceExhausted { last: max })?,
            None => 1,
        };
        Ok(Self { records, next_id })
    }

    // ========================================================================
    // CRUD
    // ========================================================================

    /// Append a new record built from validated fields.
    ///
    /// # Errors
    ///
    /// Returns `IdSpaceExhausted` once the counter cannot advance; the store
    /// is left unchanged.
    pub fn create(&mut self, fields: RecordFields) -> Result<&Record> {
        let id = self.next_id;
        self.next_id = id
            .checked_add(1)
            .ok_or(RecordError::IdSpaceExhausted { last: id })?;

        let record = Record {
            id,
            user: fields.user,
            severity: fields.severity,
            status: fields.status.unwrap_or_default(),
            text: fields.text,
        };
        tracing::debug!(id, user = %record.user, "Created record");

        let idx = self.records.len();
        self.records.push(record);
        Ok(&self.records[idx])
    }

    /// Overwrite the editable attributes of an existing record.
    ///
    /// # Errors
    ///
    /// Returns `RecordNotFound` if no record has this id.
    pub fn update(&mut self, id: u64, fields: RecordFields) -> Result<&Record> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| RecordError::not_found(id))?;

        record.apply(fields);
        tracing::debug!(id, "Updated record");
        Ok(&*record)
    }

    /// Remove the record with this id. Remaining ids are untouched.
    ///
    /// Returns `None` when nothing matched.
    pub fn delete(&mut self, id: u64) -> Option<Record> {
        let idx = self.records.iter().position(|r| r.id == id)?;
        tracing::debug!(id, "Deleted record");
        Some(self.records.remove(idx))
    }

    // ========================================================================
    // Queries
    // ========================================================================

    #[must_use]
    pub fn get(&self, id: u64) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub const fn next_id(&self) -> u64 {
        self.next_id
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}
