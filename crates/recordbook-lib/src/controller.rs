//! The single owner of record state.
//!
//! Lifecycle: [`Controller::init`] loads (or starts empty), every mutation
//! goes through the controller, and every mutation flushes the full list to
//! the key-value store and re-renders the rows.

use crate::dialogs::{ClickTarget, CloseReason, DetailModal, EditOverlay, FormState, FormTemplate};
use crate::error::{RecordError, Result};
use crate::model::{Field, FormValues, Record};
use crate::render::{DisplayRow, RowIndex, render_rows};
use crate::storage::{self, KeyValueStore, LoadState};
use crate::store::RecordStore;
use crate::validation::validate;
use crate::view::ViewQuery;

pub const MSG_RECORD_NOT_FOUND: &str = "record not found";
pub const MSG_INCOMPLETE_TEMPLATE: &str = "cannot open the edit form (incomplete template)";
pub const DELETE_PROMPT: &str = "Delete record?";

/// Asks the user to approve a destructive action.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> Confirm for F {
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Approves everything without asking.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConfirm;

impl Confirm for AlwaysConfirm {
    fn confirm(&mut self, _prompt: &str) -> bool {
        true
    }
}

/// Per-row buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Show,
    Edit,
    Delete,
}

pub struct Controller<K, C> {
    kv: K,
    confirm: C,
    store: RecordStore,
    load_state: LoadState,
    query: ViewQuery,
    rows: Vec<DisplayRow>,
    row_index: RowIndex,
    create_form: FormState,
    modal: DetailModal,
    edit: Option<EditOverlay>,
    template: FormTemplate,
}

impl<K: KeyValueStore, C: Confirm> Controller<K, C> {
    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Load stored records (or start empty) and render the initial rows.
    pub fn init(kv: K, confirm: C) -> Self {
        let outcome = storage::load(&kv);
        let (store, load_state) = match RecordStore::from_records(outcome.records) {
            Ok(store) => (store, outcome.state),
            Err(e) => {
                tracing::warn!(error = %e, "Stored ids unusable; starting empty");
                (
                    RecordStore::new(),
                    LoadState::Recovered {
                        reason: e.to_string(),
                    },
                )
            }
        };
        let mut controller = Self {
            kv,
            confirm,
            store,
            load_state,
            query: ViewQuery::default(),
            rows: Vec::new(),
            row_index: RowIndex::default(),
            create_form: FormState::default(),
            modal: DetailModal::default(),
            edit: None,
            template: FormTemplate::complete(),
        };
        controller.render();
        controller
    }

    /// Replace the edit template the host provides.
    pub fn set_template(&mut self, template: FormTemplate) {
        self.template = template;
    }

    fn flush(&mut self) -> Result<()> {
        storage::save(&mut self.kv, self.store.records())
    }

    /// Persist a mutation and re-render. If the save fails, the store goes
    /// back to `before`.
    fn commit(&mut self, before: RecordStore) -> Result<()> {
        if let Err(e) = self.flush() {
            tracing::warn!(error = %e, "Save failed; change discarded");
            self.store = before;
            return Err(e);
        }
        self.render();
        Ok(())
    }

    fn render(&mut self) {
        let projected = self.query.apply(self.store.records());
        self.rows = render_rows(&projected);
        self.row_index = RowIndex::from_rows(&self.rows);
    }

    // ========================================================================
    // Create
    // ========================================================================

    pub fn set_create_field(&mut self, field: Field, value: impl Into<String>) {
        self.create_form.set(field, value);
    }

    pub fn focus_create_field(&mut self, field: Field) {
        self.create_form.focus(field);
    }

    /// Validate the create form and append a record.
    ///
    /// On success the form is reset to empty.
    ///
    /// # Errors
    ///
    /// Returns `Validation` (the errors are also left on the form) without
    /// touching the store, or a storage error if the flush fails. After a
    /// failed flush the store is unchanged and the form keeps its values.
    pub fn submit_create(&mut self) -> Result<Record> {
        self.create_form.errors.clear();

        let fields = match validate(&self.create_form.values) {
            Ok(fields) => fields,
            Err(errors) => {
                self.create_form.errors = errors.clone();
                return Err(errors.into());
            }
        };

        let before = self.store.clone();
        let record = self.store.create(fields)?.clone();
        self.commit(before)?;
        self.create_form.reset();
        Ok(record)
    }

    /// Fill the create form with `form` and submit it.
    ///
    /// # Errors
    ///
    /// See [`Self::submit_create`].
    pub fn create(&mut self, form: FormValues) -> Result<Record> {
        self.create_form.values = form;
        self.submit_create()
    }

    // ========================================================================
    // Update
    // ========================================================================

    /// Validate `form` and overwrite the record's editable attributes.
    ///
    /// # Errors
    ///
    /// Returns `RecordNotFound` (also shown in the detail modal), `Validation`,
    /// or a storage error if the flush fails.
    pub fn update(&mut self, id: u64, form: &FormValues) -> Result<Record> {
        if self.store.get(id).is_none() {
            self.modal.show(MSG_RECORD_NOT_FOUND);
            return Err(RecordError::not_found(id));
        }

        let fields = validate(form)?;
        let before = self.store.clone();
        let record = self.store.update(id, fields)?.clone();
        self.commit(before)?;
        Ok(record)
    }

    /// Open the edit overlay for a record, building it on first use.
    ///
    /// # Errors
    ///
    /// Returns `RecordNotFound` or `IncompleteEditForm`; both are also shown
    /// in the detail modal.
    pub fn open_edit(&mut self, id: u64) -> Result<()> {
        let Some(record) = self.store.get(id) else {
            self.modal.show(MSG_RECORD_NOT_FOUND);
            return Err(RecordError::not_found(id));
        };

        let missing = self.template.missing();
        if !missing.is_empty() {
            tracing::error!(?missing, "Edit template is missing fields");
            self.modal.show(MSG_INCOMPLETE_TEMPLATE);
            return Err(RecordError::IncompleteEditForm { missing });
        }

        self.edit
            .get_or_insert_with(EditOverlay::default)
            .populate(record);
        Ok(())
    }

    pub fn edit_field(&mut self, field: Field, value: impl Into<String>) {
        if let Some(overlay) = self.edit.as_mut() {
            overlay.set(field, value);
        }
    }

    pub fn focus_edit_field(&mut self, field: Field) {
        if let Some(overlay) = self.edit.as_mut() {
            overlay.focus(field);
        }
    }

    /// Save the overlay through the same rules as create.
    ///
    /// On validation failure the overlay stays open with its errors set.
    ///
    /// # Errors
    ///
    /// Returns `NoActiveEdit` when no overlay is open, otherwise as
    /// [`Self::update`].
    pub fn submit_edit(&mut self) -> Result<Record> {
        let (id, values) = self
            .edit
            .as_ref()
            .filter(|overlay| overlay.is_open())
            .and_then(|overlay| overlay.target().map(|id| (id, overlay.values().clone())))
            .ok_or(RecordError::NoActiveEdit)?;

        match self.update(id, &values) {
            Ok(record) => {
                self.close_edit(CloseReason::Saved);
                Ok(record)
            }
            Err(RecordError::Validation { errors }) => {
                if let Some(overlay) = self.edit.as_mut() {
                    overlay.set_errors(errors.clone());
                }
                Err(RecordError::Validation { errors })
            }
            Err(e) => Err(e),
        }
    }

    /// Hide the overlay and drop unsaved edits.
    pub fn close_edit(&mut self, reason: CloseReason) {
        if let Some(overlay) = self.edit.as_mut() {
            overlay.close(reason);
        }
    }

    // ========================================================================
    // Delete
    // ========================================================================

    /// Delete after confirmation. Returns whether a record was removed.
    ///
    /// A declined prompt changes nothing; an unknown id is a silent no-op.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the flush fails.
    pub fn request_delete(&mut self, id: u64) -> Result<bool> {
        if !self.confirm.confirm(DELETE_PROMPT) {
            tracing::debug!(id, "Delete declined");
            return Ok(false);
        }

        let before = self.store.clone();
        let removed = self.store.delete(id).is_some();
        self.commit(before)?;
        Ok(removed)
    }

    // ========================================================================
    // View
    // ========================================================================

    /// Apply new control values and re-render.
    pub fn set_query(&mut self, query: ViewQuery) {
        self.query = query;
        self.render();
    }

    /// Show a record's raw text. Returns false for an unknown id.
    pub fn show_detail(&mut self, id: u64) -> bool {
        match self.store.get(id) {
            Some(record) => {
                self.modal.show(record.text.clone());
                true
            }
            None => false,
        }
    }

    pub fn dismiss_modal(&mut self, target: ClickTarget) {
        self.modal.dismiss(target);
    }

    /// Resolve a display number to the record it shows right now.
    #[must_use]
    pub fn record_at_row(&self, number: usize) -> Option<&Record> {
        self.row_index
            .id_at(number)
            .and_then(|id| self.store.get(id))
    }

    /// Records currently shown, in row order.
    #[must_use]
    pub fn visible(&self) -> Vec<&Record> {
        (1..=self.row_index.len())
            .filter_map(|number| self.record_at_row(number))
            .collect()
    }

    /// Dispatch a row button. Stale row numbers are ignored.
    ///
    /// # Errors
    ///
    /// As [`Self::open_edit`] and [`Self::request_delete`].
    pub fn click_row(&mut self, number: usize, action: RowAction) -> Result<()> {
        let Some(id) = self.record_at_row(number).map(|r| r.id) else {
            return Ok(());
        };

        match action {
            RowAction::Show => {
                self.show_detail(id);
            }
            RowAction::Edit => self.open_edit(id)?,
            RowAction::Delete => {
                self.request_delete(id)?;
            }
        }
        Ok(())
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[must_use]
    pub fn rows(&self) -> &[DisplayRow] {
        &self.rows
    }

    #[must_use]
    pub const fn store(&self) -> &RecordStore {
        &self.store
    }

    #[must_use]
    pub const fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    #[must_use]
    pub const fn query(&self) -> &ViewQuery {
        &self.query
    }

    #[must_use]
    pub const fn create_form(&self) -> &FormState {
        &self.create_form
    }

    #[must_use]
    pub const fn modal(&self) -> &DetailModal {
        &self.modal
    }

    #[must_use]
    pub const fn edit_overlay(&self) -> Option<&EditOverlay> {
        self.edit.as_ref()
    }

    #[must_use]
    pub const fn kv(&self) -> &K {
        &self.kv
    }
}
