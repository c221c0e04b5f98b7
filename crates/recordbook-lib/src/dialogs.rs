//! Transient UI state: the create form, the detail modal and the edit
//! overlay. None of these own records; they hold copies of field values.

use std::collections::BTreeSet;

use crate::error::FieldErrors;
use crate::model::{Field, FormValues, Record};

/// Where a click on a dialog landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The explicit close control.
    CloseControl,
    /// The dimmed area outside the dialog body.
    Backdrop,
    /// Inside the dialog body.
    Body,
}

/// How the edit overlay was dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    Backdrop,
    Cancel,
    CloseButton,
    /// Closed after a successful save.
    Saved,
}

/// Field values and inline errors of a form.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub values: FormValues,
    pub errors: FieldErrors,
}

impl FormState {
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values.set(field, value);
    }

    /// Focusing a field clears its error.
    pub fn focus(&mut self, field: Field) {
        self.errors.clear_field(field);
    }

    pub fn reset(&mut self) {
        self.values = FormValues::default();
        self.errors.clear();
    }
}

/// Read-only view of a record's full text.
///
/// The text is held raw: it is shown through a plain-text channel and never
/// interpreted as markup.
#[derive(Debug, Clone, Default)]
pub struct DetailModal {
    open: bool,
    text: String,
}

impl DetailModal {
    pub fn show(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.open = true;
    }

    /// Close on the close control or a backdrop click; body clicks are ignored.
    pub fn dismiss(&mut self, target: ClickTarget) {
        if target != ClickTarget::Body {
            self.open = false;
        }
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.open.then_some(self.text.as_str())
    }
}

/// The set of fields a host's edit template provides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormTemplate {
    fields: BTreeSet<Field>,
}

impl FormTemplate {
    /// A template with every editable field.
    #[must_use]
    pub fn complete() -> Self {
        Self::with_fields(Field::ALL)
    }

    #[must_use]
    pub fn with_fields(fields: impl IntoIterator<Item = Field>) -> Self {
        Self {
            fields: fields.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn missing(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| !self.fields.contains(field))
            .collect()
    }
}

impl Default for FormTemplate {
    fn default() -> Self {
        Self::complete()
    }
}

/// The edit overlay. Built once, repopulated on every open.
#[derive(Debug, Clone, Default)]
pub struct EditOverlay {
    target: Option<u64>,
    form: FormState,
    open: bool,
}

impl EditOverlay {
    /// Load a record's current values and show the overlay.
    pub fn populate(&mut self, record: &Record) {
        self.target = Some(record.id);
        self.form.values = FormValues::from_record(record);
        self.form.errors.clear();
        self.open = true;
    }

    /// Discard unsaved edits and hide the overlay.
    pub fn close(&mut self, reason: CloseReason) {
        tracing::debug!(?reason, target = ?self.target, "Closed edit overlay");
        self.target = None;
        self.form.reset();
        self.open = false;
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.form.set(field, value);
    }

    pub fn focus(&mut self, field: Field) {
        self.form.focus(field);
    }

    pub fn set_errors(&mut self, errors: FieldErrors) {
        self.form.errors = errors;
    }

    #[must_use]
    pub const fn target(&self) -> Option<u64> {
        self.target
    }

    #[must_use]
    pub const fn values(&self) -> &FormValues {
        &self.form.values
    }

    #[must_use]
    pub const fn errors(&self) -> &FieldErrors {
        &self.form.errors
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Severity, Status};

    fn make_record() -> Record {
        Record {
            id: 5,
            user: "ann".to_string(),
            severity: Severity::Medium,
            status: Status::InProgress,
            text: "<b>hi</b>".to_string(),
        }
    }

    #[test]
    fn test_modal_dismiss_rules() {
        let mut modal = DetailModal::default();
        modal.show("<b>hi</b>");
        assert_eq!(modal.text(), Some("<b>hi</b>"));

        modal.dismiss(ClickTarget::Body);
        assert!(modal.is_open());
        modal.dismiss(ClickTarget::Backdrop);
        assert!(!modal.is_open());
        assert_eq!(modal.text(), None);

        modal.show("again");
        modal.dismiss(ClickTarget::CloseControl);
        assert!(!modal.is_open());
    }

    #[test]
    fn test_overlay_populate_and_discard() {
        let mut overlay = EditOverlay::default();
        overlay.populate(&make_record());
        assert!(overlay.is_open());
        assert_eq!(overlay.target(), Some(5));
        assert_eq!(overlay.values().status, "InProgress");

        overlay.set(Field::User, "changed");
        overlay.close(CloseReason::Backdrop);
        assert!(!overlay.is_open());
        assert_eq!(overlay.values().user, "");

        overlay.populate(&make_record());
        assert_eq!(overlay.values().user, "ann");
    }

    #[test]
    fn test_focus_clears_only_that_error() {
        let mut overlay = EditOverlay::default();
        overlay.populate(&make_record());
        let mut errors = FieldErrors::new();
        errors.insert(Field::User, "enter a nickname");
        errors.insert(Field::Text, "enter text");
        overlay.set_errors(errors);

        overlay.focus(Field::User);
        assert!(!overlay.errors().contains(Field::User));
        assert!(overlay.errors().contains(Field::Text));
    }

    #[test]
    fn test_template_missing_fields() {
        assert!(FormTemplate::complete().missing().is_empty());
        let partial = FormTemplate::with_fields([Field::User, Field::Text]);
        assert_eq!(partial.missing(), vec![Field::Severity, Field::Status]);
    }

    #[test]
    fn test_form_state_reset() {
        let mut form = FormState::default();
        form.set(Field::Text, "draft");
        form.errors.insert(Field::User, "enter a nickname");
        form.reset();
        assert_eq!(form.values, FormValues::default());
        assert!(form.errors.is_empty());
    }
}
