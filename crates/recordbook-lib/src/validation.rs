//! Form validation shared by the create and edit flows.
//!
//! Every rule is checked and all failures are returned together, without
//! touching any state.

use crate::error::FieldErrors;
use crate::model::{Field, FormValues, RecordFields, Severity, Status};

pub const MAX_USER_LEN: usize = 10;
pub const MAX_TEXT_LEN: usize = 4000;

pub const MSG_USER_REQUIRED: &str = "enter a nickname";
pub const MSG_USER_TOO_LONG: &str = "nickname up to 10 characters";
pub const MSG_TEXT_REQUIRED: &str = "enter text";
pub const MSG_TEXT_TOO_LONG: &str = "text up to 4000 characters";
pub const MSG_SEVERITY_REQUIRED: &str = "choose a priority";

/// Validate raw form values.
///
/// User and text are trimmed before checking; lengths count characters.
/// Status is never an error: an empty or unknown value is treated as absent.
///
/// # Errors
///
/// Returns the per-field messages when any rule fails.
pub fn validate(form: &FormValues) -> Result<RecordFields, FieldErrors> {
    let mut errors = FieldErrors::new();

    let user = form.user.trim();
    if user.is_empty() {
        errors.insert(Field::User, MSG_USER_REQUIRED);
    } else if user.chars().count() > MAX_USER_LEN {
        errors.insert(Field::User, MSG_USER_TOO_LONG);
    }

    let text = form.text.trim();
    if text.is_empty() {
        errors.insert(Field::Text, MSG_TEXT_REQUIRED);
    } else if text.chars().count() > MAX_TEXT_LEN {
        errors.insert(Field::Text, MSG_TEXT_TOO_LONG);
    }

    let severity = form.severity.parse::<Severity>().ok();
    if severity.is_none() {
        errors.insert(Field::Severity, MSG_SEVERITY_REQUIRED);
    }

    let status = form.status.parse::<Status>().ok();

    match severity {
        Some(severity) if errors.is_empty() => Ok(RecordFields {
            user: user.to_string(),
            severity,
            status,
            text: text.to_string(),
        }),
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn form(user: &str, severity: &str, status: &str, text: &str) -> FormValues {
        FormValues {
            user: user.to_string(),
            severity: severity.to_string(),
            status: status.to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_valid_form() {
        let fields = validate(&form(" ann ", "Low", "Done", "  hello ")).unwrap();
        assert_eq!(fields.user, "ann");
        assert_eq!(fields.severity, Severity::Low);
        assert_eq!(fields.status, Some(Status::Done));
        assert_eq!(fields.text, "hello");
    }

    #[test]
    fn test_empty_user() {
        let errors = validate(&form("   ", "Low", "", "x")).unwrap_err();
        assert_eq!(errors.get(Field::User), Some(MSG_USER_REQUIRED));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_user_length_boundary() {
        assert!(validate(&form("abcdefghij", "Low", "", "x")).is_ok());
        let errors = validate(&form("abcdefghijk", "Low", "", "x")).unwrap_err();
        assert_eq!(errors.get(Field::User), Some(MSG_USER_TOO_LONG));
    }

    #[test]
    fn test_user_length_counts_chars_not_bytes() {
        assert!(validate(&form("ґґґґґґґґґґ", "High", "", "x")).is_ok());
    }

    #[test]
    fn test_text_length_boundary() {
        let max = "a".repeat(MAX_TEXT_LEN);
        assert!(validate(&form("ann", "Low", "", &max)).is_ok());
        let over = "a".repeat(MAX_TEXT_LEN + 1);
        let errors = validate(&form("ann", "Low", "", &over)).unwrap_err();
        assert_eq!(errors.get(Field::Text), Some(MSG_TEXT_TOO_LONG));
    }

    #[test]
    fn test_severity_required() {
        let errors = validate(&form("ann", "", "", "x")).unwrap_err();
        assert_eq!(errors.get(Field::Severity), Some(MSG_SEVERITY_REQUIRED));
        let errors = validate(&form("ann", "Urgent", "", "x")).unwrap_err();
        assert!(errors.contains(Field::Severity));
    }

    #[test]
    fn test_all_errors_reported_together() {
        let errors = validate(&FormValues::default()).unwrap_err();
        assert_eq!(errors.get(Field::User), Some(MSG_USER_REQUIRED));
        assert_eq!(errors.get(Field::Text), Some(MSG_TEXT_REQUIRED));
        assert_eq!(errors.get(Field::Severity), Some(MSG_SEVERITY_REQUIRED));
        assert!(!errors.contains(Field::Status));
    }

    #[test]
    fn test_status_absent_or_unknown_is_tolerated() {
        assert_eq!(validate(&form("ann", "Low", "", "x")).unwrap().status, None);
        assert_eq!(
            validate(&form("ann", "Low", "Archived", "x")).unwrap().status,
            None
        );
    }

    proptest! {
        #[test]
        fn prop_fails_iff_a_rule_is_broken(
            user in "[ a-z]{0,14}",
            text in "[ a-z]{0,6}",
            severity in prop::sample::select(vec!["", "Low", "Medium", "High", "bogus"]),
        ) {
            let result = validate(&form(&user, severity, "", &text));
            let user_len = user.trim().chars().count();
            let broken = user_len == 0
                || user_len > MAX_USER_LEN
                || text.trim().is_empty()
                || severity.is_empty()
                || severity == "bogus";
            prop_assert_eq!(result.is_err(), broken);
        }
    }
}
