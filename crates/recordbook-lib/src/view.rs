//! Search, filter and sort over the record list.
//!
//! The pipeline is recomputed from scratch on every call and never mutates
//! the store.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::RecordError;
use crate::model::Record;

/// Filter value that disables filtering.
pub const FILTER_ALL: &str = "all";

/// Column a view can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    User,
    Severity,
    Status,
}

impl SortKey {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Severity => "severity",
            Self::Status => "status",
        }
    }

    /// Lenient parse: unsupported keys mean "no reordering".
    #[must_use]
    pub fn parse(key: &str) -> Option<Self> {
        key.parse().ok()
    }

    fn column<'a>(&self, record: &'a Record) -> &'a str {
        match self {
            Self::User => &record.user,
            Self::Severity => record.severity.as_str(),
            Self::Status => record.status.as_str(),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "user" => Ok(Self::User),
            "severity" => Ok(Self::Severity),
            "status" => Ok(Self::Status),
            other => Err(RecordError::InvalidSortKey {
                key: other.to_string(),
            }),
        }
    }
}

/// The current values of the search, filter and sort controls.
///
/// `filter` is `None` when the host has no filter control.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewQuery {
    pub search: String,
    pub filter: Option<String>,
    pub sort: Option<SortKey>,
}

impl ViewQuery {
    /// Derive the display projection: search, then filter, then sort.
    #[must_use]
    pub fn apply<'a>(&self, records: &'a [Record]) -> Vec<&'a Record> {
        let needle = self.search.to_lowercase();
        let filter = self
            .filter
            .as_deref()
            .filter(|value| !value.is_empty() && *value != FILTER_ALL);

        let mut results: Vec<&Record> = records
            .iter()
            .filter(|r| needle.is_empty() || r.user.to_lowercase().contains(&needle))
            // One control matched against two columns.
            .filter(|r| {
                filter.is_none_or(|value| {
                    r.status.as_str() == value || r.severity.as_str() == value
                })
            })
            .collect();

        if let Some(key) = self.sort {
            results.sort_by(|a, b| compare_text(key.column(a), key.column(b)));
        }

        results
    }
}

/// Case-insensitive order, with byte order breaking ties.
fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Severity, Status};

    fn make_record(id: u64, user: &str, severity: Severity, status: Status) -> Record {
        Record {
            id,
            user: user.to_string(),
            severity,
            status,
            text: "a".to_string(),
        }
    }

    fn ids(records: &[&Record]) -> Vec<u64> {
        records.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_search_matches_user_case_insensitive() {
        let records = vec![make_record(1, "ann", Severity::Low, Status::Open)];
        let query = |s: &str| ViewQuery {
            search: s.to_string(),
            ..Default::default()
        };
        assert_eq!(query("ann").apply(&records).len(), 1);
        assert_eq!(query("AN").apply(&records).len(), 1);
        assert_eq!(query("bob").apply(&records).len(), 0);
        assert_eq!(query("").apply(&records).len(), 1);
    }

    #[test]
    fn test_search_ignores_text() {
        let mut record = make_record(1, "ann", Severity::Low, Status::Open);
        record.text = "bob was here".to_string();
        let query = ViewQuery {
            search: "bob".to_string(),
            ..Default::default()
        };
        assert!(query.apply(&[record]).is_empty());
    }

    #[test]
    fn test_filter_matches_status_or_severity() {
        let records = vec![
            make_record(1, "a", Severity::High, Status::Open),
            make_record(2, "b", Severity::Low, Status::Done),
            make_record(3, "c", Severity::Low, Status::Open),
        ];
        let query = |f: &str| ViewQuery {
            filter: Some(f.to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&query("Open").apply(&records)), vec![1, 3]);
        assert_eq!(ids(&query("Low").apply(&records)), vec![2, 3]);
        assert_eq!(ids(&query("all").apply(&records)), vec![1, 2, 3]);
        assert_eq!(ids(&query("").apply(&records)), vec![1, 2, 3]);
        assert!(query("Nope").apply(&records).is_empty());
    }

    #[test]
    fn test_sort_severity_is_lexicographic() {
        let records = vec![
            make_record(1, "a", Severity::Low, Status::Open),
            make_record(2, "b", Severity::High, Status::Open),
        ];
        let query = ViewQuery {
            sort: Some(SortKey::Severity),
            ..Default::default()
        };
        let sorted: Vec<&str> = query
            .apply(&records)
            .iter()
            .map(|r| r.severity.as_str())
            .collect();
        assert_eq!(sorted, vec!["High", "Low"]);
    }

    #[test]
    fn test_sort_status_and_user() {
        let records = vec![
            make_record(1, "carl", Severity::Low, Status::Open),
            make_record(2, "Bea", Severity::Low, Status::InProgress),
            make_record(3, "amy", Severity::Low, Status::Done),
        ];
        let by = |key| ViewQuery {
            sort: Some(key),
            ..Default::default()
        };
        assert_eq!(ids(&by(SortKey::Status).apply(&records)), vec![3, 2, 1]);
        assert_eq!(ids(&by(SortKey::User).apply(&records)), vec![3, 2, 1]);
    }

    #[test]
    fn test_sort_user_ignores_case_then_breaks_ties() {
        let records = vec![
            make_record(1, "ann", Severity::Low, Status::Open),
            make_record(2, "Zed", Severity::Low, Status::Open),
            make_record(3, "Ann", Severity::Low, Status::Open),
            make_record(4, "bob", Severity::Low, Status::Open),
        ];
        let query = ViewQuery {
            sort: Some(SortKey::User),
            ..Default::default()
        };
        assert_eq!(ids(&query.apply(&records)), vec![3, 1, 4, 2]);
    }

    #[test]
    fn test_no_sort_keeps_insertion_order() {
        let records = vec![
            make_record(5, "z", Severity::Low, Status::Open),
            make_record(2, "a", Severity::High, Status::Done),
        ];
        assert_eq!(ids(&ViewQuery::default().apply(&records)), vec![5, 2]);
    }

    #[test]
    fn test_sort_is_stable() {
        let records = vec![
            make_record(1, "a", Severity::Low, Status::Open),
            make_record(2, "b", Severity::Low, Status::Open),
            make_record(3, "c", Severity::High, Status::Open),
        ];
        let query = ViewQuery {
            sort: Some(SortKey::Severity),
            ..Default::default()
        };
        assert_eq!(ids(&query.apply(&records)), vec![3, 1, 2]);
    }

    #[test]
    fn test_pipeline_order_search_filter_sort() {
        let records = vec![
            make_record(1, "ann", Severity::Low, Status::Open),
            make_record(2, "anna", Severity::High, Status::Open),
            make_record(3, "bob", Severity::High, Status::Open),
            make_record(4, "hanna", Severity::Medium, Status::Done),
        ];
        let query = ViewQuery {
            search: "ann".to_string(),
            filter: Some("Open".to_string()),
            sort: Some(SortKey::Severity),
        };
        assert_eq!(ids(&query.apply(&records)), vec![2, 1]);
    }

    #[test]
    fn test_sort_key_parse() {
        assert_eq!(SortKey::parse("user"), Some(SortKey::User));
        assert_eq!(SortKey::parse("created"), None);
        assert!("text".parse::<SortKey>().is_err());
    }
}
