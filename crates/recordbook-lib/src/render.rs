//! Table rendering from the view projection.
//!
//! Display numbers are 1-based positions in the current view, not record
//! ids; they change whenever search, filter or sort change. The
//! [`RowIndex`] built alongside maps them back to ids.

use std::collections::BTreeMap;

use crate::model::{Record, Severity, Status};
use crate::sanitize::escape_html;
use crate::view::ViewQuery;

/// One rendered table row. Text columns are already markup-escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub number: usize,
    pub id: u64,
    pub user: String,
    pub severity: String,
    pub status: String,
}

/// Mapping from display number to record id for the last render.
#[derive(Debug, Clone, Default)]
pub struct RowIndex {
    ids: BTreeMap<usize, u64>,
}

impl RowIndex {
    #[must_use]
    pub fn from_rows(rows: &[DisplayRow]) -> Self {
        Self {
            ids: rows.iter().map(|row| (row.number, row.id)).collect(),
        }
    }

    #[must_use]
    pub fn id_at(&self, number: usize) -> Option<u64> {
        self.ids.get(&number).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Build display rows for an already derived projection.
#[must_use]
pub fn render_rows(records: &[&Record]) -> Vec<DisplayRow> {
    records
        .iter()
        .enumerate()
        .map(|(idx, record)| DisplayRow {
            number: idx + 1,
            id: record.id,
            user: escape_html(&record.user),
            severity: escape_html(record.severity),
            status: escape_html(record.status),
        })
        .collect()
}

/// Markup for the whole table body.
#[must_use]
pub fn render_tbody(rows: &[DisplayRow]) -> String {
    let mut html = String::new();
    for row in rows {
        html.push_str(&format!(
            "<tr data-id=\"{}\">\
             <td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
             <td><button class=\"showBtn\" type=\"button\">Show</button></td>\
             <td><button class=\"editBtn\" type=\"button\">Edit</button> \
             <button class=\"deleteBtn\" type=\"button\">Delete</button></td>\
             </tr>\n",
            row.id, row.number, row.user, row.severity, row.status
        ));
    }
    html
}

fn select_options(name: &str, options: &[&str], current: Option<&str>) -> String {
    let mut html = format!("<select id=\"{name}\">");
    for option in options {
        let selected = if current == Some(*option) {
            " selected"
        } else {
            ""
        };
        let value = escape_html(option);
        html.push_str(&format!(
            "<option value=\"{value}\"{selected}>{value}</option>"
        ));
    }
    html.push_str("</select>");
    html
}

/// A standalone HTML document with the controls and the rendered table.
#[must_use]
pub fn render_page(rows: &[DisplayRow], query: &ViewQuery) -> String {
    let sort = query.sort.map(|key| key.as_str());
    let filter = query.filter.as_deref();

    let mut filters = vec!["all"];
    filters.extend(Status::ALL.iter().map(Status::as_str));
    filters.extend(Severity::ALL.iter().map(Severity::as_str));

    let mut html = String::from(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>Records</title></head>\n<body>\n",
    );
    html.push_str(&format!(
        "<input id=\"searchInput\" type=\"search\" value=\"{}\">\n",
        escape_html(&query.search)
    ));
    html.push_str(&select_options(
        "sortSelect",
        &["", "user", "severity", "status"],
        Some(sort.unwrap_or("")),
    ));
    html.push('\n');
    html.push_str(&select_options("filterSelect", &filters, filter));
    html.push_str("\n<table>\n<thead><tr><th>#</th><th>User</th><th>Severity</th><th>Status</th><th>Text</th><th>Actions</th></tr></thead>\n<tbody id=\"itemsTableBody\">\n");
    html.push_str(&render_tbody(rows));
    html.push_str("</tbody>\n</table>\n</body>\n</html>\n");
    html
}
