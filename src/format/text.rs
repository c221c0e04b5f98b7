//! Text formatting functions for `rb`.
//!
//! Plain (non-ANSI) terminal output:
//! - Status icons (○ ◐ ✓)
//! - Single-line record summaries
//! - Aligned tables, padded by display width

use recordbook_lib::{Record, Status};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Status icon characters.
pub mod icons {
    /// Open (hollow circle).
    pub const OPEN: &str = "○";
    /// In progress (half-filled).
    pub const IN_PROGRESS: &str = "◐";
    /// Done (checkmark).
    pub const DONE: &str = "✓";
}

/// Widest preview of the record text in a table.
const PREVIEW_WIDTH: usize = 40;

#[must_use]
pub const fn format_status_icon(status: Status) -> &'static str {
    match status {
        Status::Open => icons::OPEN,
        Status::InProgress => icons::IN_PROGRESS,
        Status::Done => icons::DONE,
    }
}

/// Format: `{icon} [{id}] [{severity}] {user}`
#[must_use]
pub fn format_record_line(record: &Record) -> String {
    format!(
        "{} [{}] [{}] {}",
        format_status_icon(record.status),
        record.id,
        record.severity,
        record.user,
    )
}

/// Cut `text` to at most `width` columns, marking the cut with `…`.
/// Only the first line is kept.
#[must_use]
pub fn truncate_to_width(text: &str, width: usize) -> String {
    let line = text.lines().next().unwrap_or("");
    let cut = line.len() < text.trim_end().len();
    if !cut && line.width() <= width {
        return line.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in line.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

fn pad(cell: &str, width: usize) -> String {
    let fill = width.saturating_sub(cell.width());
    format!("{cell}{}", " ".repeat(fill))
}

/// Render records as an aligned table. `records` is the view projection;
/// the first column is the display number.
#[must_use]
pub fn format_table(records: &[&Record]) -> String {
    let header = ["#", "ID", "User", "Severity", "Status", "Text"];
    let rows: Vec<[String; 6]> = records
        .iter()
        .enumerate()
        .map(|(idx, r)| {
            [
                (idx + 1).to_string(),
                r.id.to_string(),
                r.user.clone(),
                r.severity.to_string(),
                format!("{} {}", format_status_icon(r.status), r.status),
                truncate_to_width(&r.text, PREVIEW_WIDTH),
            ]
        })
        .collect();

    let mut widths = header.map(UnicodeWidthStr::width);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let mut out = String::new();
    let line = |cells: Vec<&str>| {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| pad(cell, width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    out.push_str(&line(header.to_vec()));
    out.push('\n');
    for row in &rows {
        out.push_str(&line(row.iter().map(String::as_str).collect()));
        out.push('\n');
    }
    out
}
