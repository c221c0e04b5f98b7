//! Markup escaping for user-supplied text.

use std::fmt::Display;

/// Escape `& < > " '` for insertion into HTML markup.
///
/// Single pass: an already escaped `&amp;` becomes `&amp;amp;`.
#[must_use]
pub fn escape_html(text: impl Display) -> String {
    let text = text.to_string();
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            other => out.push(other),
        }
    }
    out
}
