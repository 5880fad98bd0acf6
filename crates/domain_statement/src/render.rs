//! Statement renderers
//!
//! Fixed-template walks over a built `Statement`. They never fail and do no
//! validation of their own.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Write as _;

use crate::error::StatementError;
use crate::statement::{PerformanceLineItem, Statement};

/// Output format for a rendered statement
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatementFormat {
    /// Plain text, one line per performance
    #[default]
    Text,
    /// HTML fragment
    Html,
    /// The statement record as JSON
    Json,
}

impl StatementFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatementFormat::Text => "text",
            StatementFormat::Html => "html",
            StatementFormat::Json => "json",
        }
    }
}

impl fmt::Display for StatementFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Renders a statement in the requested format
///
/// # Errors
///
/// Returns `StatementError::Serialization` if JSON output cannot be produced.
pub fn render(statement: &Statement, format: StatementFormat) -> Result<String, StatementError> {
    match format {
        StatementFormat::Text => Ok(render_plain_text(statement)),
        StatementFormat::Html => Ok(render_html(statement)),
        StatementFormat::Json => Ok(serde_json::to_string_pretty(statement)?),
    }
}

fn line_text(item: &PerformanceLineItem) -> String {
    format!("{}: {} ({} seats)", item.play_name(), item.amount(), item.audience())
}

/// Renders the plain-text statement, ending with a newline
pub fn render_plain_text(statement: &Statement) -> String {
    let mut result = format!("Statement for {}\n", statement.customer());
    for item in statement.line_items() {
        let _ = writeln!(result, " {}", line_text(item));
    }
    let _ = writeln!(result, "Amount owed is {}", statement.total_amount());
    let _ = writeln!(result, "You earned {} credits", statement.total_credits());
    result
}

/// Renders the statement as an HTML fragment
pub fn render_html(statement: &Statement) -> String {
    let mut result = format!("<h1>Statement for {}</h1>", escape_html(statement.customer()));
    result.push_str("<ul>");
    for item in statement.line_items() {
        let _ = write!(result, "<li> {}</li>", escape_html(&line_text(item)));
    }
    result.push_str("</ul>");
    let _ = write!(result, "<p>Amount owed is {}</p>", statement.total_amount());
    let _ = write!(result, "<p>You earned {} credits</p>", statement.total_credits());
    result
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("Rosencrantz & Guildenstern"), "Rosencrantz &amp; Guildenstern");
        assert_eq!(escape_html("<b>\"x\"</b>"), "&lt;b&gt;&quot;x&quot;&lt;/b&gt;");
        assert_eq!(escape_html("Hamlet"), "Hamlet");
    }
}
