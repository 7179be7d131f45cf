//! Escaping and formatting primitives

use crate::constants::browse::SHORT_SHA_LEN;
use chrono::{DateTime, Utc};

/// Escape text for interpolation into HTML
///
/// The five dangerous characters become entity references; everything
/// else passes through unchanged. Safe for both element content and
/// quoted attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Abbreviate a commit sha for display
pub fn short_sha(sha: &str) -> String {
    sha.chars().take(SHORT_SHA_LEN).collect()
}

/// Human-readable timestamp for headers and commit rows
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M UTC").to_string()
}
