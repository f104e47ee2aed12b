// src/utils/formatter.rs
use chrono::{Local, TimeZone};
use std::fmt::Write;

/// Size in kilobytes, rounded up: 1 byte is "1 KB", an empty file "0 KB".
pub fn format_size(bytes: u64) -> String {
    format!("{} KB", bytes.div_ceil(1024))
}

/// Formats a Unix timestamp in local time with a strftime pattern.
pub fn format_timestamp(timestamp: i64, format: &str) -> Result<String, String> {
    let time = Local
        .timestamp_opt(timestamp, 0)
        .single()
        .ok_or_else(|| format!("Timestamp out of range: {}", timestamp))?;
    let mut formatted = String::new();
    write!(formatted, "{}", time.format(format))
        .map_err(|_| format!("Invalid date format: {}", format))?;
    Ok(formatted)
}

pub fn escape_html(text: &str) -> String {
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
