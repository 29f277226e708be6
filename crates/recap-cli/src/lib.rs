use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Render a catalog timestamp (unix seconds) for display. Out-of-range
/// values fall back to the raw number rather than failing the listing.
pub fn format_timestamp(unix_seconds: i64) -> String {
    match DateTime::<Utc>::from_timestamp(unix_seconds, 0) {
        Some(ts) => ts.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => unix_seconds.to_string(),
    }
}

/// Truncate a string to max_len characters, appending "..." if truncated.
/// Counts characters, not bytes: catalog names are backend-supplied and may
/// contain multi-byte UTF-8, which must never split mid-character.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Render a response as pretty-printed JSON for machine-readable output.
pub fn render_json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    serde_json::to_string_pretty(value).context("Serialize response")
}

/// Print a response as pretty-printed JSON.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", render_json(value)?);
    Ok(())
}

/// Initialize tracing for CLI binaries.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_timestamp_renders_utc() {
        assert_eq!(format_timestamp(1_700_000_000), "2023-11-14 22:13:20 UTC");
    }

    #[test]
    fn format_timestamp_falls_back_for_out_of_range() {
        assert_eq!(format_timestamp(i64::MAX), i64::MAX.to_string());
    }

    #[test]
    fn truncate_string_short() {
        assert_eq!(truncate_string("hello", 10), "hello");
        assert_eq!(truncate_string("", 5), "");
    }

    #[test]
    fn truncate_string_long() {
        assert_eq!(truncate_string("hello world", 8), "hello...");
        assert_eq!(truncate_string("abc", 2), "...");
    }

    #[test]
    fn render_json_pretty_prints_catalog_records() {
        let records: Vec<recap_core::UploadRecord> = serde_json::from_str(
            r#"[{"file_name":"abc123","file_original":"meeting.mp3","file_timestamp":"1700000000"}]"#,
        )
        .unwrap();
        let rendered = render_json(&records).unwrap();
        assert!(rendered.contains("\"file_name\": \"abc123\""));
        assert!(rendered.contains("\"file_original\": \"meeting.mp3\""));
        assert!(rendered.contains("\"file_timestamp\": 1700000000"));
    }

    #[test]
    fn truncate_string_cuts_on_char_boundaries() {
        // A multi-byte character straddling the cut point must not panic.
        let name = format!("{}émeeting.mp3", "a".repeat(36));
        assert_eq!(truncate_string(&name, 40), format!("{}é...", "a".repeat(36)));
        assert_eq!(truncate_string("café.mp3", 7), "café...");
        assert_eq!(truncate_string("née.m4a", 20), "née.m4a");
    }
}
