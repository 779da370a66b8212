//! Human-readable end-of-run summary.

use chrono::{TimeZone, Utc};

use evlog_core::RunSummary;

/// Renders the bounded-run summary printed unless `--batch` is given.
#[must_use]
pub fn render(summary: &RunSummary) -> String {
    format!(
        "# Start: {} (EPOCH {})\n# End: {} (EPOCH {})\n# Total: {} event(s), {} error(s), {} bytes written\n",
        format_utc(summary.window.start_ms),
        summary.window.start_ms / 1000,
        format_utc(summary.window.end_ms),
        summary.window.end_ms / 1000,
        summary.counters.lines_written,
        summary.counters.errors,
        summary.bytes_written,
    )
}

fn format_utc(ms: i64) -> String {
    Utc.timestamp_millis_opt(ms).single().map_or_else(
        || format!("{ms} ms"),
        |timestamp| timestamp.format("%m/%d/%Y %H:%M:%S UTC").to_string(),
    )
}
