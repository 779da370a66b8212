//! Normalization of raw backend pages into renderable log lines.
//!
//! The two categories are served by two structurally different APIs, so the
//! payload is handled as a loosely-typed [`serde_json::Value`] tree with
//! per-field presence checks. A malformed record is counted and skipped;
//! only a missing top-level `message` fails the whole page.

use chrono::{NaiveDate, TimeZone, Utc};
use serde_json::Value;

use crate::category::EventCategory;

/// One normalized, category-independent output record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    /// Epoch milliseconds of the source record.
    pub timestamp_ms: i64,
    /// Raw payload content from the backend.
    pub text: String,
    date: NaiveDate,
}

impl LogLine {
    /// Builds a line, rejecting timestamps outside the calendar range.
    #[must_use]
    pub fn new(timestamp_ms: i64, text: String) -> Option<Self> {
        let date = Utc
            .timestamp_millis_opt(timestamp_ms)
            .single()?
            .date_naive();
        Some(Self {
            timestamp_ms,
            text,
            date,
        })
    }

    /// Renders the output line for one category.
    ///
    /// The date is day-granular, matching the source record's own day-level
    /// timestamp semantics. The comma-vs-space separator is a backend
    /// format artifact preserved per category.
    #[must_use]
    pub fn render(&self, category: EventCategory) -> String {
        match category {
            EventCategory::UserAccess => format!("{} {}\n", self.date, self.text),
            EventCategory::Admin => format!("{},{}\n", self.date, self.text),
        }
    }
}

/// The normalized contents of one backend page.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Page {
    pub lines: Vec<LogLine>,
    /// Cursor for the next page, valid only within the same time window.
    pub next_cursor: Option<String>,
    /// Records (or whole pages) that could not be parsed.
    pub errors: u64,
}

/// Extracts log lines and the next pagination cursor from a raw response.
///
/// Never fails outright: page-shape problems are reported through
/// [`Page::errors`] with no lines and no cursor, which terminates
/// pagination for the current window.
#[must_use]
pub fn normalize(response: &Value, category: EventCategory) -> Page {
    let Some(message) = response.get("message") else {
        tracing::error!(response = %response, "no data (message) in response");
        return Page {
            errors: 1,
            ..Page::default()
        };
    };

    match category {
        EventCategory::UserAccess => normalize_access(message),
        EventCategory::Admin => normalize_admin(message),
    }
}

/// Access shape: `message` maps epoch-millisecond keys to records carrying
/// a `flog` payload. Non-numeric keys are metadata, skipped silently.
fn normalize_access(message: &Value) -> Page {
    let mut page = Page::default();

    let Some(map) = message.as_object() else {
        tracing::error!(message = %message, "access message is not an object");
        page.errors = 1;
        return page;
    };

    page.next_cursor = map
        .get("scroll_id")
        .and_then(Value::as_str)
        .map(str::to_owned);

    for (key, record) in map {
        if !is_numeric(key) {
            tracing::debug!(key = %key, "ignored non-timestamp key");
            continue;
        }
        match access_line(key, record) {
            Some(line) => page.lines.push(line),
            None => {
                tracing::warn!(key = %key, record = %record, "error parsing access log record");
                page.errors += 1;
            }
        }
    }

    page
}

fn access_line(key: &str, record: &Value) -> Option<LogLine> {
    let timestamp_ms: i64 = key.parse().ok()?;
    let flog = record.as_object()?.get("flog")?.as_str()?;
    LogLine::new(timestamp_ms, flog.to_owned())
}

/// Admin shape: `message` holds a `data` array of records and a `metadata`
/// object carrying the cursor.
fn normalize_admin(message: &Value) -> Page {
    let mut page = Page::default();

    let Some(map) = message.as_object() else {
        tracing::error!(message = %message, "admin message is not an object");
        page.errors = 1;
        return page;
    };

    page.next_cursor = map
        .get("metadata")
        .and_then(|metadata| metadata.get("scroll_id"))
        .and_then(Value::as_str)
        .map(str::to_owned);

    let Some(items) = map.get("data").and_then(Value::as_array) else {
        tracing::error!(message = %message, "admin message has no data array");
        page.errors += 1;
        return page;
    };

    for item in items {
        match admin_line(item) {
            Some(line) => page.lines.push(line),
            None => {
                tracing::warn!(item = %item, "error parsing admin log record");
                page.errors += 1;
            }
        }
    }

    page
}

fn admin_line(item: &Value) -> Option<LogLine> {
    let timestamp_ms = item.get("ts")?.as_i64()?;
    let text = item.get("splunk_line")?.as_str()?;
    LogLine::new(timestamp_ms, text.to_owned())
}

fn is_numeric(key: &str) -> bool {
    !key.is_empty() && key.bytes().all(|b| b.is_ascii_digit())
}
