//! Cursor-based pagination through one time window.

use std::io;

use serde_json::{Value, json};

use crate::category::EventCategory;
use crate::normalize::normalize;
use crate::poll::RunCounters;
use crate::sink::Sink;
use crate::transport::Transport;
use crate::window::TimeWindow;

/// Fixed source tag sent with every request payload.
pub const SOURCE: &str = "evlog-cli";

/// Builds the wire payload for one page request.
///
/// The backend expects the millisecond bounds as strings, and a `scroll_id`
/// only when continuing from a previous page of the same window.
fn page_request(window: TimeWindow, cursor: Option<&str>) -> Value {
    let mut body = json!({
        "sts": window.start_ms.to_string(),
        "ets": window.end_ms.to_string(),
        "metrics": "logs",
        "es_fields": "flog",
        "limit": "1000",
        "sub_metrics": "scroll",
        "source": SOURCE,
    });
    if let Some(cursor) = cursor {
        body["scroll_id"] = Value::String(cursor.to_string());
    }
    body
}

/// Drains every page of one time window into the sink.
///
/// Feeds each response's cursor into the next request until the backend
/// stops returning one. Transport failures and non-success statuses are
/// logged and abort this window only; nothing is retried. The sink is
/// flushed after every completed page so already-written output survives
/// any later failure.
pub fn drain<T>(
    transport: &T,
    window: TimeWindow,
    category: EventCategory,
    sink: &mut Sink,
    counters: &mut RunCounters,
) -> io::Result<()>
where
    T: Transport + ?Sized,
{
    let mut cursor: Option<String> = None;

    loop {
        let body = page_request(window, cursor.as_deref());
        let response = match transport.post(category.endpoint(), &body) {
            Ok(response) => response,
            Err(err) => {
                tracing::error!(%err, request = %body, "request failed");
                return Ok(());
            }
        };
        if !response.is_success() {
            tracing::error!(
                status = response.status,
                request = %body,
                body = %response.body,
                "invalid API response status code"
            );
            return Ok(());
        }

        let payload = match response.json() {
            Ok(payload) => payload,
            Err(err) => {
                tracing::error!(%err, request = %body, body = %response.body, "unparseable response body");
                counters.errors += 1;
                return Ok(());
            }
        };

        let page = normalize(&payload, category);
        counters.errors += page.errors;
        for line in &page.lines {
            sink.write_line(&line.render(category))?;
            counters.lines_written += 1;
        }
        sink.flush()?;

        tracing::debug!(scroll_id = ?page.next_cursor, lines = page.lines.len(), "page drained");
        match page.next_cursor {
            Some(next) => cursor = Some(next),
            None => return Ok(()),
        }
    }
}
