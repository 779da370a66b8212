//! Time window computation for fetch cycles.

use std::time::Duration;

use chrono::{DateTime, Utc};

/// Poll cadence in tail mode, and the default window width.
pub const PULL_INTERVAL: Duration = Duration::from_secs(15);

/// Safety margin subtracted from "now" before querying.
///
/// The backend may still be indexing very recent events; querying right up
/// to the current instant risks missing late-arriving records on the next
/// window's lower bound.
pub const COLLECTION_DELAY: Duration = Duration::from_secs(60);

/// Explicit window overrides from the caller, in epoch seconds.
///
/// Only honored for bounded (non-tail) runs. No `start < end` validation is
/// performed when both are supplied; that input is undefined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bounds {
    pub start: Option<i64>,
    pub end: Option<i64>,
}

/// The `[start, end)` millisecond-epoch range bounding one query.
///
/// Produced fresh each poll cycle; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start_ms: i64,
    pub end_ms: i64,
}

impl TimeWindow {
    /// Computes the window for one fetch cycle.
    ///
    /// The rolling default ends at `floor(now) - COLLECTION_DELAY` and spans
    /// one [`PULL_INTERVAL`]. Explicit bounds replace either edge verbatim
    /// (seconds to milliseconds) on bounded runs only.
    #[must_use]
    pub fn compute(now: DateTime<Utc>, tail: bool, bounds: Bounds) -> Self {
        let mut end_ms = now.timestamp() * 1000 - COLLECTION_DELAY.as_millis() as i64;
        if !tail {
            if let Some(end) = bounds.end {
                end_ms = end * 1000;
            }
        }

        let mut start_ms = end_ms - PULL_INTERVAL.as_millis() as i64;
        if !tail {
            if let Some(start) = bounds.start {
                start_ms = start * 1000;
            }
        }

        Self { start_ms, end_ms }
    }
}
