//! The poll loop: window computation and pagination, once or forever.

use std::io;
use std::time::Instant;

use chrono::Utc;

use crate::category::EventCategory;
use crate::paginate;
use crate::sink::Sink;
use crate::stop::StopFlag;
use crate::transport::Transport;
use crate::window::{Bounds, PULL_INTERVAL, TimeWindow};

/// Per-run tallies, owned by the run rather than held as process state so
/// repeated runs in one process start from zero.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunCounters {
    pub lines_written: u64,
    pub errors: u64,
}

/// What one completed run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// The last (for bounded runs, the only) window fetched.
    pub window: TimeWindow,
    pub counters: RunCounters,
    /// Bytes this run appended to the sink.
    pub bytes_written: u64,
}

/// Runs the fetch loop until done or stopped.
///
/// Bounded mode (`tail == false`) runs exactly one compute-drain cycle.
/// Tail mode repeats forever, sleeping out the remainder of
/// [`PULL_INTERVAL`] between cycles; the sleep is cut short the moment
/// `stop` is raised, and the flag is observed only at window boundaries.
/// Only sink I/O failures propagate; transport and page failures curtail
/// the current window and are reflected in the counters.
pub fn run<T>(
    transport: &T,
    category: EventCategory,
    tail: bool,
    bounds: Bounds,
    sink: &mut Sink,
    stop: &StopFlag,
) -> io::Result<RunSummary>
where
    T: Transport + ?Sized,
{
    let mut counters = RunCounters::default();
    let start_bytes = sink.bytes_written();

    let window = loop {
        let window = TimeWindow::compute(Utc::now(), tail, bounds);
        let cycle_start = Instant::now();
        tracing::info!(
            category = %category,
            start_ms = window.start_ms,
            end_ms = window.end_ms,
            "fetching log window"
        );

        paginate::drain(transport, window, category, sink, &mut counters)?;

        if !tail {
            break window;
        }

        let wait = PULL_INTERVAL.saturating_sub(cycle_start.elapsed());
        tracing::debug!(wait_ms = wait.as_millis() as u64, "waiting for next cycle");
        if stop.wait_timeout(wait) {
            tracing::info!("stop requested, exiting poll loop");
            break window;
        }
    };

    Ok(RunSummary {
        window,
        counters,
        bytes_written: sink.bytes_written() - start_bytes,
    })
}
