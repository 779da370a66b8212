//! Log retrieval state machine for evlog.
//!
//! Fetches access and administrative event records from a remote analytics
//! service and renders them as a time-ordered line stream, either as a
//! bounded one-shot export or as an unbounded tail that polls on a fixed
//! interval. HTTP transport, argument parsing, and configuration loading
//! are collaborators provided by the other workspace crates.

pub mod category;
pub mod normalize;
pub mod paginate;
pub mod poll;
pub mod sink;
pub mod stop;
pub mod transport;
pub mod window;

#[cfg(test)]
pub(crate) mod testutil;

pub use category::{CategoryError, EventCategory};
pub use normalize::{LogLine, Page, normalize};
pub use poll::{RunCounters, RunSummary, run};
pub use sink::Sink;
pub use stop::StopFlag;
pub use transport::{ApiResponse, Transport, TransportError};
pub use window::{Bounds, COLLECTION_DELAY, PULL_INTERVAL, TimeWindow};
