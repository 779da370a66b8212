//! Transport seam between the state machine and the HTTP layer.
//!
//! The core only needs "post a JSON body, get back a status and a body".
//! Authentication, headers, and connection management belong to the
//! implementing crate.

use serde_json::Value;
use thiserror::Error;

/// A transport-level failure (network error, connection refused, ...).
///
/// Distinct from a non-success HTTP status, which still produces an
/// [`ApiResponse`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("transport error: {0}")]
pub struct TransportError(pub String);

/// A completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Parses the body as a JSON tree.
    pub fn json(&self) -> Result<Value, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

/// Black-box POST transport to the analytics backend.
pub trait Transport {
    fn post(&self, path: &str, body: &Value) -> Result<ApiResponse, TransportError>;
}
