//! Shared helpers for unit tests.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use serde_json::Value;

use crate::stop::StopFlag;
use crate::transport::{ApiResponse, Transport, TransportError};

/// Clonable in-memory buffer so tests can inspect what a sink wrote.
#[derive(Clone, Default)]
pub(crate) struct SharedBuf(pub Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Scripted transport returning canned responses in order.
///
/// Records every request body so tests can assert on pagination state.
/// Optionally raises a [`StopFlag`] on the first request, standing in for
/// a signal arriving while a window is in flight.
pub(crate) struct FakeTransport {
    responses: Mutex<Vec<Result<ApiResponse, TransportError>>>,
    pub requests: Mutex<Vec<Value>>,
    stop_on_first_request: Option<StopFlag>,
}

impl FakeTransport {
    pub fn new(responses: Vec<Result<ApiResponse, TransportError>>) -> Self {
        Self {
            responses: Mutex::new(responses),
            requests: Mutex::new(Vec::new()),
            stop_on_first_request: None,
        }
    }

    pub fn with_stop(mut self, stop: StopFlag) -> Self {
        self.stop_on_first_request = Some(stop);
        self
    }

    pub fn ok(body: &str) -> Result<ApiResponse, TransportError> {
        Ok(ApiResponse {
            status: 200,
            body: body.to_string(),
        })
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl Transport for FakeTransport {
    fn post(&self, _path: &str, body: &Value) -> Result<ApiResponse, TransportError> {
        let mut requests = self.requests.lock().unwrap();
        requests.push(body.clone());
        if requests.len() == 1 {
            if let Some(stop) = &self.stop_on_first_request {
                stop.trigger();
            }
        }
        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(TransportError("fake transport exhausted".to_string()));
        }
        responses.remove(0)
    }
}
