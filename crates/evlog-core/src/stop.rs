//! Cooperative cancellation for the poll loop.
//!
//! The flag is raised from outside (the CLI wires process signals to it)
//! and observed by the loop only at window boundaries, so a window's
//! pagination is never abandoned mid-flight.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::time::Duration;

/// Shared stop flag with a cancellable timed wait.
///
/// Clones share state; raising the flag wakes any thread parked in
/// [`StopFlag::wait_timeout`] immediately.
#[derive(Debug, Clone, Default)]
pub struct StopFlag {
    inner: Arc<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    stopped: AtomicBool,
    lock: Mutex<()>,
    condvar: Condvar,
}

impl StopFlag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raises the flag and wakes any pending wait.
    ///
    /// Safe to call from a signal handler thread.
    pub fn trigger(&self) {
        self.inner.stopped.store(true, Ordering::SeqCst);
        let _guard = self
            .inner
            .lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        self.inner.condvar.notify_all();
    }

    #[must_use]
    pub fn is_set(&self) -> bool {
        self.inner.stopped.load(Ordering::SeqCst)
    }

    /// Waits up to `timeout`, returning early if the flag is raised.
    ///
    /// The flag is checked both before and after the wait; returns whether
    /// it is set.
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        if self.is_set() || timeout.is_zero() {
            return self.is_set();
        }

        let guard = self
            .inner
            .lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let _result = self
            .inner
            .condvar
            .wait_timeout_while(guard, timeout, |_| !self.is_set())
            .unwrap_or_else(PoisonError::into_inner);
        self.is_set()
    }
}
