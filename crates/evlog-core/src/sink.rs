//! Output sink: the place normalized lines are appended to.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

/// An append-only destination for rendered log lines.
///
/// Opened once before the poll loop starts and dropped once at loop exit.
/// The stdout variant borrows the process's inherited stream and never
/// closes it; the file variant closes its descriptor on drop. Byte
/// accounting covers exactly what this run appended, independent of any
/// pre-existing file content.
pub struct Sink {
    out: Box<dyn Write + Send>,
    bytes: u64,
}

impl std::fmt::Debug for Sink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sink")
            .field("bytes", &self.bytes)
            .finish_non_exhaustive()
    }
}

impl Sink {
    /// Sink over the process's standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::from_writer(io::stdout())
    }

    /// Sink appending to a file, created if absent.
    pub fn file(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::from_writer(file))
    }

    /// Sink over an arbitrary writer (in-memory buffers in tests).
    pub fn from_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            out: Box::new(writer),
            bytes: 0,
        }
    }

    /// Appends one rendered line.
    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.out.write_all(line.as_bytes())?;
        self.bytes += line.len() as u64;
        Ok(())
    }

    /// Flushes buffered output; called after every completed page.
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    /// Bytes appended since this sink was opened.
    #[must_use]
    pub const fn bytes_written(&self) -> u64 {
        self.bytes
    }
}
