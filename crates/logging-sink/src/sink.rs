//! crates/logging-sink/src/sink.rs
//! Shared handle around a write destination.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Cloneable handle to a write destination shared by the logger and its callers.
///
/// Every clone refers to the same underlying writer. The writer sits behind a
/// mutex so a full line can be written and flushed without another thread's
/// output landing in the middle of it. Dropping a handle never closes the
/// destination while other clones remain alive; the last clone drops the
/// writer.
///
/// # Examples
///
/// ```
/// use logging_sink::{CaptureBuffer, Sink};
///
/// let capture = CaptureBuffer::new();
/// let sink = Sink::new(capture.clone());
/// let shared = sink.clone();
///
/// shared.write_line(b"first\n")?;
/// sink.write_line(b"second\n")?;
///
/// assert!(sink.same_destination(&shared));
/// assert_eq!(capture.contents(), "first\nsecond\n");
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone)]
pub struct Sink {
    writer: Arc<Mutex<dyn Write + Send>>,
    label: &'static str,
}

impl Sink {
    /// Wraps an arbitrary writer.
    pub fn new<W>(writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        Self::labelled(writer, "writer")
    }

    /// Wraps a writer and records a short label shown by the [`fmt::Debug`] output.
    pub fn labelled<W>(writer: W, label: &'static str) -> Self
    where
        W: Write + Send + 'static,
    {
        Self {
            writer: Arc::new(Mutex::new(writer)),
            label,
        }
    }

    /// Destination writing to the process's standard error stream.
    #[must_use]
    pub fn stderr() -> Self {
        Self::labelled(io::stderr(), "stderr")
    }

    /// Destination writing to the process's standard output stream.
    #[must_use]
    pub fn stdout() -> Self {
        Self::labelled(io::stdout(), "stdout")
    }

    /// Returns the label describing this destination.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.label
    }

    /// Reports whether two handles refer to the same underlying writer.
    #[must_use]
    pub fn same_destination(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.writer, &other.writer)
    }

    /// Writes one complete line and flushes it while holding the destination lock.
    ///
    /// The caller supplies the trailing newline. Holding the lock across the
    /// write and the flush keeps concurrent lines whole.
    pub fn write_line(&self, line: &[u8]) -> io::Result<()> {
        let mut writer = self.lock();
        writer.write_all(line)?;
        writer.flush()
    }

    fn lock(&self) -> MutexGuard<'_, dyn Write + Send + 'static> {
        self.writer.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Sink {
    /// Standard error, matching the logger's default destination.
    fn default() -> Self {
        Self::stderr()
    }
}

impl Write for Sink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.lock().write(buf)
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.lock().write_all(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.lock().flush()
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink").field("label", &self.label).finish()
    }
}
