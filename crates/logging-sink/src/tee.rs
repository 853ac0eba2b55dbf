//! crates/logging-sink/src/tee.rs
//! Writer that duplicates its input across several destinations.

use std::fmt;
use std::io::{self, Write};

/// Duplicates every write to each wrapped writer, in insertion order.
///
/// Writes are all-or-nothing per call from the caller's point of view: each
/// destination receives the full buffer through `write_all`, and the first
/// failure stops the fan-out and is returned. Used to mirror log lines to the
/// console and a log file at the same time.
///
/// # Examples
///
/// ```
/// use logging_sink::{CaptureBuffer, Tee};
/// use std::io::Write;
///
/// let console = CaptureBuffer::new();
/// let file = CaptureBuffer::new();
/// let mut tee = Tee::new().with_writer(console.clone()).with_writer(file.clone());
///
/// tee.write_all(b"line\n")?;
/// assert_eq!(console.contents(), "line\n");
/// assert_eq!(file.contents(), "line\n");
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Default)]
pub struct Tee {
    writers: Vec<Box<dyn Write + Send>>,
}

impl Tee {
    /// Creates a tee without destinations; writes are discarded until one is added.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a destination.
    pub fn with_writer<W>(mut self, writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        self.push(writer);
        self
    }

    /// Appends a destination in place.
    pub fn push<W>(&mut self, writer: W)
    where
        W: Write + Send + 'static,
    {
        self.writers.push(Box::new(writer));
    }

    /// Number of destinations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.writers.len()
    }

    /// Returns `true` when no destination has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.writers.is_empty()
    }
}

impl Write for Tee {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        for writer in &mut self.writers {
            writer.write_all(buf)?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        for writer in &mut self.writers {
            writer.flush()?;
        }
        Ok(())
    }
}

impl fmt::Debug for Tee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tee")
            .field("writers", &self.writers.len())
            .finish()
    }
}
