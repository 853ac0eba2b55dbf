#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` provides the write destinations consumed by the `logging`
//! crate. A destination is any [`std::io::Write`] implementor wrapped in a
//! [`Sink`], a cheaply cloneable handle that serialises access to the writer so
//! the logger, test harnesses, and bootstrap code can share one destination.
//!
//! # Design
//!
//! - [`Sink`] owns an `Arc<Mutex<dyn Write + Send>>`. Cloning the handle shares
//!   the destination; replacing a logger's sink never closes the previous one.
//! - [`Tee`] duplicates every write across several writers, mirroring the
//!   stdout-plus-log-file setup used when a log file is configured.
//! - [`CaptureBuffer`] is an in-memory destination whose contents remain
//!   readable through any clone, which is how tests inspect emitted lines.
//! - [`open_log_file`] opens a log file for appending, creating it with
//!   owner/group read-write permissions when missing.
//!
//! # Invariants
//!
//! - [`Sink::write_line`] issues a single `write_all` followed by a flush while
//!   holding the destination lock, so concurrent lines never interleave.
//! - Poisoned locks are recovered; a panic in one writer does not disable the
//!   destination for everybody else.
//!
//! # Errors
//!
//! Writes surface [`std::io::Error`] values from the wrapped writer. Opening a
//! log file reports [`SinkError::Open`] with the offending path.
//!
//! # Examples
//!
//! ```
//! use logging_sink::{CaptureBuffer, Sink};
//!
//! let capture = CaptureBuffer::new();
//! let sink = Sink::new(capture.clone());
//!
//! sink.write_line(b"[INFO] ready\n")?;
//! assert_eq!(capture.contents(), "[INFO] ready\n");
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//! # See also
//!
//! - `logging` crate for severity filtering and line rendering.

mod capture;
mod error;
mod file;
mod sink;
mod tee;

pub use capture::CaptureBuffer;
pub use error::SinkError;
pub use file::{LOG_FILE_MODE, open_log_file};
pub use sink::Sink;
pub use tee::Tee;
