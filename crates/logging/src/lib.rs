#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` is a small process-wide leveled logger. Every line it writes has
//! the shape
//!
//! ```text
//! [SEVERITY] YYYY/MM/DD HH:MM:SS file.rs:LINE: message
//! ```
//!
//! where `file.rs:LINE` is the location of the code that called the logging
//! function. Four severities exist, ordered `FATAL < ERROR < INFO < DEBUG`; a
//! message is written when its severity is at or below the configured minimum.
//!
//! # Design
//!
//! A [`Logger`] owns a mutex-guarded state made of the minimum [`Severity`],
//! the destination [`Sink`] and the [`ExitAction`] run after a fatal message.
//! The process-wide instance returned by [`global`] is created lazily with
//! defaults (`INFO`, standard error, terminate with status 1) and the free
//! functions of this crate ([`info`], [`set_level`], ...) forward to it.
//! Independent [`Logger`] values can be built for tests or embedded use.
//!
//! Caller locations are resolved through `#[track_caller]`, so wrappers that
//! are themselves annotated report their own caller rather than this crate.
//!
//! # Invariants
//!
//! - Filtering, rendering and writing one line happen under a single lock, so
//!   lines from concurrent callers never interleave and a reconfiguration is
//!   never observed half-applied.
//! - `FATAL` messages always pass the filter and the exit action always runs
//!   afterwards, outside the lock.
//! - [`Logger::set_level`] never fails: unknown names are reported as one
//!   `ERROR` line and the previous minimum is kept.
//! - Write errors from the destination are discarded.
//!
//! # Errors
//!
//! Parsing a severity name yields [`ParseSeverityError`]. Configuring the
//! logger from the environment yields [`SinkError`] when the requested log
//! file cannot be opened. Emission itself never reports errors.
//!
//! # Examples
//!
//! Route a dedicated logger into memory and inspect the result:
//!
//! ```
//! use logging::{ExitAction, Logger, LoggerConfig, Severity};
//! use logging_sink::{CaptureBuffer, Sink};
//!
//! let capture = CaptureBuffer::new();
//! let logger = Logger::new(
//!     LoggerConfig::new()
//!         .with_severity(Severity::Error)
//!         .with_sink(Sink::new(capture.clone()))
//!         .with_exit_action(ExitAction::noop()),
//! );
//!
//! logger.info("filtered out");
//! logger.errorf(format_args!("disk {} is full", "sda1"));
//!
//! let output = capture.contents();
//! assert_eq!(output.lines().count(), 1);
//! assert!(output.starts_with("[ERROR] "));
//! assert!(output.ends_with(": disk sda1 is full\n"));
//! ```
//!
//! # See also
//!
//! - [`logging_sink`] for the destinations a logger can write to.
//! - [`env`] for configuring the process-wide logger from `LOGLEVEL` and
//!   `LOGFILE`.

mod config;
pub mod env;
mod exit;
mod format;
mod global;
mod location;
mod logger;
mod macros;
mod severity;

#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use config::LoggerConfig;
pub use env::{Bootstrap, BootstrapNotice, FILE_ENV, LEVEL_ENV, bootstrap};
pub use exit::{ExitAction, FATAL_EXIT_CODE};
pub use format::render_line;
pub use global::{
    debug, debugf, error, errorf, exit_action, fatal, fatalf, global, info, infof, initialize,
    level, output, set_exit_action, set_level, set_output, set_severity, severity,
};
pub use location::CallerLocation;
pub use logger::Logger;
pub use logging_sink::{Sink, SinkError};
pub use severity::{ParseSeverityError, Severity, severity_name};

#[cfg(feature = "tracing")]
pub use tracing_bridge::{SeverityLayer, init_tracing, init_tracing_with_filter};
