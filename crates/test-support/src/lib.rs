#![deny(unsafe_code)]
#![deny(missing_docs)]

//! # Overview
//!
//! Helpers for tests that exercise code logging through the process-wide
//! [`logging`] logger. [`capture`] swaps the global destination for an
//! in-memory buffer, sets the requested level, and replaces the exit action
//! with a panic so fatal paths can be observed with
//! [`std::panic::catch_unwind`]. Captured lines are parsed into
//! [`LogMessage`] values for assertions.
//!
//! # Invariants
//!
//! - At most one [`LogCapture`] is alive per process; [`capture`] blocks until
//!   the previous one is dropped, so tests touching the global logger never
//!   observe each other's output.
//! - Dropping a [`LogCapture`] clears the buffer and restores the severity,
//!   destination and exit action that were installed before it.
//!
//! # Examples
//!
//! ```
//! use test_support::{LEVEL_DEBUG, capture};
//!
//! let logs = capture(LEVEL_DEBUG);
//! logging::debug("test debug message");
//!
//! let messages = logs.messages();
//! assert_eq!(messages.len(), 1);
//! assert_eq!(messages[0].level, "DEBUG");
//! assert_eq!(messages[0].message, "test debug message");
//! ```

use std::fmt;
use std::mem;
use std::panic;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use logging::{ExitAction, LoggerConfig, Severity};
use logging_sink::{CaptureBuffer, Sink};

/// Level name for debug capture.
pub const LEVEL_DEBUG: &str = "DEBUG";
/// Level name for info capture.
pub const LEVEL_INFO: &str = "INFO";
/// Level name for error capture.
pub const LEVEL_ERROR: &str = "ERROR";
/// Level name for fatal capture.
pub const LEVEL_FATAL: &str = "FATAL";

/// Panic payload raised in place of exiting after a fatal message.
pub const FATAL_PANIC_MESSAGE: &str = "fatal log emitted";

fn capture_session_lock() -> &'static Mutex<()> {
    static SESSION_LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    SESSION_LOCK.get_or_init(|| Mutex::new(()))
}

fn lock_capture_session() -> MutexGuard<'static, ()> {
    capture_session_lock()
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Redirects the process-wide logger into memory at `level`.
///
/// `level` is applied with [`logging::set_level`], so an unknown name keeps
/// `INFO`. Any line produced while installing the capture is discarded.
#[must_use = "the previous logger settings are restored when the capture is dropped"]
pub fn capture(level: &str) -> LogCapture {
    let session = lock_capture_session();
    let buffer = CaptureBuffer::new();
    let previous = logging::global().config();

    logging::initialize(
        LoggerConfig::new()
            .with_sink(Sink::labelled(buffer.clone(), "capture"))
            .with_exit_action(ExitAction::new(|| panic::panic_any(FATAL_PANIC_MESSAGE))),
    );
    logging::set_level(level);
    buffer.clear();

    LogCapture {
        buffer,
        previous,
        _session: session,
    }
}

/// Exclusive capture of the process-wide logger's output.
///
/// Obtained from [`capture`]; restores the previous settings on drop.
pub struct LogCapture {
    buffer: CaptureBuffer,
    previous: LoggerConfig,
    _session: MutexGuard<'static, ()>,
}

impl LogCapture {
    /// Parses every captured line.
    ///
    /// Lines that do not have the logger's layout are skipped.
    #[must_use]
    pub fn messages(&self) -> Vec<LogMessage> {
        self.buffer
            .contents()
            .lines()
            .filter_map(LogMessage::parse)
            .collect()
    }

    /// Captured output exactly as written.
    #[must_use]
    pub fn raw(&self) -> String {
        self.buffer.contents()
    }

    /// Discards everything captured so far.
    pub fn clear(&self) {
        self.buffer.clear();
    }

    /// Returns `true` when nothing has been captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Number of captured lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.contents().lines().count()
    }

    /// Settings that will be restored on drop.
    #[must_use]
    pub const fn previous(&self) -> &LoggerConfig {
        &self.previous
    }
}

impl Drop for LogCapture {
    fn drop(&mut self) {
        self.buffer.clear();
        logging::initialize(mem::take(&mut self.previous));
    }
}

impl fmt::Debug for LogCapture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogCapture")
            .field("bytes", &self.buffer.len())
            .field("previous", &self.previous)
            .finish_non_exhaustive()
    }
}

/// One captured line split into its parts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogMessage {
    /// The full line without its newline.
    pub raw: String,
    /// Severity name without brackets, e.g. `ERROR`.
    pub level: String,
    /// Text following the `file:line:` prefix.
    pub message: String,
}

impl LogMessage {
    /// Splits `[LEVEL] date time file:line: message` on its first four spaces.
    ///
    /// Returns `None` when the line has fewer than five parts.
    ///
    /// ```
    /// use test_support::LogMessage;
    ///
    /// let parsed = LogMessage::parse("[INFO] 2018/03/07 09:05:01 main.rs:9: up and running")
    ///     .expect("well-formed line");
    /// assert_eq!(parsed.level, "INFO");
    /// assert_eq!(parsed.message, "up and running");
    /// assert!(LogMessage::parse("[INFO] truncated").is_none());
    /// ```
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let mut words = line.splitn(5, ' ');
        let tag = words.next()?;
        let message = words.nth(3)?;
        Some(Self {
            raw: line.to_owned(),
            level: tag.trim_matches(['[', ']']).to_owned(),
            message: message.to_owned(),
        })
    }

    /// Severity named by [`level`](Self::level), if it is a known one.
    #[must_use]
    pub fn severity(&self) -> Option<Severity> {
        Severity::parse(&self.level).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fatal_panics_instead_of_exiting() {
        let logs = capture(LEVEL_ERROR);
        let payload = panic::catch_unwind(|| logging::fatal("Panic!")).expect_err("fatal panics");

        assert_eq!(
            payload.downcast_ref::<&str>().copied(),
            Some(FATAL_PANIC_MESSAGE)
        );
        let messages = logs.messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].message, "Panic!");
    }

    #[test]
    fn error_level_filters_then_clear_discards_earlier_messages() {
        let logs = capture(LEVEL_ERROR);
        assert_eq!(logging::level(), LEVEL_ERROR);

        logging::debug("noise");
        logging::info("skip");
        assert!(logs.is_empty());

        logging::error("keep");
        let messages = logs.messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].level, LEVEL_ERROR);
        assert_eq!(messages[0].message, "keep");

        logs.clear();
        logging::error("after");
        let messages = logs.messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].raw.contains("after"));
        assert!(!messages[0].raw.contains("keep"));
    }

    #[test]
    fn message_fields_are_populated() {
        let logs = capture(LEVEL_DEBUG);
        logging::debug("test debug message");

        let messages = logs.messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].raw.contains("[DEBUG]"));
        assert!(messages[0].raw.contains("test debug message"));
        assert_eq!(messages[0].level, "DEBUG");
        assert_eq!(messages[0].message, "test debug message");
        assert_eq!(messages[0].severity(), Some(Severity::Debug));
    }

    #[test]
    fn empty_capture_has_no_messages() {
        let logs = capture(LEVEL_DEBUG);
        assert!(logs.messages().is_empty());
        assert!(logs.is_empty());
        assert_eq!(logs.len(), 0);
    }


    #[test]
    fn unknown_level_keeps_info_and_hides_the_complaint() {
        let logs = capture("chatty");
        assert_eq!(logging::level(), LEVEL_INFO);
        assert!(logs.is_empty());
    }

    #[test]
    fn parse_rejects_short_lines() {
        assert!(LogMessage::parse("").is_none());
        assert!(LogMessage::parse("[ERROR] 2018/03/07 09:05:01 main.rs:9:").is_none());
        let parsed =
            LogMessage::parse("[ERROR] 2018/03/07 09:05:01 main.rs:9: ").expect("empty message");
        assert_eq!(parsed.message, "");
    }

    #[test]
    fn message_keeps_inner_spaces() {
        let parsed = LogMessage::parse("[FATAL] 2018/03/07 09:05:01 a.rs:1: a  b c")
            .expect("well-formed line");
        assert_eq!(parsed.message, "a  b c");
        assert_eq!(parsed.severity(), Some(Severity::Fatal));
    }
}
