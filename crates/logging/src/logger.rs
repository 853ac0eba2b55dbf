//! crates/logging/src/logger.rs
//! Logger state and the level-filtered dispatch path.

use std::fmt::{self, Display};
use std::sync::{Mutex, MutexGuard, PoisonError};

use logging_sink::Sink;
use time::{OffsetDateTime, UtcOffset};

use crate::format::{local_offset, render_line};
use crate::{CallerLocation, ExitAction, LoggerConfig, Severity};

/// Mutable settings guarded by the logger's lock.
#[derive(Debug)]
struct LoggerState {
    minimum: Severity,
    sink: Sink,
    exit_action: ExitAction,
}

impl From<LoggerConfig> for LoggerState {
    fn from(config: LoggerConfig) -> Self {
        Self {
            minimum: config.severity,
            sink: config.sink,
            exit_action: config.exit_action,
        }
    }
}

/// Leveled logger writing one line per accepted message.
///
/// A single mutex guards the minimum severity, the sink, and the exit action.
/// Each emission holds the lock while it filters, renders, and writes, so a
/// concurrent [`set_output`](Self::set_output) or [`set_level`](Self::set_level)
/// is observed either entirely before or entirely after the message. The exit
/// action is cloned under the lock and run after it is released.
///
/// Sinks must not log through the logger that owns them; the lock is not
/// re-entrant.
///
/// # Examples
///
/// ```
/// use logging::{ExitAction, Logger, LoggerConfig, Severity};
/// use logging_sink::{CaptureBuffer, Sink};
///
/// let capture = CaptureBuffer::new();
/// let logger = Logger::new(
///     LoggerConfig::new()
///         .with_sink(Sink::new(capture.clone()))
///         .with_exit_action(ExitAction::noop()),
/// );
///
/// logger.debug("hidden");
/// logger.info("shown");
///
/// let output = capture.contents();
/// assert!(!output.contains("hidden"));
/// assert!(output.starts_with("[INFO] "));
/// assert!(output.ends_with(": shown\n"));
/// ```
pub struct Logger {
    state: Mutex<LoggerState>,
    offset: UtcOffset,
}

impl Logger {
    /// Creates a logger with the supplied configuration.
    #[must_use]
    pub fn new(config: LoggerConfig) -> Self {
        Self {
            state: Mutex::new(LoggerState::from(config)),
            offset: local_offset(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, LoggerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replaces severity, sink, and exit action in one step.
    pub fn reconfigure(&self, config: LoggerConfig) {
        *self.lock() = LoggerState::from(config);
    }

    /// Replaces the destination for every severity.
    pub fn set_output(&self, sink: Sink) {
        self.lock().sink = sink;
    }

    /// Parses `text` and makes it the minimum severity.
    ///
    /// Unrecognised text is reported as a single `ERROR` line and the previous
    /// minimum stays in effect.
    #[track_caller]
    pub fn set_level(&self, text: &str) {
        match Severity::parse(text) {
            Ok(severity) => self.set_severity(severity),
            Err(err) => {
                self.log(Severity::Error, CallerLocation::caller(), format_args!("{err}"));
            }
        }
    }

    /// Sets the minimum severity.
    pub fn set_severity(&self, severity: Severity) {
        self.lock().minimum = severity;
    }

    /// Replaces the action run after fatal messages.
    pub fn set_exit_action(&self, exit_action: ExitAction) {
        self.lock().exit_action = exit_action;
    }

    /// Upper-case name of the minimum severity.
    #[must_use]
    pub fn level(&self) -> String {
        self.severity().to_string()
    }

    /// Current minimum severity.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.lock().minimum
    }

    /// Handle to the current destination.
    #[must_use]
    pub fn output(&self) -> Sink {
        self.lock().sink.clone()
    }

    /// Handle to the current fatal exit action.
    #[must_use]
    pub fn exit_action(&self) -> ExitAction {
        self.lock().exit_action.clone()
    }

    /// Snapshot of the current settings.
    #[must_use]
    pub fn config(&self) -> LoggerConfig {
        let state = self.lock();
        LoggerConfig {
            severity: state.minimum,
            sink: state.sink.clone(),
            exit_action: state.exit_action.clone(),
        }
    }

    /// Reports whether a message at `severity` would currently be written.
    #[must_use]
    pub fn enabled(&self, severity: Severity) -> bool {
        self.lock().minimum.allows(severity)
    }

    /// Filters, renders, and writes one message; runs the exit action for [`Severity::Fatal`].
    ///
    /// Returns `true` when the line passed the filter and was handed to the
    /// sink. Write errors are discarded. For fatal messages the exit action
    /// runs after the write attempt whether or not the line was written.
    pub fn log(
        &self,
        severity: Severity,
        location: CallerLocation,
        message: fmt::Arguments<'_>,
    ) -> bool {
        let (written, exit_action) = {
            let state = self.lock();
            let written = state.minimum.allows(severity);
            if written {
                self.write(&state, severity, location, message);
            }
            let exit_action = (severity == Severity::Fatal).then(|| state.exit_action.clone());
            (written, exit_action)
        };

        if let Some(exit_action) = exit_action {
            exit_action.run();
        }
        written
    }

    /// Writes one line whatever the minimum severity; never runs the exit action.
    ///
    /// Used for configuration diagnostics that must be visible at every level,
    /// such as the level and destination chosen at startup.
    pub fn announce(
        &self,
        severity: Severity,
        location: CallerLocation,
        message: fmt::Arguments<'_>,
    ) {
        let state = self.lock();
        self.write(&state, severity, location, message);
    }

    fn write(
        &self,
        state: &LoggerState,
        severity: Severity,
        location: CallerLocation,
        message: fmt::Arguments<'_>,
    ) {
        let timestamp = OffsetDateTime::now_utc().to_offset(self.offset);
        let line = render_line(severity, timestamp, location, message);
        let _ = state.sink.write_line(line.as_bytes());
    }

    /// Logs `message` at `DEBUG`.
    #[track_caller]
    pub fn debug(&self, message: impl Display) {
        self.log(Severity::Debug, CallerLocation::caller(), format_args!("{message}"));
    }

    /// Logs preformatted arguments at `DEBUG`; see [`debug_log!`](crate::debug_log).
    #[track_caller]
    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Debug, CallerLocation::caller(), args);
    }

    /// Logs `message` at `INFO`.
    #[track_caller]
    pub fn info(&self, message: impl Display) {
        self.log(Severity::Info, CallerLocation::caller(), format_args!("{message}"));
    }

    /// Logs preformatted arguments at `INFO`; see [`info_log!`](crate::info_log).
    #[track_caller]
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Info, CallerLocation::caller(), args);
    }

    /// Logs `message` at `ERROR`.
    #[track_caller]
    pub fn error(&self, message: impl Display) {
        self.log(Severity::Error, CallerLocation::caller(), format_args!("{message}"));
    }

    /// Logs preformatted arguments at `ERROR`; see [`error_log!`](crate::error_log).
    #[track_caller]
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Error, CallerLocation::caller(), args);
    }

    /// Logs `message` at `FATAL`, then runs the exit action.
    #[track_caller]
    pub fn fatal(&self, message: impl Display) {
        self.log(Severity::Fatal, CallerLocation::caller(), format_args!("{message}"));
    }

    /// Logs preformatted arguments at `FATAL`, then runs the exit action; see
    /// [`fatal_log!`](crate::fatal_log).
    #[track_caller]
    pub fn fatalf(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Fatal, CallerLocation::caller(), args);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LoggerConfig::default())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock();
        f.debug_struct("Logger")
            .field("minimum", &state.minimum)
            .field("sink", &state.sink)
            .field("exit_action", &state.exit_action)
            .finish()
    }
}
