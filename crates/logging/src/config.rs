//! crates/logging/src/config.rs
//! Settings applied to a logger as a unit.

use logging_sink::Sink;

use crate::{ExitAction, Severity};

/// Minimum severity, destination, and fatal exit action for a [`Logger`](crate::Logger).
///
/// The default matches a freshly started process: `INFO`, standard error, and
/// process termination on fatal messages.
///
/// # Examples
///
/// ```
/// use logging::{ExitAction, Logger, LoggerConfig, Severity};
/// use logging_sink::{CaptureBuffer, Sink};
///
/// let capture = CaptureBuffer::new();
/// let config = LoggerConfig::new()
///     .with_severity(Severity::Debug)
///     .with_sink(Sink::new(capture.clone()))
///     .with_exit_action(ExitAction::noop());
///
/// let logger = Logger::new(config);
/// logger.debug("visible");
/// assert!(capture.contents().contains("[DEBUG]"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LoggerConfig {
    /// Least severe level that is still written.
    pub severity: Severity,
    /// Destination for rendered lines.
    pub sink: Sink,
    /// Action run after each fatal message.
    pub exit_action: ExitAction,
}

impl LoggerConfig {
    /// Returns the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the minimum severity.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Sets the destination.
    pub fn with_sink(mut self, sink: Sink) -> Self {
        self.sink = sink;
        self
    }

    /// Sets the fatal exit action.
    pub fn with_exit_action(mut self, exit_action: ExitAction) -> Self {
        self.exit_action = exit_action;
        self
    }
}
