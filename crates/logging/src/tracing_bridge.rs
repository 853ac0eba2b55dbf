//! crates/logging/src/tracing_bridge.rs
//! Bridge between the tracing crate and the leveled logger.
//!
//! This module provides a tracing subscriber layer that renders tracing events
//! through a [`Logger`], so libraries instrumented with `tracing` produce the
//! same `[SEVERITY] date time file:line: message` lines as direct calls.
//!
//! # Architecture
//!
//! - [`SeverityLayer`]: a tracing-subscriber layer that maps each event's level
//!   to a [`Severity`] and forwards it to the process-wide logger or to an
//!   explicitly supplied one.
//! - `ERROR` and `WARN` map to [`Severity::Error`], `INFO` to
//!   [`Severity::Info`], `DEBUG` and `TRACE` to [`Severity::Debug`]. Tracing
//!   events never map to [`Severity::Fatal`], so the exit action is never run
//!   from here.
//! - The event's `message` field becomes the line text; other fields follow as
//!   `key=value` pairs. The event's file and line become the caller location.
//!
//! # Usage
//!
//! ```rust,ignore
//! use logging::init_tracing;
//!
//! init_tracing().expect("no other subscriber installed");
//! tracing::info!(port = 8080, "listening");
//! // [INFO] 2024/05/01 10:00:00 main.rs:4: listening port=8080
//! ```

use std::fmt::{self, Write as _};
use std::sync::Arc;

use tracing::field::{Field, Visit};
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::TryInitError;

use crate::{CallerLocation, Logger, Severity, global};

/// A tracing layer that writes events through a [`Logger`].
#[derive(Clone, Debug, Default)]
pub struct SeverityLayer {
    /// Target logger; `None` selects the process-wide logger.
    logger: Option<Arc<Logger>>,
}

impl SeverityLayer {
    /// Creates a layer forwarding to the process-wide logger.
    #[must_use]
    pub const fn new() -> Self {
        Self { logger: None }
    }

    /// Creates a layer forwarding to `logger`.
    #[must_use]
    pub const fn with_logger(logger: Arc<Logger>) -> Self {
        Self {
            logger: Some(logger),
        }
    }

    fn logger(&self) -> &Logger {
        match &self.logger {
            Some(logger) => logger.as_ref(),
            None => global(),
        }
    }

    /// Map a tracing level to a severity.
    const fn level_to_severity(level: &Level) -> Severity {
        match *level {
            Level::ERROR | Level::WARN => Severity::Error,
            Level::INFO => Severity::Info,
            Level::DEBUG | Level::TRACE => Severity::Debug,
        }
    }
}

impl<S> Layer<S> for SeverityLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let severity = Self::level_to_severity(metadata.level());
        let logger = self.logger();
        if !logger.enabled(severity) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let location = match (metadata.file(), metadata.line()) {
            (Some(file), Some(line)) => CallerLocation::new(file, line),
            _ => CallerLocation::new(metadata.target(), 0),
        };
        logger.log(severity, location, format_args!("{}", visitor.finish()));
    }
}

/// Visitor collecting the message and remaining fields of a tracing event.
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl MessageVisitor {
    fn finish(self) -> String {
        if self.message.is_empty() {
            self.fields.trim_start().to_owned()
        } else {
            self.message + &self.fields
        }
    }
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            let _ = write!(self.fields, " {}={value:?}", field.name());
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_owned();
        } else {
            let _ = write!(self.fields, " {}={value}", field.name());
        }
    }
}

/// Installs [`SeverityLayer`] over the process-wide logger as the global default subscriber.
///
/// # Example
///
/// ```rust,ignore
/// logging::init_tracing()?;
/// tracing::error!(code = 23, "partial transfer");
/// ```
pub fn init_tracing() -> Result<(), TryInitError> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(SeverityLayer::new())
        .try_init()
}

/// Installs [`SeverityLayer`] behind an additional filter layer.
///
/// The filter runs first, so events it rejects never reach the logger even if
/// the logger's minimum severity would admit them.
///
/// # Example
///
/// ```rust,ignore
/// use tracing_subscriber::EnvFilter;
///
/// logging::init_tracing_with_filter(EnvFilter::from_default_env())?;
/// ```
pub fn init_tracing_with_filter<F>(filter: F) -> Result<(), TryInitError>
where
    F: Layer<tracing_subscriber::Registry> + Send + Sync + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(filter)
        .with(SeverityLayer::new())
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ExitAction, LoggerConfig};
    use logging_sink::{CaptureBuffer, Sink};
    use tracing_subscriber::layer::SubscriberExt;

    fn capturing(severity: Severity) -> (Arc<Logger>, CaptureBuffer) {
        let capture = CaptureBuffer::new();
        let logger = Arc::new(Logger::new(
            LoggerConfig::new()
                .with_severity(severity)
                .with_sink(Sink::new(capture.clone()))
                .with_exit_action(ExitAction::noop()),
        ));
        (logger, capture)
    }

    fn with_layer(logger: &Arc<Logger>, body: impl FnOnce()) {
        let subscriber =
            tracing_subscriber::registry().with(SeverityLayer::with_logger(Arc::clone(logger)));
        tracing::subscriber::with_default(subscriber, body);
    }

    #[test]
    fn test_level_to_severity() {
        assert_eq!(SeverityLayer::level_to_severity(&Level::ERROR), Severity::Error);
        assert_eq!(SeverityLayer::level_to_severity(&Level::WARN), Severity::Error);
        assert_eq!(SeverityLayer::level_to_severity(&Level::INFO), Severity::Info);
        assert_eq!(SeverityLayer::level_to_severity(&Level::DEBUG), Severity::Debug);
        assert_eq!(SeverityLayer::level_to_severity(&Level::TRACE), Severity::Debug);
    }

    #[test]
    fn events_are_rendered_as_log_lines() {
        let (logger, capture) = capturing(Severity::Info);
        let line = line!() + 1;
        with_layer(&logger, || tracing::info!("bridge ready"));

        let contents = capture.contents();
        assert!(contents.starts_with("[INFO] "));
        assert!(contents.ends_with(&format!("tracing_bridge.rs:{line}: bridge ready\n")));
    }

    #[test]
    fn fields_follow_the_message() {
        let (logger, capture) = capturing(Severity::Info);
        with_layer(&logger, || tracing::warn!(code = 23, path = "a/b", "partial"));

        let contents = capture.contents();
        assert!(contents.starts_with("[ERROR] "));
        assert!(contents.ends_with(": partial code=23 path=a/b\n"));
    }

    #[test]
    fn events_below_the_minimum_are_dropped() {
        let (logger, capture) = capturing(Severity::Error);
        with_layer(&logger, || {
            tracing::debug!("noise");
            tracing::info!("chatter");
            tracing::error!("kept");
        });

        let contents = capture.contents();
        assert_eq!(contents.lines().count(), 1);
        assert!(contents.contains("kept"));
    }

    #[test]
    fn message_less_events_use_fields_only() {
        let (logger, capture) = capturing(Severity::Debug);
        with_layer(&logger, || tracing::trace!(attempt = 3));
        assert!(capture.contents().ends_with(": attempt=3\n"));
    }
}
