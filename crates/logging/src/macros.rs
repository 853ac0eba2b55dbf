//! crates/logging/src/macros.rs
//! Format-string emission macros.
//!
//! Each macro accepts `format_args!` syntax and logs through the process-wide
//! logger, or through an explicit [`Logger`](crate::Logger) when the first
//! argument is `logger: <expr>`. The recorded location is the macro call site.

/// Log a formatted message at `DEBUG`.
///
/// # Example
/// ```ignore
/// debug_log!("cache hit for {key}");
/// debug_log!(logger: &worker_logger, "queue depth {}", depth);
/// ```
#[macro_export]
macro_rules! debug_log {
    (logger: $logger:expr, $($arg:tt)+) => {
        $logger.debugf(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::debugf(::std::format_args!($($arg)+))
    };
}

/// Log a formatted message at `INFO`.
///
/// # Example
/// ```ignore
/// info_log!("listening on {}", addr);
/// ```
#[macro_export]
macro_rules! info_log {
    (logger: $logger:expr, $($arg:tt)+) => {
        $logger.infof(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::infof(::std::format_args!($($arg)+))
    };
}

/// Log a formatted message at `ERROR`.
///
/// # Example
/// ```ignore
/// error_log!("request {} failed: {err}", id);
/// ```
#[macro_export]
macro_rules! error_log {
    (logger: $logger:expr, $($arg:tt)+) => {
        $logger.errorf(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::errorf(::std::format_args!($($arg)+))
    };
}

/// Log a formatted message at `FATAL`, then run the exit action.
///
/// # Example
/// ```ignore
/// fatal_log!("cannot bind {}: {err}", addr);
/// ```
#[macro_export]
macro_rules! fatal_log {
    (logger: $logger:expr, $($arg:tt)+) => {
        $logger.fatalf(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::fatalf(::std::format_args!($($arg)+))
    };
}

#[cfg(test)]
mod tests {
    use crate::{ExitAction, Logger, LoggerConfig, Severity};
    use logging_sink::{CaptureBuffer, Sink};

    fn capturing() -> (Logger, CaptureBuffer) {
        let capture = CaptureBuffer::new();
        let logger = Logger::new(
            LoggerConfig::new()
                .with_severity(Severity::Debug)
                .with_sink(Sink::new(capture.clone()))
                .with_exit_action(ExitAction::noop()),
        );
        (logger, capture)
    }

    #[test]
    fn explicit_logger_form_formats_arguments() {
        let (logger, capture) = capturing();
        let name = "disk";

        debug_log!(logger: logger, "probe {name}");
        info_log!(logger: &logger, "{} ready", name);
        error_log!(logger: logger, "{name} at {}%", 97);
        fatal_log!(logger: logger, "{name} gone");

        let contents = capture.contents();
        let messages: Vec<_> = contents
            .lines()
            .map(|line| line.splitn(5, ' ').nth(4).unwrap_or_default())
            .collect();
        assert_eq!(messages, ["probe disk", "disk ready", "disk at 97%", "disk gone"]);
    }

    #[test]
    fn location_is_the_macro_call_site() {
        let (logger, capture) = capturing();
        let line = line!() + 1;
        info_log!(logger: logger, "where");
        assert!(capture.contents().contains(&format!("macros.rs:{line}: where")));
    }
}
