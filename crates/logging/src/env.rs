//! crates/logging/src/env.rs
//! Building a logger configuration from `LOGLEVEL` and `LOGFILE`.

use std::fmt;
use std::io;
use std::path::PathBuf;

use logging_sink::{Sink, SinkError, Tee, open_log_file};

use crate::{CallerLocation, Logger, LoggerConfig, Severity, global};

/// Environment variable holding the minimum severity name.
pub const LEVEL_ENV: &str = "LOGLEVEL";

/// Environment variable holding an optional log file path.
pub const FILE_ENV: &str = "LOGFILE";

/// Diagnostic produced while reading the environment, reported once the logger is configured.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BootstrapNotice {
    /// `LOGLEVEL` was set to something that is not a severity name.
    InvalidLevel(String),
    /// `LOGLEVEL` was missing or invalid; explains how to set it.
    LevelHint,
    /// `LOGFILE` was not set; output goes to standard output only.
    NoLogFile,
    /// `LOGFILE` was set; output is mirrored to this file.
    LogFile(PathBuf),
}

impl BootstrapNotice {
    /// Severity the notice is reported at.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        match self {
            Self::InvalidLevel(_) => Severity::Error,
            Self::LevelHint | Self::NoLogFile | Self::LogFile(_) => Severity::Info,
        }
    }
}

impl fmt::Display for BootstrapNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLevel(text) => write!(f, "invalid log level supplied {text:?}"),
            Self::LevelHint => write!(
                f,
                "log level can be set by using env variable {LEVEL_ENV}=DEBUG|INFO|ERROR|FATAL"
            ),
            Self::NoLogFile => write!(f, "{FILE_ENV} not set, logging to stdout only"),
            Self::LogFile(path) => write!(f, "log file set to: {}", path.display()),
        }
    }
}

/// Configuration derived from the environment plus the notices to report.
#[derive(Debug)]
pub struct Bootstrap {
    /// Settings to install.
    pub config: LoggerConfig,
    /// Diagnostics to log after installing [`config`](Self::config).
    pub notices: Vec<BootstrapNotice>,
}

impl Bootstrap {
    /// Installs the configuration on `logger`, then writes each notice and the chosen level.
    ///
    /// The notices bypass the minimum severity, so they appear even when the
    /// installed level is `ERROR` or `FATAL`. Returns the installed minimum
    /// severity.
    #[track_caller]
    pub fn apply(self, logger: &Logger) -> Severity {
        let location = CallerLocation::caller();
        let severity = self.config.severity;
        logger.reconfigure(self.config);

        for notice in &self.notices {
            logger.announce(notice.severity(), location, format_args!("{notice}"));
        }
        logger.announce(
            Severity::Info,
            location,
            format_args!("log level set to: {severity}"),
        );
        severity
    }
}

/// Reads [`LEVEL_ENV`] and [`FILE_ENV`] from the process environment.
pub fn from_env() -> Result<Bootstrap, SinkError> {
    from_lookup(|key| std::env::var(key).ok())
}

/// Builds a configuration from an arbitrary variable lookup.
///
/// Empty values count as unset. An absent or invalid level falls back to
/// `INFO`. A log file path switches the destination from standard output to
/// standard output mirrored into that file; failing to open it is an error.
pub fn from_lookup<F>(mut lookup: F) -> Result<Bootstrap, SinkError>
where
    F: FnMut(&str) -> Option<String>,
{
    let mut notices = Vec::new();

    let level = lookup(LEVEL_ENV).filter(|value| !value.is_empty());
    let sink = match lookup(FILE_ENV).filter(|value| !value.is_empty()) {
        Some(path) => {
            let path = PathBuf::from(path);
            let file = open_log_file(&path)?;
            notices.push(BootstrapNotice::LogFile(path));
            Sink::labelled(Tee::new().with_writer(io::stdout()).with_writer(file), "tee")
        }
        None => {
            notices.push(BootstrapNotice::NoLogFile);
            Sink::stdout()
        }
    };

    // Destination first, then level problems.
    let severity = match level.as_deref().map(Severity::parse) {
        Some(Ok(severity)) => severity,
        Some(Err(err)) => {
            notices.push(BootstrapNotice::InvalidLevel(err.text().to_owned()));
            notices.push(BootstrapNotice::LevelHint);
            Severity::Info
        }
        None => {
            notices.push(BootstrapNotice::LevelHint);
            Severity::Info
        }
    };

    Ok(Bootstrap {
        config: LoggerConfig::new().with_severity(severity).with_sink(sink),
        notices,
    })
}

/// Configures the process-wide logger from the environment.
///
/// Returns the installed minimum severity, or the error raised while opening
/// the log file. The process-wide logger is left untouched on error.
#[track_caller]
pub fn bootstrap() -> Result<Severity, SinkError> {
    Ok(from_env()?.apply(global()))
}
