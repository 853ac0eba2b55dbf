//! crates/logging/src/global.rs
//! Process-wide logger and the free functions that forward to it.

use std::fmt::{self, Display};
use std::sync::OnceLock;

use logging_sink::Sink;

use crate::{ExitAction, Logger, LoggerConfig, Severity};

/// Returns the process-wide logger, creating it with defaults on first use.
pub fn global() -> &'static Logger {
    static GLOBAL: OnceLock<Logger> = OnceLock::new();
    GLOBAL.get_or_init(Logger::default)
}

/// Applies `config` to the process-wide logger.
pub fn initialize(config: LoggerConfig) {
    global().reconfigure(config);
}

/// Replaces the process-wide destination.
pub fn set_output(sink: Sink) {
    global().set_output(sink);
}

/// Parses and applies a minimum severity; invalid text is logged at `ERROR` and ignored.
#[track_caller]
pub fn set_level(text: &str) {
    global().set_level(text);
}

/// Sets the process-wide minimum severity.
pub fn set_severity(severity: Severity) {
    global().set_severity(severity);
}

/// Replaces the process-wide fatal exit action.
pub fn set_exit_action(exit_action: ExitAction) {
    global().set_exit_action(exit_action);
}

/// Upper-case name of the process-wide minimum severity.
#[must_use]
pub fn level() -> String {
    global().level()
}

/// Process-wide minimum severity.
#[must_use]
pub fn severity() -> Severity {
    global().severity()
}

/// Handle to the process-wide destination.
#[must_use]
pub fn output() -> Sink {
    global().output()
}

/// Handle to the process-wide fatal exit action.
#[must_use]
pub fn exit_action() -> ExitAction {
    global().exit_action()
}

/// Logs `message` at `DEBUG`.
#[track_caller]
pub fn debug(message: impl Display) {
    global().debug(message);
}

/// Logs preformatted arguments at `DEBUG`.
#[track_caller]
pub fn debugf(args: fmt::Arguments<'_>) {
    global().debugf(args);
}

/// Logs `message` at `INFO`.
#[track_caller]
pub fn info(message: impl Display) {
    global().info(message);
}

/// Logs preformatted arguments at `INFO`.
#[track_caller]
pub fn infof(args: fmt::Arguments<'_>) {
    global().infof(args);
}

/// Logs `message` at `ERROR`.
#[track_caller]
pub fn error(message: impl Display) {
    global().error(message);
}

/// Logs preformatted arguments at `ERROR`.
#[track_caller]
pub fn errorf(args: fmt::Arguments<'_>) {
    global().errorf(args);
}

/// Logs `message` at `FATAL`, then runs the exit action.
#[track_caller]
pub fn fatal(message: impl Display) {
    global().fatal(message);
}

/// Logs preformatted arguments at `FATAL`, then runs the exit action.
#[track_caller]
pub fn fatalf(args: fmt::Arguments<'_>) {
    global().fatalf(args);
}
