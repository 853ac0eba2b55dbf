//! Integration tests for the rendered line layout.
//!
//! Every line is `[SEVERITY] YYYY/MM/DD HH:MM:SS file:line: message` followed
//! by a single newline, with the caller's file reduced to its final component.

use logging::{CallerLocation, ExitAction, Logger, LoggerConfig, Severity, info_log, render_line};
use logging_sink::{CaptureBuffer, Sink};
use regex::Regex;
use time::macros::datetime;

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

fn line_pattern() -> Regex {
    Regex::new(r"^\[(DEBUG|INFO|ERROR|FATAL)\] \d{4}/\d{2}/\d{2} \d{2}:\d{2}:\d{2} (\S+):(\d+): (.*)$")
        .expect("valid pattern")
}

// ============================================================================
// Layout Tests
// ============================================================================

/// Verifies each emitter produces a line matching the documented layout.
#[test]
fn every_emitter_matches_layout() {
    let (logger, capture) = capturing();
    logger.debug("one");
    logger.info("two");
    logger.error("three");
    logger.fatal("four");

    let pattern = line_pattern();
    let contents = capture.contents();
    let mut messages = Vec::new();
    for line in contents.lines() {
        let captures = pattern.captures(line).expect("line matches layout");
        assert_eq!(&captures[2], "line_format.rs");
        messages.push(captures[4].to_owned());
    }
    assert_eq!(messages, ["one", "two", "three", "four"]);
}

/// Verifies the recorded line number is the call site.
#[test]
fn line_number_is_call_site() {
    let (logger, capture) = capturing();
    let expected = line!() + 1;
    logger.error("located");

    let contents = capture.contents();
    let captures = line_pattern()
        .captures(contents.trim_end())
        .expect("line matches layout");
    assert_eq!(captures[3].parse::<u32>().expect("number"), expected);
}

/// Verifies formatted emitters and macros substitute their arguments.
#[test]
fn formatted_variants_substitute_arguments() {
    let (logger, capture) = capturing();
    logger.infof(format_args!("{} of {}", 3, 7));
    info_log!(logger: logger, "{:>4}|", "ab");
    assert!(capture.contents().contains(": 3 of 7\n"));
    assert!(capture.contents().contains(":   ab|\n"));
}

/// Verifies a message ending in a newline is not given a second one.
#[test]
fn trailing_newline_is_not_doubled() {
    let (logger, capture) = capturing();
    logger.info("already terminated\n");
    logger.info("");
    let contents = capture.contents();
    assert_eq!(contents.lines().count(), 2);
    assert!(contents.ends_with(": \n"));
    assert!(!contents.contains("\n\n"));
}

/// Verifies embedded newlines are written as-is.
#[test]
fn embedded_newlines_are_preserved() {
    let (logger, capture) = capturing();
    logger.error("first\nsecond");
    assert!(capture.contents().ends_with(": first\nsecond\n"));
}

/// Verifies a fixed timestamp renders zero-padded.
#[test]
fn fixed_timestamp_is_zero_padded() {
    let line = render_line(
        Severity::Fatal,
        datetime!(2009-01-02 03:04:05 UTC),
        CallerLocation::new("/srv/app/src/worker.rs", 7),
        format_args!("bye"),
    );
    assert_eq!(line, "[FATAL] 2009/01/02 03:04:05 worker.rs:7: bye\n");
}

/// Verifies Windows-style paths are shortened as well.
#[test]
fn backslash_paths_are_shortened() {
    let line = render_line(
        Severity::Debug,
        datetime!(2020-12-31 23:59:59 UTC),
        CallerLocation::new(r"C:\work\src\main.rs", 12),
        format_args!("x"),
    );
    assert_eq!(line, "[DEBUG] 2020/12/31 23:59:59 main.rs:12: x\n");
}

/// Verifies a wrapper annotated with `#[track_caller]` reports its own caller.
#[test]
fn tracked_wrappers_report_their_caller() {
    #[track_caller]
    fn wrapped(logger: &Logger) {
        logger.info("through wrapper");
    }

    let (logger, capture) = capturing();
    let expected = line!() + 1;
    wrapped(&logger);
    assert!(
        capture
            .contents()
            .contains(&format!("line_format.rs:{expected}: through wrapper"))
    );
}
