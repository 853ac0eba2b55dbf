//! crates/logging/src/format.rs
//! Rendering of a single log line.

use std::fmt::{self, Write as _};

use time::format_description::FormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

use crate::{CallerLocation, Severity};

/// Timestamp layout shared by every emitted line.
pub(crate) const LINE_TIMESTAMP_FORMAT: &[FormatItem<'static>] = format_description!(
    "[year]/[month padding:zero]/[day padding:zero] [hour padding:zero]:[minute padding:zero]:[second padding:zero]"
);

const FALLBACK_TIMESTAMP: &str = "1970/01/01 00:00:00";

/// Renders `[SEVERITY] YYYY/MM/DD HH:MM:SS file:line: message` with a trailing newline.
///
/// A newline already ending `message` is not doubled.
///
/// # Examples
///
/// ```
/// use logging::{CallerLocation, Severity, render_line};
/// use time::macros::datetime;
///
/// let line = render_line(
///     Severity::Info,
///     datetime!(2018-03-07 09:05:01 UTC),
///     CallerLocation::new("src/main.rs", 42),
///     format_args!("listening on {}", 8080),
/// );
/// assert_eq!(line, "[INFO] 2018/03/07 09:05:01 main.rs:42: listening on 8080\n");
/// ```
#[must_use]
pub fn render_line(
    severity: Severity,
    timestamp: OffsetDateTime,
    location: CallerLocation,
    message: fmt::Arguments<'_>,
) -> String {
    let mut line = String::with_capacity(64);
    line.push('[');
    line.push_str(severity.as_str());
    line.push_str("] ");
    line.push_str(&format_timestamp(timestamp));
    // Writing into a String cannot fail.
    let _ = write!(line, " {location}: {message}");
    if !line.ends_with('\n') {
        line.push('\n');
    }
    line
}

/// Formats `timestamp` with [`LINE_TIMESTAMP_FORMAT`].
pub(crate) fn format_timestamp(timestamp: OffsetDateTime) -> String {
    timestamp
        .format(LINE_TIMESTAMP_FORMAT)
        .unwrap_or_else(|_| FALLBACK_TIMESTAMP.to_owned())
}

/// Offset applied to timestamps: the local offset when it can be determined, UTC otherwise.
pub(crate) fn local_offset() -> UtcOffset {
    UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC)
}
