//! crates/logging/src/location.rs
//! Source location attached to each rendered line.

use std::fmt;
use std::panic::Location;

/// File and line of the code that issued a log call.
///
/// Emission entry points are `#[track_caller]`, so [`CallerLocation::caller`]
/// evaluated inside them resolves to the immediate caller. Code that learns
/// its location some other way (for example the `tracing` bridge, which reads
/// event metadata) builds one with [`CallerLocation::new`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CallerLocation {
    file: &'static str,
    line: u32,
}

impl CallerLocation {
    /// Creates a location from explicit parts.
    #[must_use]
    pub const fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    /// Resolves the location of the caller of the enclosing `#[track_caller]` chain.
    #[track_caller]
    #[must_use]
    pub fn caller() -> Self {
        Self::from(Location::caller())
    }

    /// Full path as recorded by the compiler.
    #[must_use]
    pub const fn file(&self) -> &'static str {
        self.file
    }

    /// Line number, starting at 1.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Final path component, accepting both `/` and `\` separators.
    #[must_use]
    pub fn short_file(&self) -> &'static str {
        self.file
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(self.file)
    }
}

impl From<&'static Location<'static>> for CallerLocation {
    fn from(location: &'static Location<'static>) -> Self {
        Self::new(location.file(), location.line())
    }
}

impl fmt::Display for CallerLocation {
    /// Renders `short_file:line`, the form used in log lines.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.short_file(), self.line)
    }
}
