//! crates/logging/src/severity.rs
//! Ordered severity levels and their textual forms.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Importance of a log message.
///
/// Variants are ordered by increasing verbosity: `Fatal < Error < Info < Debug`.
/// A configured minimum admits every message whose severity compares less than
/// or equal to it, so `Fatal` always passes and `Debug` passes only when the
/// minimum is `Debug`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
#[repr(u8)]
pub enum Severity {
    /// Unrecoverable failure; the exit action runs after the line is written.
    Fatal = 0,
    /// Failure the caller recovers from.
    Error = 1,
    /// Normal operational messages.
    #[default]
    Info = 2,
    /// Diagnostic detail.
    Debug = 3,
}

impl Severity {
    /// Every severity, most severe first.
    pub const ALL: [Self; 4] = [Self::Fatal, Self::Error, Self::Info, Self::Debug];

    /// Parses a severity name, ignoring ASCII case.
    pub fn parse(text: &str) -> Result<Self, ParseSeverityError> {
        Self::ALL
            .into_iter()
            .find(|severity| severity.as_str().eq_ignore_ascii_case(text))
            .ok_or_else(|| ParseSeverityError::new(text))
    }

    /// Returns the upper-case name used in rendered lines.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fatal => "FATAL",
            Self::Error => "ERROR",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
        }
    }

    /// Returns the numeric encoding (`Fatal = 0` through `Debug = 3`).
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Decodes a numeric encoding produced by [`as_u8`](Self::as_u8).
    #[must_use]
    pub const fn from_u8(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Fatal),
            1 => Some(Self::Error),
            2 => Some(Self::Info),
            3 => Some(Self::Debug),
            _ => None,
        }
    }

    /// Reports whether a message at `message` severity passes when `self` is the minimum.
    #[inline]
    #[must_use]
    pub fn allows(self, message: Self) -> bool {
        message <= self
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<u8> for Severity {
    type Error = u8;

    fn try_from(raw: u8) -> Result<Self, u8> {
        Self::from_u8(raw).ok_or(raw)
    }
}

/// Renders a raw severity encoding, falling back to `"unknown"` outside the known set.
#[must_use]
pub const fn severity_name(raw: u8) -> &'static str {
    match Severity::from_u8(raw) {
        Some(severity) => severity.as_str(),
        None => "unknown",
    }
}

/// Error returned when text does not name a severity.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("not a valid level: {text:?}")]
pub struct ParseSeverityError {
    text: String,
}

impl ParseSeverityError {
    pub(crate) fn new(text: &str) -> Self {
        Self {
            text: text.to_owned(),
        }
    }

    /// Returns the rejected input.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}
