//! crates/logging-sink/src/error.rs
//! Error types for log destinations.

use std::io;
use std::path::PathBuf;

/// Error raised while preparing a log destination.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// The log file could not be opened or created.
    #[error("cannot create log file {}: {source}", path.display())]
    Open {
        /// The path that failed to open.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl SinkError {
    /// Creates an open error with path context.
    pub fn open(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }

    /// Returns the path associated with the error.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Open { path, .. } => path,
        }
    }
}
