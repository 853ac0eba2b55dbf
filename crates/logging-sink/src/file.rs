//! crates/logging-sink/src/file.rs
//! Opening log files for appending.

use std::fs::{File, OpenOptions};
use std::path::Path;

use crate::SinkError;

/// Permission bits applied when a log file is created on Unix.
pub const LOG_FILE_MODE: u32 = 0o660;

/// Opens `path` for appending, creating it when missing.
///
/// New files receive [`LOG_FILE_MODE`] on Unix (subject to the process umask).
/// Existing files keep their permissions and contents; every write lands at
/// the end of the file.
pub fn open_log_file(path: impl AsRef<Path>) -> Result<File, SinkError> {
    let path = path.as_ref();
    let mut options = OpenOptions::new();
    options.read(true).append(true).create(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(LOG_FILE_MODE);
    }

    options.open(path).map_err(|e| SinkError::open(path, e))
}
