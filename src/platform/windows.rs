//! Windows (and other non-Unix) implementations of platform helpers.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;

use crate::fs_ops::io_error_with_help_io;

/// Open the log file for appending (no symlink defense available via std here).
pub fn open_log_file_secure_append(path: &Path) -> io::Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(io_error_with_help_io("open log file", path))
}
