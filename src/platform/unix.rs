//! Unix implementations of platform helpers.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
use std::path::Path;

use crate::fs_ops::io_error_with_help_io;

/// Open the log file for appending; a newly created file gets mode 0600.
/// Existing files keep their permissions. The final component must not be a
/// symlink (O_NOFOLLOW).
pub fn open_log_file_secure_append(path: &Path) -> io::Result<File> {
    let existed = path.exists();
    let f = OpenOptions::new()
        .create(true)
        .append(true)
        .mode(0o600)
        .custom_flags(libc::O_NOFOLLOW)
        .open(path)
        .map_err(io_error_with_help_io("open log file", path))?;
    if !existed {
        let _ = fs::set_permissions(path, fs::Permissions::from_mode(0o600));
    }
    Ok(f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_log_file_is_private() {
        let td = tempfile::tempdir().unwrap();
        let path = td.path().join("run.log");
        open_log_file_secure_append(&path).unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o600);
    }

    #[test]
    fn symlinked_log_file_is_refused_with_context() {
        let td = tempfile::tempdir().unwrap();
        let real = td.path().join("real.log");
        fs::write(&real, "").unwrap();
        let link = td.path().join("link.log");
        std::os::unix::fs::symlink(&real, &link).unwrap();

        let err = open_log_file_secure_append(&link).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("open log file"), "{msg}");
        assert!(msg.contains("link.log"), "{msg}");
        assert!(msg.contains("[os code:"), "{msg}");
    }
}
