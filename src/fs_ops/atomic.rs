//! Atomic rename helper.
//! Returns the raw io::Error so callers can tell a cross-device link from a
//! real failure. On Unix the destination directory is fsynced (best-effort).

use std::fs;
use std::io;
use std::path::Path;

pub fn try_atomic_move(src: &Path, dst: &Path) -> io::Result<()> {
    fs::rename(src, dst)?;

    #[cfg(unix)]
    if let Some(parent) = dst.parent() {
        // A failed fsync must not turn a completed rename into an error.
        let _ = super::util::fsync_dir(parent);
    }

    Ok(())
}
