//! Timestamp and permission carry-over for the copy fallback.
//! A rename keeps metadata for free; a copy only keeps the mode bits, so
//! access/modification times are restored here.

use anyhow::{Context, Result};
use filetime::{FileTime, set_file_times};
use std::fs;
use std::path::Path;

pub(super) fn preserve_metadata(src_meta: &fs::Metadata, dest: &Path) -> Result<()> {
    let mtime = FileTime::from_last_modification_time(src_meta);
    let atime = FileTime::from_last_access_time(src_meta);
    set_file_times(dest, atime, mtime)
        .with_context(|| format!("restore timestamps on {}", dest.display()))?;

    fs::set_permissions(dest, src_meta.permissions())
        .with_context(|| format!("restore permissions on {}", dest.display()))?;
    Ok(())
}
