//! Moving a single script, with a copy fallback for cross-device archives.
//!
//! `move_file` tries an atomic rename first. Only a cross-device error
//! (EXDEV / ERROR_NOT_SAME_DEVICE) triggers `copy_then_remove`; every other
//! rename error is returned with an actionable hint.

use anyhow::{Result, anyhow};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use super::atomic::try_atomic_move;
use super::helpers::io_error_with_help;
use super::meta::preserve_metadata;
use super::util::{is_cross_device, unique_temp_path};

/// Move `src` to `dest`. `dest` must not exist yet; callers check that.
pub fn move_file(src: &Path, dest: &Path) -> Result<()> {
    match try_atomic_move(src, dest) {
        Ok(()) => {
            debug!(src = %src.display(), dest = %dest.display(), "Renamed atomically");
            Ok(())
        }
        Err(e) if is_cross_device(&e) => {
            warn!(
                src = %src.display(),
                dest = %dest.display(),
                "Archive is on another filesystem; copying instead of renaming"
            );
            copy_then_remove(src, dest)
        }
        Err(e) => Err(io_error_with_help("move", src)(e)),
    }
}

/// Copy `src` into a hidden temp file beside `dest`, carry over timestamps and
/// permissions, rename it into place, then remove `src`.
///
/// On failure nothing is left behind in the destination directory: the temp
/// file is removed, and if the source cannot be removed the finished copy is
/// removed as well so the script exists in exactly one place.
pub fn copy_then_remove(src: &Path, dest: &Path) -> Result<()> {
    let dest_dir = dest
        .parent()
        .ok_or_else(|| anyhow!("destination has no parent: {}", dest.display()))?;
    let name = dest
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "script".to_string());

    let src_meta = fs::metadata(src).map_err(io_error_with_help("inspect source", src))?;
    if !src_meta.is_file() {
        return Err(anyhow!(
            "cannot copy '{}' across filesystems: not a regular file",
            src.display()
        ));
    }

    let tmp = unique_temp_path(dest_dir, &name);
    if let Err(e) = fs::copy(src, &tmp) {
        let _ = fs::remove_file(&tmp);
        return Err(io_error_with_help("copy to temporary file", &tmp)(e));
    }

    if let Err(e) = preserve_metadata(&src_meta, &tmp) {
        // Content is already intact; metadata loss does not fail the move.
        warn!(error = %e, dest = %dest.display(), "Could not preserve metadata");
    }

    if let Err(e) = try_atomic_move(&tmp, dest) {
        let _ = fs::remove_file(&tmp);
        return Err(io_error_with_help("rename temporary file into place", dest)(e));
    }

    if let Err(e) = fs::remove_file(src) {
        let _ = fs::remove_file(dest);
        return Err(io_error_with_help("remove original", src)(e));
    }

    debug!(src = %src.display(), dest = %dest.display(), "Copied and removed source");
    Ok(())
}
