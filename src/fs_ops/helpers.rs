//! I/O error enrichment.
//!
//! Turns a bare io::Error into "<op> '<path>': <error>; <hint> [os code: N]"
//! so a failed move line tells the user what to fix.
//!
//! Usage:
//!   fs::rename(src, dst).map_err(io_error_with_help("move", src))?;
//!   File::open(p).map_err(io_error_with_help_io("open log file", p))?;

use anyhow::anyhow;
use std::io;
use std::path::Path;

/// Hint for a raw OS error code, if we have one.
fn hint_for_code(code: i32) -> Option<&'static str> {
    #[cfg(unix)]
    {
        match code {
            libc::EACCES | libc::EPERM => {
                Some("permission denied; check ownership and write permissions")
            }
            libc::EXDEV => Some("cross-filesystem; atomic rename not possible"),
            libc::EBUSY => Some("resource busy; is another process using the script?"),
            libc::ENOENT => Some("path not found; verify it exists"),
            libc::EEXIST => Some("already exists; remove the existing entry first"),
            libc::ENOSPC => Some("insufficient space on device"),
            libc::EROFS => Some("read-only filesystem; cannot write here"),
            libc::ELOOP => Some("too many symbolic link levels; possible symlink cycle"),
            libc::ENAMETOOLONG => Some("file name or path too long"),
            libc::EISDIR => Some("is a directory"),
            libc::ENOTDIR => Some("a path component is not a directory"),
            _ => None,
        }
    }
    #[cfg(windows)]
    {
        match code {
            5 => Some("access denied; check permissions"),
            17 => Some("not same device; cross-filesystem move"),
            32 => Some("sharing violation; the script is in use"),
            2 | 3 => Some("path not found; verify it exists"),
            80 | 183 => Some("already exists; remove the existing entry first"),
            112 => Some("insufficient disk space"),
            19 => Some("write protected / read-only media"),
            206 => Some("file name or path too long"),
            _ => None,
        }
    }
    #[cfg(not(any(unix, windows)))]
    {
        let _ = code;
        None
    }
}

fn hint_for_kind(kind: io::ErrorKind) -> Option<&'static str> {
    match kind {
        io::ErrorKind::PermissionDenied => {
            Some("permission denied; check ownership and write permissions")
        }
        io::ErrorKind::NotFound => Some("path not found; verify it exists"),
        io::ErrorKind::AlreadyExists => Some("already exists; remove the existing entry first"),
        io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut => {
            Some("busy/timed out; retry once the other process finishes")
        }
        _ => None,
    }
}

fn build_message(op: &str, path: &Path, e: &io::Error) -> String {
    let mut msg = format!("{} '{}': {}", op, path.display(), e);
    match e.raw_os_error() {
        Some(code) => {
            if let Some(hint) = hint_for_code(code) {
                msg.push_str("; ");
                msg.push_str(hint);
            }
            msg.push_str(&format!(" [os code: {code}]"));
        }
        None => {
            if let Some(hint) = hint_for_kind(e.kind()) {
                msg.push_str("; ");
                msg.push_str(hint);
            }
        }
    }
    msg
}

/// `.map_err` adapter for anyhow code paths.
pub fn io_error_with_help<'a>(
    op: &'a str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> anyhow::Error + 'a {
    move |e: io::Error| anyhow!(build_message(op, path, &e))
}

/// `.map_err` adapter for io::Result code paths; keeps the original ErrorKind.
pub fn io_error_with_help_io<'a>(
    op: &'a str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> io::Error + 'a {
    move |e: io::Error| io::Error::new(e.kind(), build_message(op, path, &e))
}
