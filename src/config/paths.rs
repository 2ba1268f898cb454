//! Default path helpers and symlink checks.

use dirs::config_dir;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "ORGANIZE_SCRIPTS_CONFIG";

/// Config file location: `$ORGANIZE_SCRIPTS_CONFIG` if set, else
/// `<config_dir>/organize_scripts/config.xml`.
pub fn default_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(p));
    }
    if let Some(mut base) = config_dir() {
        base.push("organize_scripts");
        base.push("config.xml");
        Some(base)
    } else {
        env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join(".config")
                .join("organize_scripts")
                .join("config.xml")
        })
    }
}

/// True if the config location came from the environment.
pub fn config_path_is_explicit() -> bool {
    env::var_os(CONFIG_ENV).is_some_and(|p| !p.is_empty())
}

/// Return true if any existing ancestor of `path` is a symlink.
pub fn path_has_symlink_ancestor(path: &Path) -> io::Result<bool> {
    let mut p = path.parent();
    while let Some(anc) = p {
        if anc.as_os_str().is_empty() {
            break;
        }
        match fs::symlink_metadata(anc) {
            Ok(meta) if meta.file_type().is_symlink() => return Ok(true),
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e),
        }
        p = anc.parent();
    }
    Ok(false)
}
