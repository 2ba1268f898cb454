//! Core configuration types.
//! - Config holds runtime settings; defaults are the built-in project layout.
//! - LogLevel represents verbosity with simple parsing helpers.

use anyhow::{Result, bail};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::fs_ops::is_plain_file_name;
use crate::scripts::{DEFAULT_ROOT, DEFAULT_TARGET_DIR};

/// Program-defined verbosity levels exposed to users/config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Run-level events and warnings (default)
    #[default]
    Normal,
    /// Per-candidate events
    Info,
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" => Some(LogLevel::Normal),
            "info" | "verbose" | "detailed" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// Runtime configuration for a relocation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Project root holding the legacy scripts
    pub root: PathBuf,
    /// Archive subdirectory name, relative to `root`
    pub target_dir: String,
    /// Log verbosity (stderr)
    pub log_level: LogLevel,
    /// Optional path to a log file
    pub log_file: Option<PathBuf>,
    /// If true, report what would happen but do not modify the filesystem
    pub dry_run: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            target_dir: DEFAULT_TARGET_DIR.to_string(),
            log_level: LogLevel::default(),
            log_file: None,
            dry_run: false,
        }
    }
}

impl Config {
    /// Config with an explicit root and archive name; other fields use defaults.
    pub fn new(root: impl Into<PathBuf>, target_dir: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            target_dir: target_dir.into(),
            ..Default::default()
        }
    }

    /// Full archive directory path.
    pub fn target_path(&self) -> PathBuf {
        self.root.join(&self.target_dir)
    }

    /// Reject settings that would move scripts outside `root`.
    ///
    /// Directory existence is checked later, when the archive is prepared.
    pub fn validate(&self) -> Result<()> {
        if self.root.as_os_str().is_empty() {
            bail!("root must not be empty");
        }
        if !is_plain_file_name(&self.target_dir) {
            bail!(
                "target_dir '{}' must be a single directory name inside the root",
                self.target_dir
            );
        }
        Ok(())
    }
}
