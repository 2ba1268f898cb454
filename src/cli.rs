//! CLI definition and parsing.
//!
//! Every flag is optional: a bare invocation relocates the built-in script
//! list using the config file (if any) or the built-in project layout.
//! --debug is a shorthand for --log-level debug.

use clap::{Parser, ValueHint};
use std::path::PathBuf;

use crate::config::types::{Config, LogLevel};

/// Move legacy build scripts from the project root into the archive directory.
/// CLI flags override config values (which are loaded from XML if present).
#[derive(Parser, Debug, Clone, Default)]
#[command(
    author,
    version,
    about = "Move legacy build scripts into build-scripts/"
)]
pub struct Args {
    /// Override the project root (must already exist).
    #[arg(long, value_hint = ValueHint::DirPath, help = "Override the project root directory")]
    pub root: Option<PathBuf>,

    /// Override the archive subdirectory name (created inside the root).
    #[arg(long, value_name = "NAME", help = "Archive subdirectory name inside the root")]
    pub target_dir: Option<String>,

    /// Dry-run: report what would be moved without touching the filesystem.
    #[arg(long, help = "Show what would be moved, but do not modify anything")]
    pub dry_run: bool,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(short = 'd', long, help = "Enable debug logging (shorthand for --log-level debug)")]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    /// Append logs to this file in addition to stderr.
    #[arg(long, value_hint = ValueHint::FilePath, help = "Also write logs to this file")]
    pub log_file: Option<PathBuf>,

    /// Emit logs in structured JSON.
    #[arg(long, help = "Emit logs in structured JSON")]
    pub json: bool,

    /// Print where the config file is looked up, then exit.
    #[arg(long, help = "Print the config file location and exit")]
    pub print_config: bool,

    /// Print the built-in script list, then exit.
    #[arg(long, help = "List the scripts this tool relocates and exit")]
    pub list: bool,
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config value).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(root) = &self.root {
            cfg.root = root.clone();
        }
        if let Some(target) = &self.target_dir {
            cfg.target_dir = target.trim().to_string();
        }
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if let Some(lf) = &self.log_file {
            cfg.log_file = Some(lf.clone());
        }
        if self.dry_run {
            cfg.dry_run = true;
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
