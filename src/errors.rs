//! Typed error definitions for organize_scripts.
//! Only preparing the archive directory is fatal; per-candidate failures are
//! reported through [`crate::MoveOutcome::Error`] instead of being raised.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrganizeError {
    #[error("Project root not found: {0}")]
    RootMissing(PathBuf),

    #[error("Archive path exists but is not a directory: {0}")]
    TargetNotDirectory(PathBuf),

    #[error("Failed to create archive directory {path}: {source}")]
    CreateTarget {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid candidate name '{0}': expected a plain file name")]
    InvalidCandidate(String),

    #[error("{0}")]
    MoveFailed(String),
}

impl OrganizeError {
    /// Stable short code for structured logs.
    pub fn code(&self) -> &'static str {
        match self {
            OrganizeError::RootMissing(_) => "root_missing",
            OrganizeError::TargetNotDirectory(_) => "target_not_directory",
            OrganizeError::CreateTarget { .. } => "create_target",
            OrganizeError::InvalidCandidate(_) => "invalid_candidate",
            OrganizeError::MoveFailed(_) => "move_failed",
        }
    }
}
