//! The relocation loop.
//!
//! For each candidate, in order:
//! - already in the archive directory -> `AlreadyAtDestination` (source untouched)
//! - present in the root             -> move it; `Moved` or `Error`
//! - otherwise                       -> `NotFound`
//!
//! Only preparing the archive directory can fail the whole run; everything
//! after that is recorded per candidate and the loop always finishes.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::errors::OrganizeError;

use super::copy::move_file;
use super::helpers::io_error_with_help;
use super::outcome::{CandidateReport, MoveOutcome, Summary};
use super::util::{entry_exists, is_plain_file_name};

#[derive(Debug, Clone)]
pub struct Relocator {
    root: PathBuf,
    target_dir: PathBuf,
    dry_run: bool,
}

impl Relocator {
    /// Relocator moving files from `root` into `root/target_subdir`.
    pub fn new(root: impl Into<PathBuf>, target_subdir: impl AsRef<Path>) -> Self {
        let root = root.into();
        let target_dir = root.join(target_subdir);
        Self {
            root,
            target_dir,
            dry_run: false,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self {
            root: cfg.root.clone(),
            target_dir: cfg.target_path(),
            dry_run: cfg.dry_run,
        }
    }

    /// In dry-run mode nothing on disk changes; would-be moves report `Moved`.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Ensure the archive directory exists. Returns true if it was created.
    ///
    /// The root itself is never created.
    pub fn prepare(&self) -> Result<bool, OrganizeError> {
        if !self.root.is_dir() {
            return Err(OrganizeError::RootMissing(self.root.clone()));
        }

        match fs::metadata(&self.target_dir) {
            Ok(meta) if meta.is_dir() => {
                debug!(target_dir = %self.target_dir.display(), "Archive directory present");
                return Ok(false);
            }
            Ok(_) => return Err(OrganizeError::TargetNotDirectory(self.target_dir.clone())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => {
                return Err(OrganizeError::CreateTarget {
                    path: self.target_dir.clone(),
                    source: e,
                });
            }
        }

        if self.dry_run {
            info!(target_dir = %self.target_dir.display(), "dry-run: would create archive directory");
            return Ok(false);
        }

        match fs::create_dir(&self.target_dir) {
            Ok(()) => {
                info!(target_dir = %self.target_dir.display(), "Created archive directory");
                Ok(true)
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists && self.target_dir.is_dir() => {
                Ok(false)
            }
            Err(source) => Err(OrganizeError::CreateTarget {
                path: self.target_dir.clone(),
                source,
            }),
        }
    }

    /// Classify one candidate, moving it if needed.
    pub fn relocate(&self, name: &str) -> MoveOutcome {
        if !is_plain_file_name(name) {
            let err = OrganizeError::InvalidCandidate(name.to_string());
            warn!(candidate = name, code = err.code(), "Skipping invalid candidate");
            return MoveOutcome::Error(err.to_string());
        }

        let src = self.root.join(name);
        let dest = self.target_dir.join(name);

        match entry_exists(&dest) {
            Ok(true) => return MoveOutcome::AlreadyAtDestination,
            Ok(false) => {}
            Err(e) => {
                let msg = io_error_with_help("inspect destination", &dest)(e).to_string();
                warn!(candidate = name, error = %msg, "Cannot inspect destination");
                return MoveOutcome::Error(msg);
            }
        }

        match entry_exists(&src) {
            Ok(true) => {}
            Ok(false) => return MoveOutcome::NotFound,
            Err(e) => {
                let msg = io_error_with_help("inspect source", &src)(e).to_string();
                warn!(candidate = name, error = %msg, "Cannot inspect source");
                return MoveOutcome::Error(msg);
            }
        }

        if self.dry_run {
            info!(src = %src.display(), dest = %dest.display(), "dry-run: would move");
            return MoveOutcome::Moved;
        }

        match move_file(&src, &dest) {
            Ok(()) => MoveOutcome::Moved,
            Err(e) => {
                let err = OrganizeError::MoveFailed(format!("{e:#}"));
                warn!(candidate = name, code = err.code(), error = %err, "Move failed");
                MoveOutcome::Error(err.to_string())
            }
        }
    }

    /// Run every candidate through [`Relocator::relocate`], calling `on_report`
    /// as each one finishes. Assumes [`Relocator::prepare`] already ran.
    pub fn process<S, F>(&self, candidates: &[S], mut on_report: F) -> Summary
    where
        S: AsRef<str>,
        F: FnMut(&CandidateReport),
    {
        let mut summary = Summary::default();
        for candidate in candidates {
            let name = candidate.as_ref();
            let outcome = self.relocate(name);
            debug!(candidate = name, outcome = outcome.kind(), "Candidate processed");
            let report = CandidateReport {
                name: name.to_string(),
                outcome,
            };
            on_report(&report);
            summary.record(report);
        }
        info!(
            moved = summary.moved,
            already_organized = summary.already_organized,
            not_found = summary.not_found,
            failed = summary.failed,
            "Relocation finished"
        );
        summary
    }

    /// Prepare the archive directory and process all candidates.
    pub fn organize<S: AsRef<str>>(&self, candidates: &[S]) -> Result<Summary, OrganizeError> {
        self.prepare()?;
        Ok(self.process(candidates, |_| {}))
    }
}

/// Move every candidate from `root` into `root/target_subdir`.
pub fn organize<S: AsRef<str>>(
    root: impl Into<PathBuf>,
    target_subdir: impl AsRef<Path>,
    candidates: &[S],
) -> Result<Summary, OrganizeError> {
    Relocator::new(root, target_subdir).organize(candidates)
}
