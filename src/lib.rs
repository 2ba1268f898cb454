//! Core library for `organize_scripts`.
//!
//! Moves a fixed list of legacy shell scripts from a project root into an
//! archive subdirectory and reports what happened to each one.
//! The binary only wires CLI, config and logging around [`organize`].

pub mod cli;
pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod output;
pub mod platform;
pub mod scripts;

pub use config::{
    Config, LogLevel, default_config_path, load_config, load_config_from_xml_path,
    path_has_symlink_ancestor,
};
pub use errors::OrganizeError;
pub use fs_ops::{
    CandidateReport, MoveOutcome, Relocator, Summary, io_error_with_help, io_error_with_help_io,
    organize,
};
pub use scripts::{DEFAULT_ROOT, DEFAULT_TARGET_DIR, LEGACY_SCRIPTS};
