//! Filesystem operations: relocating legacy scripts into the archive directory.

mod atomic;
mod copy;
mod helpers;
mod meta;
mod organize;
mod outcome;
mod util;

pub use atomic::try_atomic_move;
pub use copy::{copy_then_remove, move_file};
pub use helpers::{io_error_with_help, io_error_with_help_io};
pub use organize::{Relocator, organize};
pub use outcome::{CandidateReport, MoveOutcome, Summary};
pub use util::is_plain_file_name;
