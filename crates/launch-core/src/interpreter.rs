//! `PATH` lookup for the interpreter.
//!
//! Exec performs its own `PATH` search; this lookup only feeds diagnostics
//! and tells "interpreter missing" apart from other exec failures.

use std::ffi::OsStr;
use std::path::PathBuf;

/// Locate `program` on the current `PATH`.
pub fn find_interpreter(program: impl AsRef<OsStr>) -> Option<PathBuf> {
    which::which(program).ok()
}
