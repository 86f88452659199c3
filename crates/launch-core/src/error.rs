//! Exec failures and the exit codes they map to.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("failed to write announcement")]
    Announce(#[source] io::Error),

    #[error("{program}: interpreter not found on PATH")]
    InterpreterNotFound { program: String },

    #[error("{program}: permission denied")]
    PermissionDenied {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to exec {program} {script}")]
    Exec {
        program: String,
        script: String,
        #[source]
        source: io::Error,
    },
}

impl LaunchError {
    /// Exit status the launcher reports for this failure.
    ///
    /// Follows the shell convention: 127 when the command cannot be found,
    /// 126 when it was found but could not be executed.
    pub fn exit_code(&self) -> i32 {
        match self {
            LaunchError::Announce(_) => 1,
            LaunchError::InterpreterNotFound { .. } => 127,
            LaunchError::PermissionDenied { .. } => 126,
            LaunchError::Exec { .. } => 126,
        }
    }
}

pub type Result<T> = std::result::Result<T, LaunchError>;
