pub mod config;
pub mod entrypoint;
pub mod error;
pub mod interpreter;
pub mod launcher;

pub use config::{LaunchConfig, DEFAULT_INTERPRETER, DEFAULT_SCRIPT, RUN_SCRIPT_VAR};
pub use entrypoint::{Entrypoint, EntrypointKind};
pub use error::{LaunchError, Result};
pub use launcher::Launcher;
