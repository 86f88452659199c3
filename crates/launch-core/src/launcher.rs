//! Announce the resolved script and hand the process over to the interpreter.
//!
//! On Unix the hand-off is a real `execvp`: the launcher's image is replaced,
//! signals and the exit status belong to the interpreter from then on. Other
//! targets have no exec, so the interpreter runs as a child with inherited
//! stdio and its exit code is passed back to the caller.

use std::borrow::Cow;
use std::ffi::OsStr;
use std::io::{self, Write};
use std::process::{Command, ExitStatus};

use tracing::{debug, info, Level};

use crate::config::LaunchConfig;
use crate::entrypoint::Entrypoint;
use crate::error::{LaunchError, Result};
use crate::interpreter::find_interpreter;

#[derive(Debug, Clone)]
pub struct Launcher {
    config: LaunchConfig,
}

impl Launcher {
    pub fn new(config: LaunchConfig) -> Self {
        Self { config }
    }

    pub fn from_env() -> Self {
        Self::new(LaunchConfig::from_env())
    }

    pub fn config(&self) -> &LaunchConfig {
        &self.config
    }

    pub fn script_display(&self) -> String {
        self.config.script.to_string_lossy().into_owned()
    }

    fn program_display(&self) -> String {
        self.config.interpreter.to_string_lossy().into_owned()
    }

    /// The announcement without the trailing newline, rendered lossily for
    /// display. [`Launcher::announce`] writes the raw bytes instead.
    pub fn announcement(&self) -> String {
        format!(
            "{ANNOUNCE_PREFIX} {} {}",
            self.program_display(),
            self.script_display()
        )
    }

    /// The exact bytes [`Launcher::announce`] writes, newline included.
    /// On Unix, interpreter and script bytes pass through unchanged.
    pub fn announcement_bytes(&self) -> Vec<u8> {
        let mut line = Vec::with_capacity(64);
        line.extend_from_slice(ANNOUNCE_PREFIX.as_bytes());
        line.push(b' ');
        line.extend_from_slice(&os_bytes(&self.config.interpreter));
        line.push(b' ');
        line.extend_from_slice(&os_bytes(&self.config.script));
        line.push(b'\n');
        line
    }

    /// Write the announcement line and flush, so it survives the exec.
    pub fn announce<W: Write + ?Sized>(&self, out: &mut W) -> Result<()> {
        out.write_all(&self.announcement_bytes())
            .and_then(|()| out.flush())
            .map_err(LaunchError::Announce)
    }

    /// `<interpreter> <script>`, nothing else. Environment, working directory
    /// and stdio are inherited.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(&self.config.interpreter);
        cmd.arg(&self.config.script);
        cmd
    }

    /// Announce, then hand off.
    ///
    /// On Unix this only returns on failure. `Ok(code)` is reachable only on
    /// targets without exec, where it carries the child's exit code.
    pub fn run<W: Write + ?Sized>(&self, out: &mut W) -> Result<i32> {
        self.log_launch();
        self.announce(out)?;
        self.hand_off()
    }

    #[cfg(unix)]
    fn hand_off(&self) -> Result<i32> {
        Err(self.exec())
    }

    #[cfg(not(unix))]
    fn hand_off(&self) -> Result<i32> {
        self.spawn_and_wait()
    }

    /// Replace the current process with the interpreter. Returns only if the
    /// exec itself failed.
    #[cfg(unix)]
    pub fn exec(&self) -> LaunchError {
        use std::os::unix::process::CommandExt;

        let err = self.command().exec();
        self.classify(err)
    }

    /// Run the interpreter as a child and wait for it.
    pub fn spawn_and_wait(&self) -> Result<i32> {
        let status = self.command().status().map_err(|e| self.classify(e))?;
        Ok(status_code(status))
    }

    fn classify(&self, source: io::Error) -> LaunchError {
        let program = self.program_display();
        match source.kind() {
            io::ErrorKind::NotFound if find_interpreter(&self.config.interpreter).is_none() => {
                LaunchError::InterpreterNotFound { program }
            }
            io::ErrorKind::PermissionDenied => LaunchError::PermissionDenied { program, source },
            _ => LaunchError::Exec {
                program,
                script: self.script_display(),
                source,
            },
        }
    }

    fn log_launch(&self) {
        let script = self.script_display();
        match Entrypoint::from_script(&self.config.script) {
            Some(entry) => {
                let kind = entry.kind();
                info!(
                    %script,
                    %kind,
                    long_running = kind.is_long_running(),
                    "launching entrypoint"
                )
            }
            None => info!(%script, "script is not in the entrypoint catalog"),
        }
        if !tracing::enabled!(Level::DEBUG) {
            return;
        }
        match find_interpreter(&self.config.interpreter) {
            Some(path) => debug!(interpreter = %path.display(), "resolved interpreter"),
            None => debug!(
                interpreter = %self.program_display(),
                "interpreter not found on PATH"
            ),
        }
    }
}

const ANNOUNCE_PREFIX: &str = "Запускаю:";

#[cfg(unix)]
fn os_bytes(value: &OsStr) -> Cow<'_, [u8]> {
    use std::os::unix::ffi::OsStrExt;

    Cow::Borrowed(value.as_bytes())
}

#[cfg(not(unix))]
fn os_bytes(value: &OsStr) -> Cow<'_, [u8]> {
    Cow::Owned(value.to_string_lossy().into_owned().into_bytes())
}

/// Exit code of a finished child; a signal death maps to `128 + signal`.
fn status_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}
