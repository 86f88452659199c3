//! Launch configuration read from the process environment.
//!
//! There is exactly one knob: `RUN_SCRIPT` names the script handed to the
//! interpreter. A missing or empty value falls back to [`DEFAULT_SCRIPT`],
//! the same result as the shell expansion `${RUN_SCRIPT:-academy_bot.py}`.

use std::ffi::OsString;

/// Environment variable selecting the script to run.
pub const RUN_SCRIPT_VAR: &str = "RUN_SCRIPT";

/// Script used when `RUN_SCRIPT` is unset or empty.
pub const DEFAULT_SCRIPT: &str = "academy_bot.py";

/// Interpreter the script is handed to. Looked up on `PATH` at exec time.
pub const DEFAULT_INTERPRETER: &str = "python";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchConfig {
    pub script: OsString,
    pub interpreter: OsString,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            script: OsString::from(DEFAULT_SCRIPT),
            interpreter: OsString::from(DEFAULT_INTERPRETER),
        }
    }
}

impl LaunchConfig {
    /// Read `RUN_SCRIPT` from the current process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var_os(key))
    }

    /// Build the config through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: FnOnce(&str) -> Option<OsString>,
    {
        Self {
            script: resolve_script(lookup(RUN_SCRIPT_VAR)),
            ..Self::default()
        }
    }
}

/// Apply the default-substitution rule to a raw `RUN_SCRIPT` value.
///
/// The value is otherwise taken verbatim: no trimming, no path or extension
/// checks.
pub fn resolve_script(value: Option<OsString>) -> OsString {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => OsString::from(DEFAULT_SCRIPT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_falls_back_to_default() {
        assert_eq!(resolve_script(None), OsString::from("academy_bot.py"));
    }

    #[test]
    fn empty_falls_back_to_default() {
        assert_eq!(
            resolve_script(Some(OsString::new())),
            OsString::from("academy_bot.py")
        );
    }

    #[test]
    fn non_empty_value_is_taken_verbatim() {
        assert_eq!(
            resolve_script(Some(" worker.py ".into())),
            OsString::from(" worker.py ")
        );
        assert_eq!(
            resolve_script(Some("../jobs/send reports.py".into())),
            OsString::from("../jobs/send reports.py")
        );
    }

    #[test]
    fn from_lookup_reads_run_script_only() {
        let config = LaunchConfig::from_lookup(|key| {
            assert_eq!(key, "RUN_SCRIPT");
            Some("learning_bot.py".into())
        });
        assert_eq!(config.script, OsString::from("learning_bot.py"));
        assert_eq!(config.interpreter, OsString::from("python"));
    }

    #[test]
    fn from_lookup_without_value_uses_defaults() {
        assert_eq!(LaunchConfig::from_lookup(|_| None), LaunchConfig::default());
    }


    #[cfg(unix)]
    #[test]
    fn non_utf8_value_is_preserved() {
        use std::os::unix::ffi::OsStringExt;

        let raw = OsString::from_vec(vec![b'b', 0xff, b'.', b'p', b'y']);
        assert_eq!(resolve_script(Some(raw.clone())), raw);
    }
}
