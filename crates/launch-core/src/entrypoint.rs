//! Scripts shipped with the academy deployment.
//!
//! Knowing which script was selected lets the launch log say whether a
//! long-running service or a one-shot job is starting. The catalog never
//! gates the launch: unknown scripts run all the same.

use std::ffi::OsStr;
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntrypointKind {
    /// Long-polling Telegram bot.
    Bot,
    /// HTTP API.
    WebApi,
    /// Runs once and exits; scheduled externally.
    Job,
}

impl EntrypointKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntrypointKind::Bot => "bot",
            EntrypointKind::WebApi => "web_api",
            EntrypointKind::Job => "job",
        }
    }

    pub fn is_long_running(&self) -> bool {
        !matches!(self, EntrypointKind::Job)
    }
}

impl fmt::Display for EntrypointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entrypoint {
    AcademyBot,
    LearningBot,
    WebAuth,
    AnalyzeChats,
    SendReports,
    SendWeeklyReport,
    SendObuchenie,
}

impl Entrypoint {
    pub const ALL: [Entrypoint; 7] = [
        Entrypoint::AcademyBot,
        Entrypoint::LearningBot,
        Entrypoint::WebAuth,
        Entrypoint::AnalyzeChats,
        Entrypoint::SendReports,
        Entrypoint::SendWeeklyReport,
        Entrypoint::SendObuchenie,
    ];

    pub fn script(&self) -> &'static str {
        match self {
            Entrypoint::AcademyBot => "academy_bot.py",
            Entrypoint::LearningBot => "learning_bot.py",
            Entrypoint::WebAuth => "web_auth.py",
            Entrypoint::AnalyzeChats => "analyze_chats.py",
            Entrypoint::SendReports => "send_reports.py",
            Entrypoint::SendWeeklyReport => "send_weekly_report.py",
            Entrypoint::SendObuchenie => "send_obuchenie.py",
        }
    }

    pub fn kind(&self) -> EntrypointKind {
        match self {
            Entrypoint::AcademyBot | Entrypoint::LearningBot => EntrypointKind::Bot,
            Entrypoint::WebAuth => EntrypointKind::WebApi,
            Entrypoint::AnalyzeChats
            | Entrypoint::SendReports
            | Entrypoint::SendWeeklyReport
            | Entrypoint::SendObuchenie => EntrypointKind::Job,
        }
    }

    /// Match a resolved script on its file name, so `./academy_bot.py` and
    /// `/app/academy_bot.py` both map to [`Entrypoint::AcademyBot`].
    pub fn from_script(script: &OsStr) -> Option<Self> {
        let name = Path::new(script).file_name()?;
        Self::ALL.into_iter().find(|e| name == e.script())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_SCRIPT;

    #[test]
    fn default_script_is_the_academy_bot() {
        assert_eq!(
            Entrypoint::from_script(OsStr::new(DEFAULT_SCRIPT)),
            Some(Entrypoint::AcademyBot)
        );
        assert_eq!(Entrypoint::AcademyBot.kind(), EntrypointKind::Bot);
    }

    #[test]
    fn every_entry_round_trips_through_its_script_name() {
        for entry in Entrypoint::ALL {
            assert_eq!(Entrypoint::from_script(OsStr::new(entry.script())), Some(entry));
        }
    }

    #[test]
    fn directories_are_ignored_when_matching() {
        assert_eq!(
            Entrypoint::from_script(OsStr::new("/app/send_reports.py")),
            Some(Entrypoint::SendReports)
        );
        assert_eq!(
            Entrypoint::from_script(OsStr::new("./web_auth.py")),
            Some(Entrypoint::WebAuth)
        );
    }

    #[test]
    fn unknown_and_degenerate_names_are_none() {
        assert_eq!(Entrypoint::from_script(OsStr::new("worker.py")), None);
        assert_eq!(Entrypoint::from_script(OsStr::new("academy_bot")), None);
        assert_eq!(Entrypoint::from_script(OsStr::new("")), None);
        assert_eq!(Entrypoint::from_script(OsStr::new("..")), None);
    }

    #[test]
    fn only_jobs_are_short_lived() {
        assert!(EntrypointKind::Bot.is_long_running());
        assert!(EntrypointKind::WebApi.is_long_running());
        assert!(!EntrypointKind::Job.is_long_running());
        assert_eq!(Entrypoint::SendObuchenie.kind().to_string(), "job");
    }
}
