//! Command-line announcers (`notify-send`, `growlnotify`)
//!
//! Thin wrappers: the platform tool does the delivery, we only build its
//! argument list.

use super::announcer::Announcer;
use super::error::AnnounceError;
use super::icon::IconProvider;
use super::snp::ICON_SIZE;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::Arc;
use tracing::{error, info};

/// Which command-line notifier to drive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifierCommand {
    NotifySend,
    GrowlNotify,
}

impl NotifierCommand {
    pub fn program(&self) -> &'static str {
        match self {
            NotifierCommand::NotifySend => "notify-send",
            NotifierCommand::GrowlNotify => "growlnotify",
        }
    }

    /// Argument list for one notification
    pub fn args(&self, title: &str, message: &str, icon: Option<&Path>) -> Vec<String> {
        let mut args = Vec::new();
        match self {
            NotifierCommand::NotifySend => {
                if let Some(icon) = icon {
                    args.push("-i".to_string());
                    args.push(icon.to_string_lossy().into_owned());
                }
                args.push(title.to_string());
                args.push(message.to_string());
            }
            NotifierCommand::GrowlNotify => {
                args.push("-m".to_string());
                args.push(message.to_string());
                if let Some(icon) = icon {
                    args.push("--image".to_string());
                    args.push(icon.to_string_lossy().into_owned());
                }
                args.push(title.to_string());
            }
        }
        args
    }
}

/// Runs a notifier command per announcement
pub struct CommandAnnouncer {
    command: NotifierCommand,
    /// Explicit binary path; looked up on PATH when unset
    program: Option<PathBuf>,
    icons: Arc<dyn IconProvider>,
}

/// `notify-send` announcer (Linux desktops)
pub type NotifySend = CommandAnnouncer;

/// `growlnotify` announcer (macOS)
pub type GrowlNotify = CommandAnnouncer;

impl CommandAnnouncer {
    pub fn new(command: NotifierCommand, icons: Arc<dyn IconProvider>) -> Self {
        Self {
            command,
            program: None,
            icons,
        }
    }

    pub fn notify_send(icons: Arc<dyn IconProvider>) -> Self {
        Self::new(NotifierCommand::NotifySend, icons)
    }

    pub fn growl_notify(icons: Arc<dyn IconProvider>) -> Self {
        Self::new(NotifierCommand::GrowlNotify, icons)
    }

    /// Use this binary instead of searching PATH
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = Some(program.into());
        self
    }

    pub fn command(&self) -> NotifierCommand {
        self.command
    }

    fn locate(&self) -> Result<PathBuf, AnnounceError> {
        let program = self.command.program();
        let found = match &self.program {
            Some(path) if path.is_file() => Ok(path.clone()),
            Some(path) => Err(format!("{} does not exist", path.display())),
            None => which::which(program).map_err(|e| e.to_string()),
        };

        found.map_err(|reason| AnnounceError::Unavailable {
            service: program,
            detail: format!("{} is not installed.", program),
            source: io::Error::new(io::ErrorKind::NotFound, reason),
        })
    }
}

impl Announcer for CommandAnnouncer {
    fn name(&self) -> &str {
        self.command.program()
    }

    fn send(&self, title: &str, message: &str) -> Result<(), AnnounceError> {
        let program = self.locate()?;
        let icon = self.icons.icon(ICON_SIZE, ICON_SIZE);
        let args = self.command.args(title, message, icon.as_deref());

        let output = Command::new(&program)
            .args(&args)
            .output()
            .map_err(AnnounceError::transport)?;

        if output.status.success() {
            info!(announcer = self.name(), title, "Notification sent");
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            error!(announcer = self.name(), error = %stderr, "Notifier command failed");
            Err(AnnounceError::CommandFailed {
                command: program.display().to_string(),
                status: output.status.to_string(),
                stderr,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::announce::icon::NoIcon;

    #[test]
    fn test_notify_send_args() {
        let args = NotifierCommand::NotifySend.args("Build", "done", None);
        assert_eq!(args, vec!["Build", "done"]);

        let args = NotifierCommand::NotifySend.args("Build", "done", Some(Path::new("/i/32.png")));
        assert_eq!(args, vec!["-i", "/i/32.png", "Build", "done"]);
    }

    #[test]
    fn test_growl_notify_args() {
        let args = NotifierCommand::GrowlNotify.args("Build", "done", None);
        assert_eq!(args, vec!["-m", "done", "Build"]);

        let args = NotifierCommand::GrowlNotify.args("Build", "done", Some(Path::new("/i/32.png")));
        assert_eq!(args, vec!["-m", "done", "--image", "/i/32.png", "Build"]);
    }

    #[test]
    fn test_missing_program_is_unavailable() {
        let announcer = CommandAnnouncer::notify_send(Arc::new(NoIcon))
            .with_program("/nonexistent/bin/notify-send");
        let err = announcer.send("t", "m").unwrap_err();
        assert!(err.is_unavailable());
        assert_eq!(err.to_string(), "notify-send is not installed.");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_failing_program_is_command_failed() {
        let announcer = CommandAnnouncer::growl_notify(Arc::new(NoIcon)).with_program("/bin/false");
        match announcer.send("t", "m") {
            Err(AnnounceError::CommandFailed { command, .. }) => assert_eq!(command, "/bin/false"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_successful_program() {
        let announcer = CommandAnnouncer::notify_send(Arc::new(NoIcon)).with_program("/bin/true");
        assert!(announcer.send("t", "m").is_ok());
        assert_eq!(announcer.name(), "notify-send");
    }
}
