// src/restart.rs
use crate::utils::command::command_to_string;
use crate::utils::error::Error;
use std::process::{Command, Stdio};
use tracing::info;

/// Asks the IDE to restart once the new locale is on disk.
pub trait RestartTrigger {
    /// Returns whether a restart was actually launched.
    fn restart(&self) -> Result<bool, Error>;
}

/// Used when no restart command is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoRestart;

impl RestartTrigger for NoRestart {
    fn restart(&self) -> Result<bool, Error> {
        info!("No restart command configured; restart the IDE to apply the language.");
        Ok(false)
    }
}

/// Launches a configured command and does not wait for it.
#[derive(Debug, Clone)]
pub struct CommandRestarter {
    program: String,
    args: Vec<String>,
}

impl CommandRestarter {
    /// `argv[0]` is the program. Returns `None` for an empty list.
    pub fn from_argv(argv: &[String]) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        Some(CommandRestarter {
            program: program.clone(),
            args: args.to_vec(),
        })
    }

    fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        command
    }
}

impl RestartTrigger for CommandRestarter {
    fn restart(&self) -> Result<bool, Error> {
        let mut command = self.command();
        let description = command_to_string(&command);
        info!("Restarting IDE with: {}", description);
        let child = command.spawn().map_err(|source| Error::Restart {
            command: description.clone(),
            source,
        })?;
        info!(pid = child.id(), cmd = %description, "Restart command spawned");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_argv_has_no_restarter() {
        assert!(CommandRestarter::from_argv(&[]).is_none());
    }

    #[test]
    fn missing_program_reports_restart_error() {
        let restarter = CommandRestarter::from_argv(&[
            "/definitely/not/an/ide-launcher".to_string(),
            "--nosplash".to_string(),
        ])
        .unwrap();
        let err = restarter.restart().unwrap_err();
        assert!(matches!(err, Error::Restart { .. }));
        assert!(err.to_string().contains("--nosplash"));
    }

    #[test]
    fn no_restart_launches_nothing() {
        assert!(!NoRestart.restart().unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn spawned_command_counts_as_restart() {
        let restarter = CommandRestarter::from_argv(&["true".to_string()]).unwrap();
        assert!(restarter.restart().unwrap());
    }
}
