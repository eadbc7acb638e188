// src/notifier.rs
use tracing::{error, info};

pub const TITLE: &str = "Language Chooser";
pub const MSG_USER_CONF_CREATED: &str =
    "The user configuration file was created from the installation template.";
pub const MSG_USER_CONF_CREATE_ERROR: &str =
    "Could not create the user configuration file.";
pub const MSG_LANG_APPLY_ERROR: &str = "Could not apply the selected language.";
pub const MSG_RESTART_ERROR: &str = "Could not restart the IDE.";

/// Sink for user-facing messages. The host decides how to render them.
pub trait Notifier {
    fn info(&self, title: &str, message: &str);
    fn error(&self, title: &str, message: &str);
}

/// Prints to stdout/stderr and mirrors every message into the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn info(&self, title: &str, message: &str) {
        info!("[{}]: {}", title, message);
        println!("{}", message);
    }

    fn error(&self, title: &str, message: &str) {
        error!("[{}]: {}", title, message);
        eprintln!("error: {}", message);
    }
}
