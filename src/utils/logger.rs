// src/utils/logger.rs
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use time::macros::format_description;
use tracing_appender::rolling;
use tracing_subscriber::{
    fmt::{self, time::LocalTime},
    layer::SubscriberExt,
    registry,
    util::SubscriberInitExt,
    EnvFilter,
};

const DEFAULT_FILE_PREFIX: &str = "langchooser.log";
const DEFAULT_LEVEL: &str = "info";

#[derive(Debug)]
pub struct LoggerBuilder {
    /// Daily rolling file log; nothing is written to disk without it.
    log_dir: Option<PathBuf>,
    console: bool,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    pub fn new() -> Self {
        LoggerBuilder {
            log_dir: None,
            console: false,
        }
    }

    pub fn log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = Some(dir.into());
        self
    }

    /// Mirrors log records to stderr. Stdout is kept for command output.
    pub fn console(mut self, enabled: bool) -> Self {
        self.console = enabled;
        self
    }

    pub fn init(self) -> Result<(), Box<dyn Error>> {
        let time_format = LocalTime::new(format_description!(
            "[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:3]"
        ));

        let file_layer = match &self.log_dir {
            Some(dir) => {
                fs::create_dir_all(dir)?;
                Some(
                    fmt::layer()
                        .with_writer(rolling::daily(dir, DEFAULT_FILE_PREFIX))
                        .with_ansi(false)
                        .with_thread_names(true)
                        .with_thread_ids(true)
                        .with_timer(time_format.clone()),
                )
            }
            None => None,
        };

        let console_layer = self.console.then(|| {
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .with_target(false)
                .with_timer(time_format)
        });

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

        registry()
            .with(filter)
            .with(file_layer)
            .with(console_layer)
            .try_init()?;
        Ok(())
    }
}
