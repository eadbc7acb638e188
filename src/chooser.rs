// src/chooser.rs
//! The "save" action of the language chooser: make sure the user configuration
//! exists, write the locale, tell the user, and restart when asked to.

use crate::conf_writer::ConfigLocaleWriter;
use crate::locale::{Locale, LocaleCatalog};
use crate::notifier::{
    Notifier, MSG_LANG_APPLY_ERROR, MSG_RESTART_ERROR, MSG_USER_CONF_CREATED,
    MSG_USER_CONF_CREATE_ERROR, TITLE,
};
use crate::restart::RestartTrigger;
use crate::utils::error::Error;
use crate::utils::path::path_to_abs;
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplyOutcome {
    /// The user configuration was copied from the template first.
    pub created_user_conf: bool,
    /// A restart was requested and the trigger actually launched one.
    pub restarted: bool,
}

pub struct LanguageChooser {
    catalog: LocaleCatalog,
    writer: ConfigLocaleWriter,
    user_conf: PathBuf,
    template: Option<PathBuf>,
}

impl LanguageChooser {
    pub fn new(
        catalog: LocaleCatalog,
        writer: ConfigLocaleWriter,
        user_conf: impl Into<PathBuf>,
        template: Option<PathBuf>,
    ) -> Self {
        LanguageChooser {
            catalog,
            writer,
            user_conf: user_conf.into(),
            template,
        }
    }

    /// Locale preselected for the given system locale tag.
    pub fn default_selection(&self, system_tag: &str) -> Option<&Locale> {
        self.catalog.get(self.catalog.default_index(system_tag))
    }

    /// Every failure is reported once through `notifier` and returned; later
    /// steps are skipped, so a failed write never triggers a restart.
    pub fn apply(
        &self,
        locale: &Locale,
        restart: bool,
        notifier: &dyn Notifier,
        restarter: &dyn RestartTrigger,
    ) -> Result<ApplyOutcome, Error> {
        info!(
            "Applying locale '{}' to {} (restart: {})",
            locale,
            path_to_abs(&self.user_conf),
            restart
        );

        let created_user_conf = self
            .ensure_user_conf()
            .inspect_err(|e| report(notifier, MSG_USER_CONF_CREATE_ERROR, e))?;
        if created_user_conf {
            notifier.info(TITLE, MSG_USER_CONF_CREATED);
        }

        self.writer
            .apply_locale(&self.user_conf, locale)
            .inspect_err(|e| report(notifier, MSG_LANG_APPLY_ERROR, e))?;
        notifier.info(
            TITLE,
            &format!(
                "Display language set to {} ({}). It takes effect after the IDE restarts.",
                locale.display_name(),
                locale.config_value(&self.writer.options().region_separator)
            ),
        );

        let restarted = restart
            && restarter
                .restart()
                .inspect_err(|e| report(notifier, MSG_RESTART_ERROR, e))?;

        Ok(ApplyOutcome {
            created_user_conf,
            restarted,
        })
    }

    fn ensure_user_conf(&self) -> Result<bool, Error> {
        match &self.template {
            Some(template) => self.writer.ensure_exists(&self.user_conf, template),
            None if self.user_conf.exists() => Ok(false),
            None => Err(Error::TemplateCopyFailed {
                template: PathBuf::new(),
                destination: self.user_conf.clone(),
                source: std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "no installation directory to copy the configuration template from",
                ),
            }),
        }
    }
}

fn report(notifier: &dyn Notifier, message: &str, e: &Error) {
    error!(kind = e.kind(), "{}: {}", message, e);
    notifier.error(TITLE, &format!("{} {}", message, e));
}
