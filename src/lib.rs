pub mod chooser;
pub mod cli;
pub mod conf_writer;
pub mod locale;
pub mod notifier;
pub mod restart;
pub mod settings;
pub mod utils;

use crate::chooser::LanguageChooser;
use crate::cli::{Cli, Command, SetArgs};
use crate::conf_writer::ConfigLocaleWriter;
use crate::notifier::ConsoleNotifier;
use crate::restart::{CommandRestarter, NoRestart, RestartTrigger};
use crate::settings::{load_settings_from_yaml, Settings};
use crate::utils::locale::system_locale;
use crate::utils::logger::LoggerBuilder;
use crate::utils::path::IdePaths;
use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;
use tracing::{debug, info};

/// A chooser failure that the notifier has already shown to the user.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
struct Reported(#[from] utils::error::Error);

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let mut logger = LoggerBuilder::new().console(cli.verbose);
    if let Some(dir) = &cli.log_dir {
        logger = logger.log_dir(dir);
    }
    if let Err(e) = logger.init() {
        eprintln!("Warning: failed to initialise logging: {}", e);
    }
    info!("Log initialized");

    match execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if e.downcast_ref::<Reported>().is_none() {
                eprintln!("error: {:#}", e);
            }
            debug!("Exiting with failure: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: Cli) -> Result<()> {
    let settings = load_settings_from_yaml(&cli.config);
    match cli.command {
        Command::List => {
            list_locales(&settings);
            Ok(())
        }
        Command::Current { userdir } => show_current(&settings, IdePaths::new(userdir, None)),
        Command::Set(args) => set_locale(&settings, args),
    }
}

fn list_locales(settings: &Settings) {
    let catalog = settings.catalog();
    let selected = catalog.default_index(&system_locale());
    for (i, locale) in catalog.locales().iter().enumerate() {
        let marker = if i == selected { '*' } else { ' ' };
        println!("{} {:<6} {}", marker, locale.tag(), locale.display_name());
    }
}

fn show_current(settings: &Settings, paths: IdePaths) -> Result<()> {
    let writer = ConfigLocaleWriter::new(settings.writer_options())
        .context("Invalid locale flag in settings")?;
    let conf = paths.user_config_file(&settings.etc_dir, &settings.conf_file_name);
    match writer
        .current_locale(&conf)
        .with_context(|| format!("Cannot inspect {}", conf.display()))?
    {
        Some(value) => println!("{}", value),
        None => println!("No locale set in {}", conf.display()),
    }
    Ok(())
}

fn set_locale(settings: &Settings, args: SetArgs) -> Result<()> {
    let writer = ConfigLocaleWriter::new(settings.writer_options())
        .context("Invalid locale flag in settings")?;
    let catalog = settings.catalog();
    let locale = catalog
        .find(&args.locale)
        .with_context(|| {
            let known: Vec<String> = catalog.locales().iter().map(|l| l.tag()).collect();
            format!("Choose one of: {}", known.join(", "))
        })?
        .clone();

    let paths = IdePaths::new(args.userdir, args.netbeans_home);
    let chooser = LanguageChooser::new(
        catalog,
        writer,
        paths.user_config_file(&settings.etc_dir, &settings.conf_file_name),
        paths.template_config_file(&settings.etc_dir, &settings.conf_file_name),
    );

    let restarter: Box<dyn RestartTrigger> =
        match CommandRestarter::from_argv(&settings.restart_command) {
            Some(restarter) => Box::new(restarter),
            None => Box::new(NoRestart),
        };

    let outcome = chooser
        .apply(&locale, !args.no_restart, &ConsoleNotifier, restarter.as_ref())
        .map_err(Reported)?;
    debug!("Apply outcome: {:?}", outcome);
    Ok(())
}
