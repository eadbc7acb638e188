// src/cli.rs
use crate::settings::DEFAULT_SETTINGS_FILE;
use crate::utils::path::{HOME_ENV, USERDIR_ENV};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "langchooser", version, about = "Choose the display language of the IDE")]
pub struct Cli {
    /// Settings file
    #[arg(long, global = true, default_value = DEFAULT_SETTINGS_FILE)]
    pub config: PathBuf,

    /// Write a daily rolling log file into this directory
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    /// Also print log records to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the available languages
    List,
    /// Show the locale currently set in the user configuration
    Current {
        #[arg(long, env = USERDIR_ENV)]
        userdir: PathBuf,
    },
    /// Set the display language
    Set(SetArgs),
}

#[derive(Debug, Args)]
pub struct SetArgs {
    /// Locale such as `ru`, `zh-CN` or `pt_BR`
    pub locale: String,

    /// IDE user directory
    #[arg(long, env = USERDIR_ENV)]
    pub userdir: PathBuf,

    /// IDE home (the platform cluster); its parent holds the template configuration
    #[arg(long, env = HOME_ENV)]
    pub netbeans_home: Option<PathBuf>,

    /// Do not restart the IDE afterwards
    #[arg(long)]
    pub no_restart: bool,
}
