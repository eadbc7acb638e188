// src/settings.rs
use crate::conf_writer::{InsertMode, WriterOptions, DEFAULT_LOCALE_FLAG, DEFAULT_OPTIONS_KEY};
use crate::locale::{Locale, LocaleCatalog, DEFAULT_REGION_SEPARATOR};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{error, info, warn};

pub const DEFAULT_SETTINGS_FILE: &str = "langchooser.yml";
const DEFAULT_CONF_FILE_NAME: &str = "netbeans.conf";
const DEFAULT_ETC_DIR: &str = "etc";

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub options_key: String,
    pub locale_flag: String,
    pub region_separator: String,
    pub insert_mode: InsertMode,
    /// Locale tags offered to the user, in display order.
    pub locales: Vec<String>,
    pub conf_file_name: String,
    pub etc_dir: String,
    /// Program followed by its arguments. Empty means no restart.
    pub restart_command: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            options_key: DEFAULT_OPTIONS_KEY.to_string(),
            locale_flag: DEFAULT_LOCALE_FLAG.to_string(),
            region_separator: DEFAULT_REGION_SEPARATOR.to_string(),
            insert_mode: InsertMode::default(),
            locales: LocaleCatalog::default()
                .locales()
                .iter()
                .map(Locale::tag)
                .collect(),
            conf_file_name: DEFAULT_CONF_FILE_NAME.to_string(),
            etc_dir: DEFAULT_ETC_DIR.to_string(),
            restart_command: Vec::new(),
        }
    }
}

impl Settings {
    pub fn writer_options(&self) -> WriterOptions {
        WriterOptions {
            options_key: self.options_key.clone(),
            locale_flag: self.locale_flag.clone(),
            region_separator: self.region_separator.clone(),
            insert_mode: self.insert_mode,
        }
    }

    /// Parses `locales`, skipping tags that do not parse.
    pub fn catalog(&self) -> LocaleCatalog {
        let locales = self
            .locales
            .iter()
            .filter_map(|tag| match tag.parse::<Locale>() {
                Ok(locale) => Some(locale),
                Err(e) => {
                    warn!("Ignoring locale '{}' from settings: {}", tag, e);
                    None
                }
            })
            .collect::<Vec<_>>();
        if locales.is_empty() {
            warn!("No usable locales in settings, using the built-in list.");
        }
        LocaleCatalog::new(locales)
    }
}

/// Loads settings from `file_path`, falling back to defaults when the file is
/// missing, unreadable or not valid YAML.
pub fn load_settings_from_yaml(file_path: &Path) -> Settings {
    if !file_path.exists() {
        info!(
            "Settings file {} not found, using default settings.",
            file_path.display()
        );
        return Settings::default();
    }

    let yaml_content = match fs::read_to_string(file_path) {
        Ok(content) => content,
        Err(e) => {
            error!(
                "Error reading settings file {}: {}, using default settings.",
                file_path.display(),
                e
            );
            return Settings::default();
        }
    };

    let mut settings: Settings = match serde_yaml::from_str(&yaml_content) {
        Ok(settings) => settings,
        Err(e) => {
            error!("Error parsing YAML: {}, using default settings.", e);
            return Settings::default();
        }
    };

    let defaults = Settings::default();
    if settings.options_key.trim().is_empty() {
        warn!("Empty options_key in settings, using '{}'.", defaults.options_key);
        settings.options_key = defaults.options_key;
    }
    if settings.locale_flag.trim().is_empty() {
        warn!("Empty locale_flag in settings, using '{}'.", defaults.locale_flag);
        settings.locale_flag = defaults.locale_flag;
    }
    if settings.conf_file_name.trim().is_empty() {
        settings.conf_file_name = defaults.conf_file_name;
    }

    info!("Settings loaded from {}", file_path.display());
    settings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings_from_yaml(&dir.path().join("absent.yml"));
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.catalog(), LocaleCatalog::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("langchooser.yml");
        fs::write(
            &path,
            "insert_mode: after_opening_quote\nlocales: [ru, zh-CN]\nrestart_command: [/opt/nb/bin/netbeans, --nosplash]\n",
        )
        .unwrap();

        let settings = load_settings_from_yaml(&path);

        assert_eq!(settings.insert_mode, InsertMode::AfterOpeningQuote);
        assert_eq!(settings.options_key, DEFAULT_OPTIONS_KEY);
        assert_eq!(settings.restart_command.len(), 2);
        assert_eq!(
            settings.catalog().locales(),
            &[Locale::new("ru"), Locale::with_region("zh", "CN")]
        );
        assert_eq!(settings.writer_options().insert_mode, InsertMode::AfterOpeningQuote);
    }

    #[test]
    fn invalid_yaml_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.yml");
        fs::write(&path, "locales: [unclosed\n").unwrap();
        assert_eq!(load_settings_from_yaml(&path), Settings::default());
    }

    #[test]
    fn blank_key_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blank.yml");
        fs::write(&path, "options_key: \"  \"\n").unwrap();
        assert_eq!(load_settings_from_yaml(&path).options_key, DEFAULT_OPTIONS_KEY);
    }

    #[test]
    fn unparsable_locales_are_skipped() {
        let settings = Settings {
            locales: vec!["ja".into(), "not a tag".into()],
            ..Settings::default()
        };
        assert_eq!(settings.catalog().locales(), &[Locale::new("ja")]);

        let none_left = Settings {
            locales: vec!["??".into()],
            ..Settings::default()
        };
        assert_eq!(none_left.catalog(), LocaleCatalog::default());
    }
}
