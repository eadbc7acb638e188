// src/locale.rs
use crate::utils::error::Error;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

pub const DEFAULT_REGION_SEPARATOR: &str = ":";

/// A display-language choice: a language code plus an optional region code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    language: String,
    region: Option<String>,
}

impl Locale {
    pub fn new(language: impl Into<String>) -> Self {
        Locale {
            language: language.into(),
            region: None,
        }
    }

    pub fn with_region(language: impl Into<String>, region: impl Into<String>) -> Self {
        let region = region.into();
        Locale {
            language: language.into(),
            region: (!region.is_empty()).then_some(region),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// The value written after the locale flag: `ru` or `zh<sep>CN`.
    pub fn config_value(&self, separator: &str) -> String {
        match &self.region {
            Some(region) => format!("{}{}{}", self.language, separator, region),
            None => self.language.clone(),
        }
    }

    /// `zh-CN` style tag used on the command line and in settings.
    pub fn tag(&self) -> String {
        self.config_value("-")
    }

    /// Name of the locale in its own language.
    pub fn display_name(&self) -> String {
        let name = match (self.language.as_str(), self.region()) {
            ("en", None) => "English",
            ("ja", None) => "日本語",
            ("zh", Some("CN")) => "中文 (中国)",
            ("pt", Some("BR")) => "Português (Brasil)",
            ("ru", None) => "Русский",
            _ => return self.tag(),
        };
        name.to_string()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for Locale {
    type Err = Error;

    /// Accepts `en`, `zh-CN`, `zh_CN` and `zh:CN`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut parts = trimmed.splitn(2, |c: char| c == '-' || c == '_' || c == ':');
        let language = parts.next().unwrap_or_default();
        let region = parts.next().unwrap_or_default();
        let valid = |part: &str, allow_empty: bool| {
            (allow_empty || !part.is_empty()) && part.chars().all(|c| c.is_ascii_alphanumeric())
        };
        let dangling = trimmed.ends_with(|c: char| c == '-' || c == '_' || c == ':');
        if dangling || !valid(language, false) || !valid(region, true) {
            return Err(Error::UnknownLocale(s.to_string()));
        }
        Ok(Locale::with_region(
            language.to_ascii_lowercase(),
            region.to_ascii_uppercase(),
        ))
    }
}

/// The ordered list of locales the user may choose from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleCatalog {
    locales: Vec<Locale>,
}

impl Default for LocaleCatalog {
    fn default() -> Self {
        LocaleCatalog {
            locales: vec![
                Locale::new("en"),
                Locale::new("ja"),
                Locale::with_region("zh", "CN"),
                Locale::with_region("pt", "BR"),
                Locale::new("ru"),
            ],
        }
    }
}

impl LocaleCatalog {
    /// An empty list yields the default catalog.
    pub fn new(locales: Vec<Locale>) -> Self {
        if locales.is_empty() {
            return Self::default();
        }
        LocaleCatalog { locales }
    }

    pub fn locales(&self) -> &[Locale] {
        &self.locales
    }

    pub fn get(&self, index: usize) -> Option<&Locale> {
        self.locales.get(index)
    }

    /// Resolves user input against the catalog.
    pub fn find(&self, input: &str) -> Result<&Locale, Error> {
        let wanted: Locale = input.parse()?;
        self.locales
            .iter()
            .find(|l| **l == wanted)
            .ok_or_else(|| Error::UnknownLocale(input.to_string()))
    }

    /// Index preselected for `system_tag`: the first entry with the same language,
    /// and the same region too when the system locale carries one. Defaults to 0.
    pub fn default_index(&self, system_tag: &str) -> usize {
        let system = match system_tag.parse::<Locale>() {
            Ok(locale) => locale,
            Err(_) => return 0,
        };
        let index = self
            .locales
            .iter()
            .position(|candidate| {
                candidate.language.eq_ignore_ascii_case(&system.language)
                    && match system.region() {
                        Some(region) => candidate
                            .region()
                            .is_some_and(|r| r.eq_ignore_ascii_case(region)),
                        None => true,
                    }
            })
            .unwrap_or(0);
        debug!("Default locale index for '{}' is {}", system_tag, index);
        index
    }
}
