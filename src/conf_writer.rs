// src/conf_writer.rs
//! Rewrites the IDE's default-options line so it carries a `--locale` flag.
//!
//! The file is read completely as raw bytes, the first line starting with the
//! options key is decoded and rewritten in memory, and the whole buffer is written
//! back. Every other line is passed through byte for byte, whatever its encoding.

use crate::locale::{Locale, DEFAULT_REGION_SEPARATOR};
use crate::utils::error::Error;
use crate::utils::file::{copy_file_creating_parents, read_lines, write_lines};
use regex::{Captures, Regex};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info, warn};

pub const DEFAULT_OPTIONS_KEY: &str = "netbeans_default_options";
pub const DEFAULT_LOCALE_FLAG: &str = "--locale";

/// Where the flag goes on an options line that does not have one yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsertMode {
    /// Right after `key` plus two characters, i.e. after `key="`.
    #[default]
    FixedOffset,
    /// After the first quote following `=`, tolerating spaces around `=`.
    AfterOpeningQuote,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriterOptions {
    pub options_key: String,
    pub locale_flag: String,
    pub region_separator: String,
    pub insert_mode: InsertMode,
}

impl Default for WriterOptions {
    fn default() -> Self {
        WriterOptions {
            options_key: DEFAULT_OPTIONS_KEY.to_string(),
            locale_flag: DEFAULT_LOCALE_FLAG.to_string(),
            region_separator: DEFAULT_REGION_SEPARATOR.to_string(),
            insert_mode: InsertMode::FixedOffset,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigLocaleWriter {
    options: WriterOptions,
    // flag, value, trailing delimiter
    flag_pattern: Regex,
}

impl ConfigLocaleWriter {
    pub fn new(options: WriterOptions) -> Result<Self, Error> {
        let flag_pattern = Regex::new(&format!(
            r#"({}\s+)([^\s'"]+)($|[\s"']+)"#,
            regex::escape(&options.locale_flag)
        ))?;
        Ok(ConfigLocaleWriter {
            options,
            flag_pattern,
        })
    }

    pub fn options(&self) -> &WriterOptions {
        &self.options
    }

    /// Copies `template` to `path` when `path` does not exist yet.
    ///
    /// Returns `true` when a copy was made. An existing `path` is never touched.
    pub fn ensure_exists(&self, path: &Path, template: &Path) -> Result<bool, Error> {
        if path.exists() {
            debug!("Config file {} already exists", path.display());
            return Ok(false);
        }
        info!(
            "Config file {} not found, copying template {}",
            path.display(),
            template.display()
        );
        copy_file_creating_parents(template, path).map_err(|source| Error::TemplateCopyFailed {
            template: template.to_path_buf(),
            destination: path.to_path_buf(),
            source,
        })?;
        Ok(true)
    }

    /// Sets the locale flag on the options line of `path` and rewrites the file.
    pub fn apply_locale(&self, path: &Path, locale: &Locale) -> Result<(), Error> {
        let lines = read_lines(path).map_err(|source| Error::ConfigReadFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let lines = self.rewrite_lines(lines, locale)?;
        write_lines(path, &lines).map_err(|source| Error::ConfigWriteFailed {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Locale '{}' written to {}", locale, path.display());
        Ok(())
    }

    /// Rewrites the first options line of `lines`; later lines are left alone,
    /// including further lines that start with the key. Only the options line is
    /// decoded, lossily when it is not valid UTF-8.
    pub fn rewrite_lines(
        &self,
        mut lines: Vec<Vec<u8>>,
        locale: &Locale,
    ) -> Result<Vec<Vec<u8>>, Error> {
        match lines.iter().position(|line| self.is_options_line(line)) {
            Some(index) => {
                let rewritten =
                    self.rewrite_options_line(&String::from_utf8_lossy(&lines[index]), locale)?;
                debug!("Options line {} rewritten to: {}", index + 1, rewritten);
                lines[index] = rewritten.into_bytes();
            }
            None => warn!(
                "No line starts with '{}', nothing to rewrite",
                self.options.options_key
            ),
        }
        Ok(lines)
    }

    /// Sets the locale flag on a single options line.
    ///
    /// A line that mentions the flag without a value the pattern can replace
    /// (`--locale"` or `--locale=ja`) is rejected rather than left as it was.
    pub fn rewrite_options_line(&self, line: &str, locale: &Locale) -> Result<String, Error> {
        let value = locale.config_value(&self.options.region_separator);
        if line.contains(&self.options.locale_flag) {
            if !self.flag_pattern.is_match(line) {
                return Err(Error::MalformedOptionsLine {
                    line: line.to_string(),
                });
            }
            let replaced = self.flag_pattern.replacen(line, 1, |caps: &Captures| {
                format!("{}{}{}", &caps[1], value, &caps[3])
            });
            return Ok(replaced.into_owned());
        }

        let offset = self.insertion_offset(line)?;
        let flag = &self.options.locale_flag;
        let mut out = String::with_capacity(line.len() + flag.len() + value.len() + 2);
        out.push_str(&line[..offset]);
        out.push_str(flag);
        out.push(' ');
        out.push_str(&value);
        out.push(' ');
        out.push_str(&line[offset..]);
        Ok(out)
    }

    /// Locale value currently set on the first options line.
    pub fn find_locale_value<S: AsRef<[u8]>>(&self, lines: &[S]) -> Option<String> {
        let line = lines
            .iter()
            .map(|line| line.as_ref())
            .find(|line| self.is_options_line(line))?;
        self.flag_pattern
            .captures(&String::from_utf8_lossy(line))
            .map(|caps| caps[2].to_string())
    }

    pub fn current_locale(&self, path: &Path) -> Result<Option<String>, Error> {
        let lines = read_lines(path).map_err(|source| Error::ConfigReadFailed {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(self.find_locale_value(&lines))
    }

    fn is_options_line(&self, line: &[u8]) -> bool {
        line.starts_with(self.options.options_key.as_bytes())
    }

    /// Byte offset at which `<flag> <value> ` is inserted.
    fn insertion_offset(&self, line: &str) -> Result<usize, Error> {
        let malformed = || Error::MalformedOptionsLine {
            line: line.to_string(),
        };
        match self.options.insert_mode {
            InsertMode::FixedOffset => {
                let chars = self.options.options_key.chars().count() + 2;
                nth_char_offset(line, chars).ok_or_else(malformed)
            }
            InsertMode::AfterOpeningQuote => {
                let key_len = self.options.options_key.len();
                let rest = line.get(key_len..).ok_or_else(malformed)?;
                let eq = rest.find('=').ok_or_else(malformed)? + key_len;
                let after_eq = &line[eq + 1..];
                let value_start = after_eq.len() - after_eq.trim_start().len();
                let offset = match after_eq[value_start..].chars().next() {
                    Some(quote @ ('"' | '\'')) => value_start + quote.len_utf8(),
                    _ => value_start,
                };
                Ok(eq + 1 + offset)
            }
        }
    }
}

/// Byte offset of the `n`th character, or the line length when `n` is exactly
/// the number of characters.
fn nth_char_offset(line: &str, n: usize) -> Option<usize> {
    line.char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(line.len()))
        .nth(n)
}
