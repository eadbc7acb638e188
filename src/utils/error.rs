// src/utils/error.rs
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to create {} from template {}: {source}", destination.display(), template.display())]
    TemplateCopyFailed {
        template: PathBuf,
        destination: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read config file {}: {source}", path.display())]
    ConfigReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write config file {}: {source}", path.display())]
    ConfigWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot place the locale flag on options line: {line:?}")]
    MalformedOptionsLine { line: String },
    #[error("unsupported locale '{0}'")]
    UnknownLocale(String),
    #[error("failed to run restart command '{command}': {source}")]
    Restart {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Regex(#[from] regex::Error),
}

impl Error {
    /// Short kind name used in notifications and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::TemplateCopyFailed { .. } => "TemplateCopyFailed",
            Self::ConfigReadFailed { .. } => "ConfigReadFailed",
            Self::ConfigWriteFailed { .. } => "ConfigWriteFailed",
            Self::MalformedOptionsLine { .. } => "MalformedOptionsLine",
            Self::UnknownLocale(_) => "UnknownLocale",
            Self::Restart { .. } => "Restart",
            Self::Regex(_) => "Regex",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_pattern_converts_to_regex_error() {
        let e: Error = regex::Regex::new("(").unwrap_err().into();
        assert_eq!(e.kind(), "Regex");
    }

    #[test]
    fn template_copy_error_names_both_paths() {
        let e = Error::TemplateCopyFailed {
            template: PathBuf::from("/opt/ide/etc/netbeans.conf"),
            destination: PathBuf::from("/home/u/.ide/etc/netbeans.conf"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        let msg = e.to_string();
        assert!(msg.contains("/opt/ide/etc/netbeans.conf"));
        assert!(msg.contains("/home/u/.ide/etc/netbeans.conf"));
        assert_eq!(e.kind(), "TemplateCopyFailed");
    }
}
