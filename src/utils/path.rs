use std::env;
use std::path::{Path, PathBuf};

pub const USERDIR_ENV: &str = "NETBEANS_USERDIR";
pub const HOME_ENV: &str = "NETBEANS_HOME";

/// Locations of the IDE user directory and installation that hold `etc/<conf>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdePaths {
    pub user_dir: PathBuf,
    pub install_dir: Option<PathBuf>,
}

impl IdePaths {
    pub fn new(user_dir: impl Into<PathBuf>, install_dir: Option<PathBuf>) -> Self {
        IdePaths {
            user_dir: user_dir.into(),
            install_dir,
        }
    }

    pub fn user_config_file(&self, etc_dir: &str, conf_file_name: &str) -> PathBuf {
        self.user_dir.join(etc_dir).join(conf_file_name)
    }

    /// The IDE home points at the platform cluster; the shared `etc` folder sits
    /// beside it, under the installation root.
    pub fn template_config_file(&self, etc_dir: &str, conf_file_name: &str) -> Option<PathBuf> {
        let home = self.install_dir.as_deref()?;
        let root = home.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(home);
        Some(root.join(etc_dir).join(conf_file_name))
    }
}

fn strip_extended_path_prefix(path_str: &str) -> String {
    match path_str.strip_prefix("\\\\?\\") {
        Some(stripped) => stripped.to_string(),
        None => path_str.to_string(),
    }
}

/// Absolute, display-friendly form of `path`; falls back to joining onto the cwd
/// when the path does not exist yet.
pub fn path_to_abs(path: &Path) -> String {
    if let Ok(absolute_path_buf) = path.canonicalize() {
        if let Some(s_ref) = absolute_path_buf.to_str() {
            return strip_extended_path_prefix(s_ref);
        }
    } else if let Ok(current_dir) = env::current_dir() {
        let absolute_path_buf = current_dir.join(path);
        if let Some(s_ref) = absolute_path_buf.to_str() {
            return strip_extended_path_prefix(s_ref);
        }
    }

    let path_cow = path.to_string_lossy();
    strip_extended_path_prefix(&path_cow)
}
