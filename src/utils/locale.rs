// src/utils/locale.rs
use tracing::debug;

const FALLBACK_LOCALE: &str = "en-US";

/// The OS locale as a `-` separated tag, `en-US` when it cannot be determined.
pub fn system_locale() -> String {
    let locale = sys_locale::get_locale().map_or(FALLBACK_LOCALE.to_string(), |locale| {
        normalize_system_tag(&locale)
    });
    debug!("System locale is: {}", locale);
    locale
}

/// `zh_CN.UTF-8` -> `zh-CN`, `pt_BR@euro` -> `pt-BR`.
fn normalize_system_tag(raw: &str) -> String {
    let end = raw.find(|c: char| c == '.' || c == '@').unwrap_or(raw.len());
    raw[..end].replace('_', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn posix_suffixes_are_dropped() {
        assert_eq!(normalize_system_tag("zh_CN.UTF-8"), "zh-CN");
        assert_eq!(normalize_system_tag("pt_BR@euro"), "pt-BR");
        assert_eq!(normalize_system_tag("ru"), "ru");
        assert_eq!(normalize_system_tag("ja-JP"), "ja-JP");
    }

    #[test]
    fn system_locale_is_never_empty() {
        assert!(!system_locale().is_empty());
    }
}
