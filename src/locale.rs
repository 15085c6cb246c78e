//! Ambient display-locale detection.
//!
//! The active locale is owned by the host environment, not by this crate,
//! and can change during a long-running session. It is therefore re-read on
//! every call and never cached. Detection checks `LC_ALL`, `LC_MESSAGES`,
//! and `LANG` in priority order; a missing or unparsable value resolves to
//! `"en"` rather than failing.

use std::env;

/// Locale used when the environment provides nothing usable.
pub const FALLBACK_LOCALE: &str = "en";

/// What: Read the ambient active display locale.
///
/// Output:
/// - Normalized lowercase locale code (e.g., "de-de", "zh-cn"); `"en"` when
///   no environment variable yields a usable value
///
/// Details:
/// - Checks `LC_ALL`, `LC_MESSAGES`, `LANG` in that order
/// - Never cached: the ambient value may change between calls
/// - No side effects and no failure mode
#[must_use]
pub fn active_locale() -> String {
    let locale_vars = ["LC_ALL", "LC_MESSAGES", "LANG"];

    for var_name in &locale_vars {
        if let Ok(raw) = env::var(var_name)
            && let Some(code) = normalize(&raw)
        {
            return code;
        }
    }

    FALLBACK_LOCALE.to_string()
}

/// What: Normalize a raw locale string into this crate's locale-code form.
///
/// Inputs:
/// - `raw`: Raw value like "de_DE.UTF-8", "zh_CN", "pt-BR", "en"
///
/// Output:
/// - `Some` lowercase hyphenated code ("de-de", "zh-cn", "pt-br"), or `None`
///   when the value carries no language information
///
/// Details:
/// - Strips encoding (".UTF-8") and modifier ("@euro") suffixes
/// - Converts underscores to hyphens and lowercases everything
/// - "C" and "POSIX" name no language and normalize to `None`
#[must_use]
pub fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    // Drop encoding and modifier suffixes: "de_DE.UTF-8" / "de_DE@euro"
    let base = trimmed.split(['.', '@']).next().unwrap_or(trimmed);
    let lowered = base.replace('_', "-").to_ascii_lowercase();

    if lowered == "c" || lowered == "posix" {
        return None;
    }

    let well_formed = !lowered.is_empty()
        && lowered.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        && !lowered.starts_with('-')
        && !lowered.ends_with('-')
        && !lowered.contains("--");

    well_formed.then_some(lowered)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_common_forms() {
        assert_eq!(normalize("de_DE.UTF-8"), Some("de-de".to_string()));
        assert_eq!(normalize("en_US.utf8"), Some("en-us".to_string()));
        assert_eq!(normalize("zh_CN.UTF-8"), Some("zh-cn".to_string()));
        assert_eq!(normalize("pt-BR"), Some("pt-br".to_string()));
        assert_eq!(normalize("en"), Some("en".to_string()));
        assert_eq!(normalize("  fr_FR  "), Some("fr-fr".to_string()));
    }

    #[test]
    fn normalize_strips_modifiers() {
        assert_eq!(normalize("de_DE@euro"), Some("de-de".to_string()));
        assert_eq!(normalize("en_US.ISO8859-1"), Some("en-us".to_string()));
    }

    #[test]
    fn normalize_rejects_non_languages() {
        assert_eq!(normalize(""), None);
        assert_eq!(normalize("   "), None);
        assert_eq!(normalize("C"), None);
        assert_eq!(normalize("POSIX"), None);
        assert_eq!(normalize("C.UTF-8"), None);
        assert_eq!(normalize("en US"), None);
        assert_eq!(normalize("-en"), None);
        assert_eq!(normalize("en-"), None);
        assert_eq!(normalize("en--us"), None);
    }

    #[test]
    fn active_locale_env_priority() {
        let _guard = crate::test_utils::env_lock();

        // Save original values
        let original_lang = env::var("LANG").ok();
        let original_lc_all = env::var("LC_ALL").ok();
        let original_lc_messages = env::var("LC_MESSAGES").ok();

        unsafe {
            env::set_var("LANG", "de_DE.UTF-8");
            env::remove_var("LC_ALL");
            env::remove_var("LC_MESSAGES");
        }
        assert_eq!(active_locale(), "de-de");

        unsafe {
            // LC_MESSAGES outranks LANG
            env::set_var("LC_MESSAGES", "it_IT.UTF-8");
        }
        assert_eq!(active_locale(), "it-it");

        unsafe {
            // LC_ALL outranks both
            env::set_var("LC_ALL", "fr_FR.UTF-8");
        }
        assert_eq!(active_locale(), "fr-fr");

        unsafe {
            // An unusable high-priority value falls through to the next one
            env::set_var("LC_ALL", "C");
        }
        assert_eq!(active_locale(), "it-it");

        unsafe {
            env::remove_var("LC_ALL");
            env::remove_var("LC_MESSAGES");
            env::remove_var("LANG");
        }
        assert_eq!(active_locale(), "en");

        // Restore original values
        unsafe {
            if let Some(val) = original_lang {
                env::set_var("LANG", val);
            } else {
                env::remove_var("LANG");
            }
            if let Some(val) = original_lc_all {
                env::set_var("LC_ALL", val);
            } else {
                env::remove_var("LC_ALL");
            }
            if let Some(val) = original_lc_messages {
                env::set_var("LC_MESSAGES", val);
            } else {
                env::remove_var("LC_MESSAGES");
            }
        }
    }
}
