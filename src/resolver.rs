//! Message resolution: glue between locale detection, plural rules, catalog
//! lookup, and template rendering.
//!
//! Every function here is a thin orchestration over the other modules.
//! The only failures that propagate are the catalog's authoring-defect
//! errors ([`I18nError::KeyNotFound`] / [`I18nError::LocaleTextMissing`]);
//! locale and category gaps degrade silently through the catalog's fallback
//! chain so an under-authored locale renders readable English instead of
//! crashing the caller's UI.

use crate::catalog::{Catalog, I18nError};
use crate::locale::active_locale;
use crate::plural::category_for;
use crate::render::render;

/// What: Resolve and render a countable message for the ambient locale.
///
/// Inputs:
/// - `catalog`: Catalog holding the countable entry
/// - `key`: Message key
/// - `n`: Quantity; injected into the template as `{count}`
///
/// Output:
/// - The rendered string for the ambient locale's plural category
///
/// # Errors
/// - Only [`I18nError::KeyNotFound`] / [`I18nError::LocaleTextMissing`]
pub fn pluralize(catalog: &Catalog, key: &str, n: u64) -> Result<String, I18nError> {
    pluralize_with(catalog, key, n, None, &[])
}

/// What: Resolve and render a countable message for an explicit locale.
///
/// # Errors
/// - Only [`I18nError::KeyNotFound`] / [`I18nError::LocaleTextMissing`]
pub fn pluralize_in(
    catalog: &Catalog,
    key: &str,
    n: u64,
    locale: &str,
) -> Result<String, I18nError> {
    pluralize_with(catalog, key, n, Some(locale), &[])
}

/// What: General form of countable resolution with extra placeholders.
///
/// Inputs:
/// - `locale`: Explicit locale, or `None` to read the ambient locale
/// - `values`: Additional (name, replacement) pairs merged after `{count}`
///
/// Output:
/// - The rendered string: category from the locale's plural rule, template
///   from the catalog's fallback chain, placeholders substituted last
///
/// # Errors
/// - Only [`I18nError::KeyNotFound`] / [`I18nError::LocaleTextMissing`]
pub fn pluralize_with(
    catalog: &Catalog,
    key: &str,
    n: u64,
    locale: Option<&str>,
    values: &[(&str, &str)],
) -> Result<String, I18nError> {
    let locale = locale.map_or_else(
        || {
            let ambient = active_locale();
            tracing::debug!("ambient locale resolved to '{}'", ambient);
            ambient
        },
        str::to_string,
    );

    let category = category_for(&locale, n);
    let template = catalog.variant_for(key, &locale, category)?;

    let count = n.to_string();
    let mut all_values: Vec<(&str, &str)> = Vec::with_capacity(values.len() + 1);
    all_values.push(("count", &count));
    all_values.extend_from_slice(values);

    Ok(render(template, &all_values))
}

/// What: Resolve and render a plain message for the ambient locale.
///
/// # Errors
/// - Only [`I18nError::KeyNotFound`] / [`I18nError::LocaleTextMissing`]
pub fn localize(catalog: &Catalog, key: &str) -> Result<String, I18nError> {
    localize_with(catalog, key, None, &[])
}

/// What: Resolve and render a plain message for an explicit locale.
///
/// # Errors
/// - Only [`I18nError::KeyNotFound`] / [`I18nError::LocaleTextMissing`]
pub fn localize_in(catalog: &Catalog, key: &str, locale: &str) -> Result<String, I18nError> {
    localize_with(catalog, key, Some(locale), &[])
}

/// What: General form of plain-message resolution with placeholders.
///
/// Inputs:
/// - `locale`: Explicit locale, or `None` to read the ambient locale
/// - `values`: (name, replacement) pairs for `{name}` tokens
///
/// # Errors
/// - Only [`I18nError::KeyNotFound`] / [`I18nError::LocaleTextMissing`]
pub fn localize_with(
    catalog: &Catalog,
    key: &str,
    locale: Option<&str>,
    values: &[(&str, &str)],
) -> Result<String, I18nError> {
    let locale = locale.map_or_else(active_locale, str::to_string);
    let template = catalog.text_for(key, &locale)?;
    Ok(render(template, values))
}

/// What: Return the fixed English text plus, when the ambient locale is not
/// English, the localized text.
///
/// Output:
/// - `(english, Some(localized))` when the ambient locale differs from
///   `"en"` and actually changes the text; `(english, None)` otherwise
///
/// Details:
/// - Callers use the English half as a stable, searchable label and the
///   localized half as a description; which half goes where is the caller's
///   presentation decision
///
/// # Errors
/// - Only [`I18nError::KeyNotFound`] / [`I18nError::LocaleTextMissing`]
pub fn bilingual(catalog: &Catalog, key: &str) -> Result<(String, Option<String>), I18nError> {
    let english = catalog.english(key)?.to_string();

    let locale = active_locale();
    if locale == "en" || locale.starts_with("en-") {
        return Ok((english, None));
    }

    let localized = catalog.text_for(key, &locale)?;
    let localized = (localized != english).then(|| localized.to_string());
    Ok((english, localized))
}

#[cfg(test)]
mod tests {
    use std::env;

    use super::*;
    use crate::catalog::PluralForms;

    fn sample_catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.add_plain(
            "revealInExplorerCommandLabel",
            [
                ("en", "Open this directory in {app}"),
                ("ja", "このディレクトリを{app}で開く"),
            ],
        );
        catalog.add_countable(
            "files",
            [
                (
                    "en",
                    PluralForms {
                        one: Some("{count} file".into()),
                        other: "{count} files".into(),
                        ..Default::default()
                    },
                ),
                (
                    "ru",
                    PluralForms {
                        one: Some("{count} файл".into()),
                        few: Some("{count} файла".into()),
                        many: Some("{count} файлов".into()),
                        other: "{count} файлов".into(),
                        ..Default::default()
                    },
                ),
            ],
        );
        catalog
    }

    #[test]
    fn pluralize_explicit_locale() {
        let catalog = sample_catalog();
        assert_eq!(pluralize_in(&catalog, "files", 1, "en").unwrap(), "1 file");
        assert_eq!(pluralize_in(&catalog, "files", 2, "en").unwrap(), "2 files");
        assert_eq!(pluralize_in(&catalog, "files", 21, "ru").unwrap(), "21 файл");
        assert_eq!(pluralize_in(&catalog, "files", 22, "ru").unwrap(), "22 файла");
    }

    #[test]
    fn pluralize_unsupported_locale_degrades_to_english() {
        let catalog = sample_catalog();
        // No catalog entry and no dedicated rule for "tlh"; both degrade
        assert_eq!(pluralize_in(&catalog, "files", 1, "tlh").unwrap(), "1 file");
        assert_eq!(pluralize_in(&catalog, "files", 7, "tlh").unwrap(), "7 files");
    }

    #[test]
    fn pluralize_missing_key_propagates() {
        let catalog = sample_catalog();
        assert_eq!(
            pluralize_in(&catalog, "bogus", 1, "en"),
            Err(I18nError::KeyNotFound("bogus".into()))
        );
    }

    #[test]
    fn pluralize_with_extra_values() {
        let mut catalog = Catalog::new();
        catalog.add_countable(
            "matches",
            [(
                "en",
                PluralForms {
                    one: Some("{count} match for \"{query}\"".into()),
                    other: "{count} matches for \"{query}\"".into(),
                    ..Default::default()
                },
            )],
        );
        assert_eq!(
            pluralize_with(&catalog, "matches", 3, Some("en"), &[("query", "lib")]).unwrap(),
            "3 matches for \"lib\""
        );
    }

    #[test]
    fn pluralize_is_deterministic() {
        let catalog = sample_catalog();
        let first = pluralize_in(&catalog, "files", 14, "ru").unwrap();
        for _ in 0..10 {
            assert_eq!(pluralize_in(&catalog, "files", 14, "ru").unwrap(), first);
        }
    }

    #[test]
    fn bilingual_tracks_the_ambient_locale() {
        let _guard = crate::test_utils::env_lock();
        let catalog = sample_catalog();

        // Save original values
        let original_lang = env::var("LANG").ok();
        let original_lc_all = env::var("LC_ALL").ok();
        let original_lc_messages = env::var("LC_MESSAGES").ok();

        unsafe {
            env::set_var("LC_ALL", "ja_JP.UTF-8");
            env::remove_var("LC_MESSAGES");
            env::remove_var("LANG");
        }
        assert_eq!(
            bilingual(&catalog, "revealInExplorerCommandLabel").unwrap(),
            (
                "Open this directory in {app}".to_string(),
                Some("このディレクトリを{app}で開く".to_string())
            )
        );

        unsafe {
            // An English locale carries no second reading
            env::set_var("LC_ALL", "en_US.UTF-8");
        }
        assert_eq!(
            bilingual(&catalog, "revealInExplorerCommandLabel").unwrap(),
            ("Open this directory in {app}".to_string(), None)
        );

        unsafe {
            // Unauthored locale: the fallback text is the English text, so
            // repeating it as a second reading would be noise
            env::set_var("LC_ALL", "fr_FR.UTF-8");
        }
        assert_eq!(
            bilingual(&catalog, "revealInExplorerCommandLabel").unwrap(),
            ("Open this directory in {app}".to_string(), None)
        );

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

    #[test]
    fn localize_with_placeholders() {
        let catalog = sample_catalog();
        assert_eq!(
            localize_with(
                &catalog,
                "revealInExplorerCommandLabel",
                Some("ja"),
                &[("app", "Finder")]
            )
            .unwrap(),
            "このディレクトリをFinderで開く"
        );
        assert_eq!(
            localize_in(&catalog, "revealInExplorerCommandLabel", "fr").unwrap(),
            "Open this directory in {app}"
        );
    }
}
