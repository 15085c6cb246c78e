//! Locale-aware message resolution and pluralization.
//!
//! This crate is the string-producing core of a quick-pick file browser:
//! given a message key, a quantity, and a target locale, it selects the
//! grammatically correct template variant and substitutes placeholders. It
//! renders no UI, reads no files, and knows nothing about quick-pick items;
//! the surrounding application calls in and receives plain strings back.
//!
//! # Overview
//!
//! - **Locale detection** ([`locale`]): reads the ambient display locale
//!   from the environment on every call (`LC_ALL` -> `LC_MESSAGES` ->
//!   `LANG`), defaulting to `en`.
//! - **Plural rules** ([`plural`]): CLDR-style rule families mapping a
//!   (locale, quantity) pair to one of the six plural categories.
//! - **Message catalog** ([`catalog`]): immutable key -> per-locale template
//!   table with an `exact locale -> language subtag -> en` fallback chain.
//! - **Template rendering** ([`render`]): lenient `{name}` placeholder
//!   substitution.
//! - **Resolution** ([`resolver`]): the orchestration layer tying the four
//!   together; quantities arrive in templates as `{count}`.
//! - **Loading** ([`loader`]): building a catalog from a caller-supplied
//!   YAML document string.
//! - **Built-in messages** ([`messages`]): the application's own string
//!   table, initialized once and shared process-wide.
//!
//! # Usage
//!
//! ```
//! use pluralcat::{t_fmt, t_plural_in};
//!
//! // Countable message with an explicit locale
//! assert_eq!(t_plural_in("files", 3, "ru").unwrap(), "3 файла");
//!
//! // Plain message with placeholders, ambient locale
//! let label = t_fmt("revealInExplorerCommandLabel", &[("app", "Finder")]).unwrap();
//! assert!(label.contains("Finder"));
//! ```
//!
//! # Error Handling
//!
//! A missing message key or a key without its mandatory `"en"` text is an
//! authoring defect and fails the render call with an error naming the key.
//! Everything else, including unsupported locales and unauthored plural
//! categories, degrades silently through the fallback chain, because a
//! malformed locale must never crash the caller's render path.

pub mod catalog;
pub mod loader;
pub mod locale;
pub mod messages;
pub mod plural;
pub mod render;
pub mod resolver;

#[cfg(test)]
mod test_utils;

pub use catalog::{Catalog, Entry, I18nError, PluralForms};
pub use loader::{LoadError, catalog_from_yaml};
pub use locale::active_locale;
pub use messages::messages;
pub use plural::{PluralCategory, PluralRule, category_for};
pub use resolver::{bilingual, localize, localize_in, pluralize, pluralize_in, pluralize_with};

/// What: Get a built-in message for the ambient locale.
///
/// Inputs:
/// - `key`: Message key in the built-in catalog
///
/// Output:
/// - Localized text, already rendered
///
/// # Errors
/// - Only the authoring-defect errors ([`I18nError`])
pub fn t(key: &str) -> Result<String, I18nError> {
    resolver::localize(messages(), key)
}

/// What: Get a built-in message with placeholder values.
///
/// Inputs:
/// - `key`: Message key in the built-in catalog
/// - `values`: (name, replacement) pairs for `{name}` tokens
///
/// # Errors
/// - Only the authoring-defect errors ([`I18nError`])
pub fn t_fmt(key: &str, values: &[(&str, &str)]) -> Result<String, I18nError> {
    resolver::localize_with(messages(), key, None, values)
}

/// What: Get a built-in countable message for the ambient locale.
///
/// Inputs:
/// - `key`: Countable message key in the built-in catalog
/// - `n`: Quantity; rendered into the `{count}` placeholder
///
/// # Errors
/// - Only the authoring-defect errors ([`I18nError`])
pub fn t_plural(key: &str, n: u64) -> Result<String, I18nError> {
    resolver::pluralize(messages(), key, n)
}

/// What: Get a built-in countable message for an explicit locale.
///
/// Inputs:
/// - `key`: Countable message key in the built-in catalog
/// - `n`: Quantity; rendered into the `{count}` placeholder
/// - `locale`: Locale code (e.g., "en", "zh-cn", "pt-br")
///
/// # Errors
/// - Only the authoring-defect errors ([`I18nError`])
pub fn t_plural_in(key: &str, n: u64, locale: &str) -> Result<String, I18nError> {
    resolver::pluralize_in(messages(), key, n, locale)
}
