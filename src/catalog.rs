//! Immutable message catalog with per-locale templates and fallback lookup.
//!
//! A catalog maps message keys to either a plain per-locale template or a
//! per-locale set of plural variants. It is built once during start-up and
//! never mutated afterwards, so lookups are lock-free and safe to call from
//! any thread.
//!
//! Lookup fallback order for a requested locale:
//! 1. the exact locale tag (`"zh-cn"`),
//! 2. its primary language subtag (`"zh"`),
//! 3. the mandatory `"en"` text.
//!
//! Missing locales and missing plural categories are resolved silently
//! through that chain; only a missing key or a missing `"en"` text is an
//! error, because both are authoring defects rather than runtime conditions.

use std::collections::HashMap;

use crate::plural::PluralCategory;

/// What: Errors raised by catalog lookups.
///
/// Inputs: Generated internally by lookup routines.
///
/// Output: Implements `Display`/`Error` for ergonomic propagation.
///
/// Details:
/// - Both variants are authoring defects: a key that was never defined, or a
///   key whose mandatory `"en"` text is absent.
/// - Locale and category gaps are never represented here; they recover
///   through the fallback chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum I18nError {
    /// The message key is not defined in the catalog.
    KeyNotFound(String),
    /// The key exists but defines no `"en"` text to fall back to.
    LocaleTextMissing(String),
}

impl std::fmt::Display for I18nError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::KeyNotFound(key) => {
                write!(f, "message key \"{key}\" is not defined in the catalog")
            }
            Self::LocaleTextMissing(key) => {
                write!(f, "message key \"{key}\" with locale en not found")
            }
        }
    }
}

impl std::error::Error for I18nError {}

/// Plural variant templates for a single locale.
///
/// `other` is mandatory by construction; every other category may be omitted
/// when the language does not distinguish it, in which case [`Self::select`]
/// degrades to `other`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PluralForms {
    /// Quantity-zero template.
    pub zero: Option<String>,
    /// Singular template.
    pub one: Option<String>,
    /// Dual template.
    pub two: Option<String>,
    /// Paucal template.
    pub few: Option<String>,
    /// Large-quantity template.
    pub many: Option<String>,
    /// Catch-all template; the fallback for every omitted category.
    pub other: String,
}

impl PluralForms {
    /// What: Pick the template for a category, degrading to `other` when the
    /// category is not authored for this locale.
    #[must_use]
    pub fn select(&self, category: PluralCategory) -> &str {
        match category {
            PluralCategory::Zero => self.zero.as_deref().unwrap_or(&self.other),
            PluralCategory::One => self.one.as_deref().unwrap_or(&self.other),
            PluralCategory::Two => self.two.as_deref().unwrap_or(&self.other),
            PluralCategory::Few => self.few.as_deref().unwrap_or(&self.other),
            PluralCategory::Many => self.many.as_deref().unwrap_or(&self.other),
            PluralCategory::Other => &self.other,
        }
    }
}

/// A single catalog entry: plain text or countable plural variants, keyed by
/// locale code in both cases.
#[derive(Debug, Clone)]
pub enum Entry {
    /// Locale -> single template string.
    Plain(HashMap<String, String>),
    /// Locale -> plural variant set.
    Countable(HashMap<String, PluralForms>),
}

/// Immutable table of message key -> per-locale template(s).
///
/// # Example
///
/// ```
/// use pluralcat::catalog::{Catalog, PluralForms};
/// use pluralcat::plural::PluralCategory;
///
/// let mut catalog = Catalog::new();
/// catalog.add_plain("greeting", [("en", "Hello, {name}!"), ("ja", "こんにちは、{name}さん！")]);
/// catalog.add_countable(
///     "items",
///     [(
///         "en",
///         PluralForms {
///             one: Some("{count} item".into()),
///             other: "{count} items".into(),
///             ..Default::default()
///         },
///     )],
/// );
///
/// assert_eq!(catalog.text_for("greeting", "ja").unwrap(), "こんにちは、{name}さん！");
/// assert_eq!(catalog.variant_for("items", "en", PluralCategory::One).unwrap(), "{count} item");
/// assert_eq!(catalog.english("greeting").unwrap(), "Hello, {name}!");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Message key -> entry. Never mutated after initialization.
    entries: HashMap<String, Entry>,
}

impl Catalog {
    /// What: Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// What: Add a plain (non-countable) entry.
    ///
    /// Inputs:
    /// - `key`: Message key
    /// - `texts`: (locale, template) pairs; must include `"en"` for the
    ///   catalog to satisfy [`Self::validate`]
    pub fn add_plain<I, L, T>(&mut self, key: impl Into<String>, texts: I)
    where
        I: IntoIterator<Item = (L, T)>,
        L: Into<String>,
        T: Into<String>,
    {
        let texts = texts
            .into_iter()
            .map(|(locale, text)| (locale.into(), text.into()))
            .collect();
        self.entries.insert(key.into(), Entry::Plain(texts));
    }

    /// What: Add a countable entry with per-locale plural variants.
    ///
    /// Inputs:
    /// - `key`: Message key
    /// - `forms`: (locale, variant set) pairs; must include `"en"` for the
    ///   catalog to satisfy [`Self::validate`]
    pub fn add_countable<I, L>(&mut self, key: impl Into<String>, forms: I)
    where
        I: IntoIterator<Item = (L, PluralForms)>,
        L: Into<String>,
    {
        let forms = forms
            .into_iter()
            .map(|(locale, set)| (locale.into(), set))
            .collect();
        self.entries.insert(key.into(), Entry::Countable(forms));
    }

    /// What: Look up a raw catalog entry.
    ///
    /// # Errors
    /// - [`I18nError::KeyNotFound`] when the key was never defined
    pub fn lookup(&self, key: &str) -> Result<&Entry, I18nError> {
        self.entries
            .get(key)
            .ok_or_else(|| I18nError::KeyNotFound(key.to_string()))
    }

    /// What: Resolve the template of a plain entry for a locale.
    ///
    /// Inputs:
    /// - `key`: Message key
    /// - `locale`: Locale code; gaps fall back to the language subtag, then
    ///   `"en"`
    ///
    /// Output:
    /// - The template string, before placeholder substitution
    ///
    /// # Errors
    /// - [`I18nError::KeyNotFound`] when the key was never defined
    /// - [`I18nError::LocaleTextMissing`] when even `"en"` is absent
    ///
    /// Details:
    /// - A countable entry reached through this call degrades to its `other`
    ///   template rather than failing
    pub fn text_for(&self, key: &str, locale: &str) -> Result<&str, I18nError> {
        match self.lookup(key)? {
            Entry::Plain(texts) => {
                if let Some(text) = locale_entry(texts, locale) {
                    return Ok(text);
                }
                tracing::debug!(
                    "key '{}' has no '{}' text, falling back to en",
                    key,
                    locale
                );
                texts
                    .get("en")
                    .map(String::as_str)
                    .ok_or_else(|| I18nError::LocaleTextMissing(key.to_string()))
            }
            Entry::Countable(_) => self.variant_for(key, locale, PluralCategory::Other),
        }
    }

    /// What: Resolve the template of a countable entry for a locale and
    /// plural category.
    ///
    /// Inputs:
    /// - `key`: Message key
    /// - `locale`: Locale code
    /// - `category`: Category chosen by the plural rule engine
    ///
    /// Output:
    /// - The template string for the category, degraded to the locale's
    ///   `other` variant when the category is not authored, and to `"en"`'s
    ///   corresponding variant when the whole locale is absent
    ///
    /// # Errors
    /// - [`I18nError::KeyNotFound`] when the key was never defined
    /// - [`I18nError::LocaleTextMissing`] when even `"en"` is absent
    pub fn variant_for(
        &self,
        key: &str,
        locale: &str,
        category: PluralCategory,
    ) -> Result<&str, I18nError> {
        match self.lookup(key)? {
            Entry::Countable(forms) => {
                if let Some(set) = locale_entry(forms, locale) {
                    return Ok(set.select(category));
                }
                tracing::debug!(
                    "key '{}' has no '{}' variants, falling back to en",
                    key,
                    locale
                );
                forms
                    .get("en")
                    .map(|set| set.select(category))
                    .ok_or_else(|| I18nError::LocaleTextMissing(key.to_string()))
            }
            // A plain entry has one template for every quantity.
            Entry::Plain(texts) => {
                if let Some(text) = locale_entry(texts, locale) {
                    return Ok(text);
                }
                texts
                    .get("en")
                    .map(String::as_str)
                    .ok_or_else(|| I18nError::LocaleTextMissing(key.to_string()))
            }
        }
    }

    /// What: Return the `"en"` text of a key regardless of the active locale.
    ///
    /// Details:
    /// - Callers render a fixed English label for searchability and attach a
    ///   localized description separately; this accessor keeps the English
    ///   half a single map hop
    /// - For countable entries this is the `"en"` `other` template
    ///
    /// # Errors
    /// - [`I18nError::KeyNotFound`] when the key was never defined
    /// - [`I18nError::LocaleTextMissing`] when the `"en"` text is absent
    pub fn english(&self, key: &str) -> Result<&str, I18nError> {
        match self.lookup(key)? {
            Entry::Plain(texts) => texts
                .get("en")
                .map(String::as_str)
                .ok_or_else(|| I18nError::LocaleTextMissing(key.to_string())),
            Entry::Countable(forms) => forms
                .get("en")
                .map(|set| set.other.as_str())
                .ok_or_else(|| I18nError::LocaleTextMissing(key.to_string())),
        }
    }

    /// What: Check the authoring invariant that every entry defines `"en"`.
    ///
    /// Output:
    /// - `Ok(())`, or the sorted list of keys missing their `"en"` text
    ///
    /// # Errors
    /// - Returns the offending keys; intended for start-up assertions and
    ///   tests, not for per-render checks
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut missing: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| match entry {
                Entry::Plain(texts) => !texts.contains_key("en"),
                Entry::Countable(forms) => !forms.contains_key("en"),
            })
            .map(|(key, _)| key.clone())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            missing.sort_unstable();
            Err(missing)
        }
    }

    /// Whether the catalog defines `key`.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all message keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

/// What: Find a locale's value in a per-locale map.
///
/// Details:
/// - Tries the exact (lowercased) tag first, then the primary language
///   subtag, so an ambient "de-de" still reaches an entry authored as "de"
/// - Subtag extraction accepts both `-` and `_` separators, the same tags
///   the plural rule engine accepts, so a raw "de_DE" gets German catalog
///   text alongside German plural categories
/// - `"en"` fallback is the caller's job; this helper only walks the
///   locale-shaped part of the chain
fn locale_entry<'a, V>(map: &'a HashMap<String, V>, locale: &str) -> Option<&'a V> {
    let lower = locale.to_ascii_lowercase();
    if let Some(value) = map.get(&lower) {
        return Some(value);
    }

    let primary = lower.split(['-', '_']).next().unwrap_or(&lower);
    if primary != lower
        && let Some(value) = map.get(primary)
    {
        tracing::debug!("locale '{}' matched catalog entry via subtag '{}'", locale, primary);
        return Some(value);
    }

    None
}
