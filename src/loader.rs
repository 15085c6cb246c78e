//! Catalog construction from a YAML document string.
//!
//! The document shape mirrors the catalog's data model: top-level message
//! keys, each mapping locale codes to either a single template string (plain
//! entry) or a category -> template mapping (countable entry):
//!
//! ```yaml
//! files:
//!   en:
//!     one: "{count} file"
//!     other: "{count} files"
//!   ja:
//!     other: "{count} ファイル"
//! greeting:
//!   en: "Hello"
//!   ja: "こんにちは"
//! ```
//!
//! The loader takes a string and never touches the file system; reading the
//! document from disk or a configuration store is the caller's job. The
//! catalog's authoring invariants (an `"en"` variant per key, `other` per
//! variant set) are enforced here so a defective document fails at load time
//! instead of at render time.

use std::collections::HashMap;

use serde::Deserialize;

use crate::catalog::{Catalog, PluralForms};

/// What: Errors from parsing a catalog definition document.
///
/// Inputs: Generated internally by [`catalog_from_yaml`].
///
/// Output: Implements `Display`/`Error` for ergonomic propagation.
#[derive(Debug)]
pub enum LoadError {
    /// The document is not valid YAML.
    Yaml(serde_norway::Error),
    /// The document root is not a key -> locales mapping.
    NotAMapping,
    /// A key, locale, or entry does not have the required document shape.
    BadKey(String),
    /// A key mixes plain locale strings with variant mappings.
    MixedEntry {
        /// Offending message key.
        key: String,
    },
    /// A variant mapping is malformed (unknown category, missing `other`,
    /// non-string template).
    BadVariants {
        /// Offending message key.
        key: String,
        /// Offending locale code.
        locale: String,
        /// Parser detail.
        reason: String,
    },
    /// A key defines no `"en"` variant.
    MissingEnglish {
        /// Offending message key.
        key: String,
    },
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Yaml(err) => write!(f, "failed to parse YAML: {err}"),
            Self::NotAMapping => {
                write!(f, "catalog document root must be a key -> locales mapping")
            }
            Self::BadKey(detail) => write!(f, "malformed catalog document: {detail}"),
            Self::MixedEntry { key } => {
                write!(
                    f,
                    "key \"{key}\" mixes plain texts and plural variant mappings"
                )
            }
            Self::BadVariants {
                key,
                locale,
                reason,
            } => {
                write!(
                    f,
                    "key \"{key}\" has malformed variants for locale \"{locale}\": {reason}"
                )
            }
            Self::MissingEnglish { key } => {
                write!(f, "key \"{key}\" defines no \"en\" text")
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Yaml(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_norway::Error> for LoadError {
    fn from(value: serde_norway::Error) -> Self {
        Self::Yaml(value)
    }
}

/// Serde shape of one locale's variant mapping. `other` is mandatory and
/// unknown categories are rejected, which enforces the variant-set invariant
/// during deserialization.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawForms {
    /// Quantity-zero template.
    zero: Option<String>,
    /// Singular template.
    one: Option<String>,
    /// Dual template.
    two: Option<String>,
    /// Paucal template.
    few: Option<String>,
    /// Large-quantity template.
    many: Option<String>,
    /// Mandatory catch-all template.
    other: String,
}

impl From<RawForms> for PluralForms {
    fn from(raw: RawForms) -> Self {
        Self {
            zero: raw.zero,
            one: raw.one,
            two: raw.two,
            few: raw.few,
            many: raw.many,
            other: raw.other,
        }
    }
}

/// What: Parse a catalog definition from a YAML document string.
///
/// Inputs:
/// - `document`: YAML text in the key -> locale -> template(s) shape shown
///   in the module docs
///
/// Output:
/// - A validated [`Catalog`] ready for lookups
///
/// # Errors
/// - [`LoadError::Yaml`] for syntactically invalid YAML
/// - [`LoadError::NotAMapping`] / [`LoadError::BadKey`] for a malformed
///   document shape
/// - [`LoadError::MixedEntry`] when one key mixes plain and countable forms
/// - [`LoadError::BadVariants`] for unknown categories or a missing `other`
/// - [`LoadError::MissingEnglish`] when a key omits the mandatory `"en"`
pub fn catalog_from_yaml(document: &str) -> Result<Catalog, LoadError> {
    let doc: serde_norway::Value = serde_norway::from_str(document)?;
    let root = doc.as_mapping().ok_or(LoadError::NotAMapping)?;

    let mut catalog = Catalog::new();

    for (key_value, locales_value) in root {
        let key = key_value
            .as_str()
            .ok_or_else(|| LoadError::BadKey(format!("{key_value:?}")))?;
        parse_entry(&mut catalog, key, locales_value)?;
    }

    Ok(catalog)
}

/// What: Parse one key's locale mapping and insert it into the catalog.
///
/// Details:
/// - String values make a plain entry, mapping values a countable entry;
///   the two may not be mixed under one key
fn parse_entry(
    catalog: &mut Catalog,
    key: &str,
    locales_value: &serde_norway::Value,
) -> Result<(), LoadError> {
    let locales = locales_value.as_mapping().ok_or_else(|| LoadError::BadKey(format!(
        "value of key \"{key}\" must be a locale mapping"
    )))?;

    let mut texts: HashMap<String, String> = HashMap::new();
    let mut forms: HashMap<String, PluralForms> = HashMap::new();

    for (locale_value, template_value) in locales {
        let locale = locale_value
            .as_str()
            .ok_or_else(|| LoadError::BadKey(format!("non-string locale under key \"{key}\"")))?
            .to_ascii_lowercase();

        match template_value {
            serde_norway::Value::String(template) => {
                texts.insert(locale, template.clone());
            }
            serde_norway::Value::Mapping(_) => {
                let raw: RawForms = serde_norway::from_value(template_value.clone()).map_err(
                    |err| LoadError::BadVariants {
                        key: key.to_string(),
                        locale: locale.clone(),
                        reason: err.to_string(),
                    },
                )?;
                forms.insert(locale, raw.into());
            }
            other => {
                return Err(LoadError::BadVariants {
                    key: key.to_string(),
                    locale,
                    reason: format!("expected string or mapping, got {other:?}"),
                });
            }
        }
    }

    match (texts.is_empty(), forms.is_empty()) {
        (false, false) => Err(LoadError::MixedEntry {
            key: key.to_string(),
        }),
        (false, true) => {
            if !texts.contains_key("en") {
                return Err(LoadError::MissingEnglish {
                    key: key.to_string(),
                });
            }
            catalog.add_plain(key, texts);
            Ok(())
        }
        (true, false) => {
            if !forms.contains_key("en") {
                return Err(LoadError::MissingEnglish {
                    key: key.to_string(),
                });
            }
            catalog.add_countable(key, forms);
            Ok(())
        }
        // An empty locale mapping has no "en" either
        (true, true) => Err(LoadError::MissingEnglish {
            key: key.to_string(),
        }),
    }
}
