//! CLDR-style plural rules mapping a (locale, quantity) pair to a plural
//! category.
//!
//! Rules are evaluated in fixed priority order `zero > one > two > few >
//! many > other`; the first matching predicate wins and `other` is the
//! unconditional catch-all. Every rule is a pure function over the integer
//! quantity, so the same inputs always yield the same category.

use core::fmt;

/// CLDR plural categories.
///
/// A closed set: every rule maps every quantity to exactly one of these six
/// values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralCategory {
    /// Quantity-zero form (Arabic, Welsh).
    Zero,
    /// Singular form.
    One,
    /// Dual form (Arabic, Irish, Welsh).
    Two,
    /// Paucal form (small quantities in Slavic, Celtic and Arabic rules).
    Few,
    /// Large-quantity form (Slavic and Arabic rules).
    Many,
    /// Catch-all form; mandatory in every authored variant set.
    Other,
}

impl fmt::Display for PluralCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zero => write!(f, "zero"),
            Self::One => write!(f, "one"),
            Self::Two => write!(f, "two"),
            Self::Few => write!(f, "few"),
            Self::Many => write!(f, "many"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// A plural rule family shared by one or more locales.
///
/// Families cover every locale the built-in catalog is authored for; any
/// locale outside them degrades to [`PluralRule::Default`] so that a
/// malformed or unsupported locale can never break a render path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralRule {
    /// Germanic/default two-form rule: `one` for 1, `other` otherwise
    /// (`en`, `de`, `it`, `es`, `pt-br` and all unrecognized locales).
    Default,
    /// No plural inflection, always `other`
    /// (`ja`, `ko`, `zh-cn`, `zh-tw`, `tr`, `hu`).
    Invariable,
    /// French two-form rule: `one` covers both 0 and 1.
    French,
    /// Arabic six-form rule with modulo-100 `few`/`many` bands.
    Arabic,
    /// Russian-style Slavic rule driven by the last one and two digits.
    EastSlavic,
    /// Polish rule: like Russian for `few`, but `one` is exactly 1.
    Polish,
    /// Czech/Bulgarian rule: `few` for 2-4, `other` otherwise.
    CzechLike,
    /// Irish rule with dual and a 3-6 paucal band.
    Irish,
    /// Welsh six-form rule (`zero`/`one`/`two`/`few`@3/`many`@6).
    Welsh,
}

impl PluralRule {
    /// What: Select the rule family for a locale code.
    ///
    /// Inputs:
    /// - `locale`: Locale code (e.g., "en", "zh-cn", "pt-br")
    ///
    /// Output:
    /// - The rule family; [`PluralRule::Default`] when the language is not
    ///   recognized
    ///
    /// Details:
    /// - Only the primary language subtag is inspected, so "pt-br" and "pt"
    ///   select the same family
    /// - Matching is ASCII case-insensitive
    #[must_use]
    pub fn for_locale(locale: &str) -> Self {
        let primary = locale.split(['-', '_']).next().unwrap_or(locale);

        match primary.to_ascii_lowercase().as_str() {
            "fr" => Self::French,
            "ar" => Self::Arabic,
            "ru" => Self::EastSlavic,
            "pl" => Self::Polish,
            "cs" | "bg" => Self::CzechLike,
            "ga" => Self::Irish,
            "cy" => Self::Welsh,
            "ja" | "ko" | "zh" | "tr" | "hu" => Self::Invariable,
            _ => Self::Default,
        }
    }

    /// What: Determine the plural category for a quantity under this rule.
    ///
    /// Inputs:
    /// - `n`: Non-negative integer quantity (no small-magnitude assumption)
    ///
    /// Output:
    /// - Exactly one [`PluralCategory`]; never fails
    #[must_use]
    pub fn category(self, n: u64) -> PluralCategory {
        match self {
            Self::Default => default_rule(n),
            Self::Invariable => PluralCategory::Other,
            Self::French => french_rule(n),
            Self::Arabic => arabic_rule(n),
            Self::EastSlavic => east_slavic_rule(n),
            Self::Polish => polish_rule(n),
            Self::CzechLike => czech_rule(n),
            Self::Irish => irish_rule(n),
            Self::Welsh => welsh_rule(n),
        }
    }
}

/// What: Map a (locale, quantity) pair directly to a plural category.
///
/// Inputs:
/// - `locale`: Locale code; unrecognized codes use the default rule
/// - `n`: Non-negative integer quantity
///
/// Output:
/// - The category selected by the locale's rule family
#[must_use]
pub fn category_for(locale: &str, n: u64) -> PluralCategory {
    PluralRule::for_locale(locale).category(n)
}

/// Two-form rule for English, German, Italian, Spanish and Portuguese.
fn default_rule(n: u64) -> PluralCategory {
    if n == 1 {
        PluralCategory::One
    } else {
        PluralCategory::Other
    }
}

/// French counts 0 as singular.
fn french_rule(n: u64) -> PluralCategory {
    if n <= 1 {
        PluralCategory::One
    } else {
        PluralCategory::Other
    }
}

/// Arabic: explicit zero/one/two, then modulo-100 bands for few and many.
fn arabic_rule(n: u64) -> PluralCategory {
    let mod100 = n % 100;
    match n {
        0 => PluralCategory::Zero,
        1 => PluralCategory::One,
        2 => PluralCategory::Two,
        _ if (3..=10).contains(&mod100) => PluralCategory::Few,
        _ if (11..=99).contains(&mod100) => PluralCategory::Many,
        _ => PluralCategory::Other,
    }
}

/// Russian-style rule: last digit 1 (but not 11) is singular, last digit
/// 2-4 (but not 12-14) is paucal, everything else takes `many`.
fn east_slavic_rule(n: u64) -> PluralCategory {
    let mod10 = n % 10;
    let mod100 = n % 100;

    if mod10 == 1 && mod100 != 11 {
        PluralCategory::One
    } else if (2..=4).contains(&mod10) && !(12..=14).contains(&mod100) {
        PluralCategory::Few
    } else {
        PluralCategory::Many
    }
}

/// Polish diverges from Russian exactly at x1: only literal 1 is singular,
/// so 21 stays `many` where Russian picks `one`.
fn polish_rule(n: u64) -> PluralCategory {
    let mod10 = n % 10;
    let mod100 = n % 100;

    if n == 1 {
        PluralCategory::One
    } else if (2..=4).contains(&mod10) && !(12..=14).contains(&mod100) {
        PluralCategory::Few
    } else {
        PluralCategory::Many
    }
}

/// Czech and Bulgarian: paucal covers literal 2-4 only, no modulo cycling.
fn czech_rule(n: u64) -> PluralCategory {
    if n == 1 {
        PluralCategory::One
    } else if (2..=4).contains(&n) {
        PluralCategory::Few
    } else {
        PluralCategory::Other
    }
}

/// Irish: dual at 2, paucal band at 3-6.
fn irish_rule(n: u64) -> PluralCategory {
    match n {
        1 => PluralCategory::One,
        2 => PluralCategory::Two,
        3..=6 => PluralCategory::Few,
        _ => PluralCategory::Other,
    }
}

/// Welsh uses the full CLDR integer rule, not just the zero/one/two slice
/// the built-in strings happen to distinguish.
fn welsh_rule(n: u64) -> PluralCategory {
    match n {
        0 => PluralCategory::Zero,
        1 => PluralCategory::One,
        2 => PluralCategory::Two,
        3 => PluralCategory::Few,
        6 => PluralCategory::Many,
        _ => PluralCategory::Other,
    }
}
