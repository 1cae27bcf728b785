//! English/Arabic translations.
//!
//! Translation is a flat dictionary lookup keyed by camelCase identifiers
//! (`featuredProducts`, `addToCart`). A key missing from the active
//! language's table renders as the key itself, which makes gaps visible
//! on the page instead of silently borrowing the other language.

mod ar;
mod en;

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::types::Language;

static EN: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| en::ENTRIES.iter().copied().collect());

static AR: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| ar::ENTRIES.iter().copied().collect());

const ARABIC_INDIC_DIGITS: [char; 10] = ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'];

fn table(language: Language) -> &'static HashMap<&'static str, &'static str> {
    match language {
        Language::En => &EN,
        Language::Ar => &AR,
    }
}

/// Look up `key` in the dictionary for `language`.
///
/// Unknown keys are returned unchanged.
#[must_use]
pub fn t(language: Language, key: &str) -> &str {
    table(language).get(key).copied().unwrap_or(key)
}

/// Whether `key` has a translation in `language`.
#[must_use]
pub fn has_key(language: Language, key: &str) -> bool {
    table(language).contains_key(key)
}

/// Replace ASCII digits with Arabic-Indic digits when `language` is Arabic.
#[must_use]
pub fn to_arabic_numerals(language: Language, text: &str) -> String {
    if language != Language::Ar {
        return text.to_owned();
    }
    text.chars()
        .map(|c| {
            c.to_digit(10)
                .and_then(|d| ARABIC_INDIC_DIGITS.get(d as usize).copied())
                .unwrap_or(c)
        })
        .collect()
}

/// Translation helper bound to one language, for use inside templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct I18n {
    language: Language,
}

impl I18n {
    #[must_use]
    pub const fn new(language: Language) -> Self {
        Self { language }
    }

    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Translate a dictionary key.
    #[must_use]
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        t(self.language, key)
    }

    /// Localize the digits in `text`.
    #[must_use]
    pub fn digits(&self, text: &str) -> String {
        to_arabic_numerals(self.language, text)
    }

    /// Choose between an English and an Arabic value.
    ///
    /// An empty Arabic value falls back to English.
    #[must_use]
    pub fn pick<'a>(&self, en: &'a str, ar: &'a str) -> &'a str {
        crate::models::localized(self.language, en, ar)
    }

    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.language.code()
    }

    #[must_use]
    pub const fn dir(&self) -> &'static str {
        self.language.dir()
    }

    #[must_use]
    pub const fn is_rtl(&self) -> bool {
        self.language.is_rtl()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_both_languages() {
        assert_eq!(t(Language::En, "addToCart"), "Add to Cart");
        assert_eq!(t(Language::Ar, "addToCart"), "أضف إلى السلة");
    }

    #[test]
    fn test_unknown_key_returns_key() {
        assert_eq!(t(Language::En, "doesNotExist"), "doesNotExist");
        assert_eq!(t(Language::Ar, "doesNotExist"), "doesNotExist");
    }

    #[test]
    fn test_tables_cover_same_keys() {
        for (key, _) in en::ENTRIES {
            assert!(has_key(Language::Ar, key), "missing Arabic entry for {key}");
        }
        for (key, _) in ar::ENTRIES {
            assert!(has_key(Language::En, key), "missing English entry for {key}");
        }
    }

    #[test]
    fn test_multiline_entries_loaded() {
        assert!(t(Language::En, "footerTagline").starts_with("Hartna Company"));
    }

    #[test]
    fn test_arabic_numerals() {
        assert_eq!(to_arabic_numerals(Language::Ar, "2,999"), "٢,٩٩٩");
        assert_eq!(to_arabic_numerals(Language::Ar, "SKU-15"), "SKU-١٥");
        assert_eq!(to_arabic_numerals(Language::En, "2,999"), "2,999");
    }

    #[test]
    fn test_helper() {
        let i18n = I18n::new(Language::Ar);
        assert_eq!(i18n.dir(), "rtl");
        assert_eq!(i18n.t("home"), "الرئيسية");
        assert_eq!(i18n.digits("42"), "٤٢");
        assert_eq!(i18n.pick("Cups", "أكواب"), "أكواب");
        assert_eq!(i18n.pick("Cups", ""), "Cups");
        assert_eq!(I18n::new(Language::En).pick("Cups", "أكواب"), "Cups");
    }
}
