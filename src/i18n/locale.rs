//! Locale type and the static metadata catalog.
//!
//! A `Locale` is an immutable value identified by its key. Metadata for
//! well-known locales lives in a constant table; supported-locale keys from
//! configuration are resolved against it.

use serde::Serialize;
use std::fmt;

/// Writing direction of a locale's script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    /// The direction as used in HTML `dir` attributes.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A supported locale and its display metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Locale {
    /// Short code used in URLs (e.g., "en", "es")
    key: String,

    /// English name of the locale (e.g., "Spanish")
    name: String,

    /// Name of the locale in its own language (e.g., "Español")
    native: String,

    /// ISO 15924 script tag (e.g., "Latn")
    script: String,

    direction: Direction,

    /// Regional variant tag (e.g., "en_GB")
    #[serde(skip_serializing_if = "Option::is_none")]
    regional: Option<String>,
}

impl Locale {
    /// Build a locale from explicit metadata.
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        native: impl Into<String>,
        script: impl Into<String>,
        direction: Direction,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            native: native.into(),
            script: script.into(),
            direction,
            regional: None,
        }
    }

    /// Attach a regional variant tag.
    pub fn with_regional(mut self, regional: impl Into<String>) -> Self {
        self.regional = Some(regional.into());
        self
    }

    /// Look up a locale in the static catalog.
    ///
    /// # Returns
    /// * `Some(Locale)` if the key is catalogued (exact, case-sensitive match)
    /// * `None` otherwise
    pub fn from_catalog(key: &str) -> Option<Locale> {
        CATALOG.iter().find(|entry| entry.key == key).map(|entry| {
            let locale = Locale::new(
                entry.key,
                entry.name,
                entry.native,
                entry.script,
                entry.direction,
            );
            match entry.regional {
                Some(regional) => locale.with_regional(regional),
                None => locale,
            }
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn native(&self) -> &str {
        &self.native
    }

    pub fn script(&self) -> &str {
        &self.script
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn regional(&self) -> Option<&str> {
        self.regional.as_deref()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)
    }
}

/// Catalog row. Kept as plain static data.
struct CatalogEntry {
    key: &'static str,
    name: &'static str,
    native: &'static str,
    script: &'static str,
    direction: Direction,
    regional: Option<&'static str>,
}

const fn entry(
    key: &'static str,
    name: &'static str,
    native: &'static str,
    script: &'static str,
    direction: Direction,
    regional: Option<&'static str>,
) -> CatalogEntry {
    CatalogEntry {
        key,
        name,
        native,
        script,
        direction,
        regional,
    }
}

static CATALOG: &[CatalogEntry] = &[
    entry("en", "English", "English", "Latn", Direction::Ltr, Some("en_GB")),
    entry("en-US", "English (United States)", "English (United States)", "Latn", Direction::Ltr, Some("en_US")),
    entry("es", "Spanish", "Español", "Latn", Direction::Ltr, Some("es_ES")),
    entry("fr", "French", "Français", "Latn", Direction::Ltr, Some("fr_FR")),
    entry("de", "German", "Deutsch", "Latn", Direction::Ltr, Some("de_DE")),
    entry("it", "Italian", "Italiano", "Latn", Direction::Ltr, Some("it_IT")),
    entry("pt", "Portuguese", "Português", "Latn", Direction::Ltr, Some("pt_PT")),
    entry("pt-BR", "Brazilian Portuguese", "Português do Brasil", "Latn", Direction::Ltr, Some("pt_BR")),
    entry("nl", "Dutch", "Nederlands", "Latn", Direction::Ltr, Some("nl_NL")),
    entry("pl", "Polish", "Polski", "Latn", Direction::Ltr, Some("pl_PL")),
    entry("tr", "Turkish", "Türkçe", "Latn", Direction::Ltr, Some("tr_TR")),
    entry("ru", "Russian", "Русский", "Cyrl", Direction::Ltr, Some("ru_RU")),
    entry("uk", "Ukrainian", "Українська", "Cyrl", Direction::Ltr, Some("uk_UA")),
    entry("el", "Greek", "Ελληνικά", "Grek", Direction::Ltr, Some("el_GR")),
    entry("ar", "Arabic", "العربية", "Arab", Direction::Rtl, Some("ar_AE")),
    entry("fa", "Persian", "فارسی", "Arab", Direction::Rtl, Some("fa_IR")),
    entry("he", "Hebrew", "עברית", "Hebr", Direction::Rtl, Some("he_IL")),
    entry("hi", "Hindi", "हिन्दी", "Deva", Direction::Ltr, Some("hi_IN")),
    entry("ja", "Japanese", "日本語", "Jpan", Direction::Ltr, Some("ja_JP")),
    entry("ko", "Korean", "한국어", "Hang", Direction::Ltr, Some("ko_KR")),
    entry("zh-Hans", "Chinese (Simplified)", "简体中文", "Hans", Direction::Ltr, Some("zh_CN")),
    entry("zh-Hant", "Chinese (Traditional)", "繁體中文", "Hant", Direction::Ltr, Some("zh_TW")),
];
