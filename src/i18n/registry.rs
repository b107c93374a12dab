//! Locale registry: the validated set of supported locales.
//!
//! The registry is built once at startup from configuration and is immutable
//! afterward. It keeps configuration order for enumeration and a hash index
//! for constant-time membership checks.

use crate::error::{LocalizationError, Result};
use crate::i18n::Locale;
use std::collections::HashMap;

/// Ordered, key-unique collection of supported locales.
#[derive(Debug, Clone)]
pub struct LocaleRegistry {
    locales: Vec<Locale>,
    index: HashMap<String, usize>,
}

impl LocaleRegistry {
    /// Build a registry from supported locale keys, resolving metadata from
    /// the static catalog.
    ///
    /// # Errors
    /// * `UndefinedSupportedLocales` if `keys` is empty
    /// * `UnknownLocale` if a key is not catalogued
    /// * `DuplicateLocale` if a key repeats
    pub fn validate<S: AsRef<str>>(keys: &[S]) -> Result<LocaleRegistry> {
        let locales = keys
            .iter()
            .map(|key| {
                let key = key.as_ref();
                Locale::from_catalog(key)
                    .ok_or_else(|| LocalizationError::UnknownLocale(key.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;

        Self::new(locales)
    }

    /// Build a registry from caller-supplied locale metadata.
    ///
    /// # Errors
    /// Same as [`LocaleRegistry::validate`], minus the catalog lookup.
    pub fn new(locales: Vec<Locale>) -> Result<LocaleRegistry> {
        if locales.is_empty() {
            return Err(LocalizationError::UndefinedSupportedLocales);
        }

        let mut index = HashMap::with_capacity(locales.len());
        for (position, locale) in locales.iter().enumerate() {
            if index.insert(locale.key().to_string(), position).is_some() {
                return Err(LocalizationError::DuplicateLocale(locale.key().to_string()));
            }
        }

        Ok(LocaleRegistry { locales, index })
    }

    /// Check if a locale key is supported.
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Get a supported locale by key.
    ///
    /// # Errors
    /// `UnknownLocale` if the key is not supported.
    pub fn get(&self, key: &str) -> Result<&Locale> {
        self.find(key)
            .ok_or_else(|| LocalizationError::UnknownLocale(key.to_string()))
    }

    /// Get a supported locale by key, if present.
    pub fn find(&self, key: &str) -> Option<&Locale> {
        self.index.get(key).map(|&position| &self.locales[position])
    }

    /// Supported locale keys, in configuration order.
    pub fn keys(&self) -> Vec<&str> {
        self.locales.iter().map(Locale::key).collect()
    }

    /// Iterate supported locales in configuration order.
    pub fn iter(&self) -> impl Iterator<Item = &Locale> {
        self.locales.iter()
    }

    pub fn len(&self) -> usize {
        self.locales.len()
    }

    /// Always false for a validated registry; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}
