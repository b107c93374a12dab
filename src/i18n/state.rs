//! Request-scoped locale state.
//!
//! Each in-flight request owns its own `LocaleState`. The registry is shared
//! read-only behind an `Arc`; only `current` ever changes.

use crate::error::{LocalizationError, Result};
use crate::i18n::{Locale, LocaleRegistry};
use std::sync::Arc;
use tracing::debug;

/// Current and default locale for one operation or request.
#[derive(Debug, Clone)]
pub struct LocaleState {
    registry: Arc<LocaleRegistry>,
    default: Locale,
    current: Locale,
}

impl LocaleState {
    /// Create the state with `current` set to the configured default.
    ///
    /// # Errors
    /// `UnsupportedLocale` if `configured_default` is not in the registry.
    /// This is a startup failure, not a request-time condition.
    pub fn initialize(registry: Arc<LocaleRegistry>, configured_default: &str) -> Result<Self> {
        let default = registry
            .find(configured_default)
            .cloned()
            .ok_or_else(|| LocalizationError::UnsupportedLocale(configured_default.to_string()))?;

        Ok(Self {
            registry,
            current: default.clone(),
            default,
        })
    }

    /// Switch the current locale.
    ///
    /// # Returns
    /// * `Some(key)` when the locale is supported and now current
    /// * `None` when unsupported; the state is left unchanged
    pub fn set_current(&mut self, key: &str) -> Option<&str> {
        match self.registry.find(key) {
            Some(locale) => {
                self.current = locale.clone();
                Some(self.current.key())
            }
            None => {
                debug!("Ignoring unsupported locale '{}'", key);
                None
            }
        }
    }

    pub fn current(&self) -> &Locale {
        &self.current
    }

    pub fn default(&self) -> &Locale {
        &self.default
    }

    /// Check if the current locale is the default one.
    pub fn is_default_current(&self) -> bool {
        self.current.key() == self.default.key()
    }

    pub fn registry(&self) -> &LocaleRegistry {
        &self.registry
    }
}
