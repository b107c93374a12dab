use crate::i18n::{LocaleRegistry, RouteTranslations};
use crate::localizer::{Localizer, LocalizerOptions};
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{info, warn};
use url::Url;

#[derive(Debug, Clone)]
pub struct Config {
    // Links
    pub app_url: Option<String>,

    // Locales
    pub default_locale: String,
    pub supported_locales: Vec<String>,
    pub hide_default_locale_in_url: bool,

    // Route translations (JSON)
    pub routes_file: Option<String>,

    // HTTP host
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            app_url: std::env::var("APP_URL").ok().filter(|v| !v.trim().is_empty()),

            default_locale: std::env::var("LOCALIZATION_DEFAULT_LOCALE")
                .unwrap_or_else(|_| "en".to_string()),
            supported_locales: parse_list(
                &std::env::var("LOCALIZATION_SUPPORTED_LOCALES")
                    .unwrap_or_else(|_| "en,es,fr".to_string()),
            ),
            hide_default_locale_in_url: match std::env::var("LOCALIZATION_HIDE_DEFAULT_IN_URL") {
                Ok(v) => parse_bool(&v)
                    .with_context(|| format!("Invalid LOCALIZATION_HIDE_DEFAULT_IN_URL: {}", v))?,
                Err(_) => false,
            },

            routes_file: std::env::var("ROUTES_FILE").ok().filter(|v| !v.trim().is_empty()),

            port: match std::env::var("PORT") {
                Ok(v) => v.parse().with_context(|| format!("Invalid PORT: {}", v))?,
                Err(_) => 8080,
            },
        })
    }

    /// Validate the locale settings and build the engine.
    ///
    /// Fails on an empty or unknown supported-locale list, an unsupported
    /// default locale, an invalid `APP_URL` or an unreadable routes file.
    pub fn build_localizer(&self) -> Result<Localizer> {
        let registry = Arc::new(
            LocaleRegistry::validate(&self.supported_locales)
                .context("Invalid LOCALIZATION_SUPPORTED_LOCALES")?,
        );

        let routes = match &self.routes_file {
            Some(path) => {
                let routes = RouteTranslations::from_json_file(path)?;
                info!("Loaded {} translated routes from {}", routes.len(), path);
                for locale in routes.locales() {
                    if !registry.contains(locale) {
                        warn!("Routes file has templates for unsupported locale '{}'", locale);
                    }
                }
                routes
            }
            None => RouteTranslations::new(),
        };

        let base_url = self
            .app_url
            .as_deref()
            .map(Url::parse)
            .transpose()
            .context("Invalid APP_URL")?;

        let options = LocalizerOptions {
            hide_default_locale_in_url: self.hide_default_locale_in_url,
            base_url,
        };

        let localizer = Localizer::new(registry, Arc::new(routes), &self.default_locale, options)
            .context("Invalid LOCALIZATION_DEFAULT_LOCALE")?;
        Ok(localizer)
    }
}

fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => anyhow::bail!("expected a boolean, got '{}'", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    const VARS: [&str; 6] = [
        "APP_URL",
        "LOCALIZATION_DEFAULT_LOCALE",
        "LOCALIZATION_SUPPORTED_LOCALES",
        "LOCALIZATION_HIDE_DEFAULT_IN_URL",
        "ROUTES_FILE",
        "PORT",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    fn config() -> Config {
        Config {
            app_url: Some("http://localhost/".to_string()),
            default_locale: "en".to_string(),
            supported_locales: vec!["en".to_string(), "es".to_string(), "fr".to_string()],
            hide_default_locale_in_url: false,
            routes_file: None,
            port: 8080,
        }
    }

    // ==================== from_env Tests ====================

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        let config = Config::from_env().unwrap();
        assert_eq!(config.app_url, None);
        assert_eq!(config.default_locale, "en");
        assert_eq!(config.supported_locales, vec!["en", "es", "fr"]);
        assert!(!config.hide_default_locale_in_url);
        assert_eq!(config.port, 8080);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var("APP_URL", "https://example.org/");
        std::env::set_var("LOCALIZATION_DEFAULT_LOCALE", "es");
        std::env::set_var("LOCALIZATION_SUPPORTED_LOCALES", " es , ar,, en ");
        std::env::set_var("LOCALIZATION_HIDE_DEFAULT_IN_URL", "TRUE");
        std::env::set_var("PORT", "3000");

        let config = Config::from_env().unwrap();
        clear_env();

        assert_eq!(config.app_url.as_deref(), Some("https://example.org/"));
        assert_eq!(config.default_locale, "es");
        assert_eq!(config.supported_locales, vec!["es", "ar", "en"]);
        assert!(config.hide_default_locale_in_url);
        assert_eq!(config.port, 3000);
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_values() {
        clear_env();
        std::env::set_var("LOCALIZATION_HIDE_DEFAULT_IN_URL", "maybe");
        assert!(Config::from_env().is_err());
        clear_env();

        std::env::set_var("PORT", "not-a-port");
        assert!(Config::from_env().is_err());
        clear_env();
    }

    // ==================== build_localizer Tests ====================

    #[test]
    fn test_build_localizer() {
        let localizer = config().build_localizer().unwrap();
        assert_eq!(localizer.supported_locale_keys(), vec!["en", "es", "fr"]);
        assert!(!localizer.hides_default_locale());
        assert_eq!(localizer.base_url().map(Url::as_str), Some("http://localhost/"));
    }

    #[test]
    fn test_build_localizer_unsupported_default() {
        let mut config = config();
        config.default_locale = "jp".to_string();
        let err = config.build_localizer().unwrap_err();
        assert!(format!("{:#}", err).contains("[jp]"));
    }

    #[test]
    fn test_build_localizer_empty_locales() {
        let mut config = config();
        config.supported_locales.clear();
        let err = config.build_localizer().unwrap_err();
        assert!(format!("{:#}", err).contains("Supported locales must be defined."));
    }

    #[test]
    fn test_build_localizer_invalid_app_url() {
        let mut config = config();
        config.app_url = Some("not a url".to_string());
        assert!(config.build_localizer().is_err());
    }

    #[test]
    fn test_build_localizer_loads_routes_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "en": {{ "routes.about": "about" }}, "es": {{ "routes.about": "acerca" }} }}"#
        )
        .unwrap();

        let mut config = config();
        config.routes_file = Some(file.path().to_str().unwrap().to_string());
        let localizer = config.build_localizer().unwrap();
        let ctx = localizer.context();

        assert_eq!(localizer.routes().len(), 1);
        assert_eq!(
            localizer.get_localized_url(&ctx, Some("es"), Some("http://localhost/about")),
            Some("http://localhost/es/acerca".to_string())
        );
    }

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("on").unwrap());
        assert!(!parse_bool("0").unwrap());
        assert!(parse_bool("2").is_err());
    }
}
