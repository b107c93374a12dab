//! Locale-aware URL rewriting.
//!
//! Detects the locale segment of a request path, translates route paths
//! between locales, and adds, swaps or removes locale prefixes according to
//! a display policy.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use url_localization::i18n::{LocaleRegistry, RouteKey, RouteTranslations};
//! use url_localization::localizer::{Localizer, LocalizerOptions};
//!
//! let registry = Arc::new(LocaleRegistry::validate(&["en", "es"]).unwrap());
//! let mut routes = RouteTranslations::new();
//! routes.add_translation("routes.view", "en", "view/{id}").unwrap();
//! routes.add_translation("routes.view", "es", "ver/{id}").unwrap();
//!
//! let options = LocalizerOptions {
//!     hide_default_locale_in_url: true,
//!     base_url: Some("http://localhost/".parse().unwrap()),
//! };
//! let localizer = Localizer::new(registry, Arc::new(routes), "en", options).unwrap();
//! let ctx = localizer.context();
//!
//! assert_eq!(
//!     localizer.get_localized_url(&ctx, Some("es"), Some("http://localhost/view/1")).as_deref(),
//!     Some("http://localhost/es/ver/1")
//! );
//! assert_eq!(
//!     localizer.url_from_route_name(&ctx, "en", &RouteKey::from("routes.view"), &[("id", "1")])
//!         .unwrap()
//!         .as_deref(),
//!     Some("http://localhost/view/1")
//! );
//! ```

pub mod config;
pub mod error;
pub mod i18n;
pub mod localizer;
pub mod server;

pub use error::{LocalizationError, Result};
pub use localizer::{Localizer, LocalizerOptions, RequestContext};
