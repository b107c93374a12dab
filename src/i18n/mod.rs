//! Internationalization (i18n) building blocks for URL localization.
//!
//! # Architecture
//!
//! - `locale`: `Locale` value type and the static metadata catalog
//! - `registry`: the validated, ordered set of supported locales
//! - `state`: request-scoped current/default locale
//! - `routes`: per-locale route templates, substitution and matching
//! - `negotiation`: `Accept-Language` parsing and best-match selection
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use url_localization::i18n::{LocaleRegistry, LocaleState};
//!
//! let registry = Arc::new(LocaleRegistry::validate(&["en", "es"]).unwrap());
//! let mut state = LocaleState::initialize(registry, "en").unwrap();
//!
//! assert_eq!(state.set_current("es"), Some("es"));
//! assert_eq!(state.set_current("de"), None);
//! assert_eq!(state.current().native(), "Español");
//! ```

mod locale;
mod negotiation;
mod registry;
mod routes;
mod state;

pub use locale::{Direction, Locale};
pub use negotiation::{negotiate, parse_accept_language, LanguageRange};
pub use registry::LocaleRegistry;
pub use routes::{substitute, RouteKey, RouteMatch, RouteTemplate, RouteTranslations};
pub(crate) use routes::decode_segment;
pub use state::LocaleState;
