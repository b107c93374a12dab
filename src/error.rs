//! Error type shared by the localization engine.

use thiserror::Error;

/// Errors raised by the registry, route table and URL engine.
///
/// Only configuration errors are fatal. Request-time conditions such as an
/// unsupported target locale or an unresolvable host degrade to `None`
/// results instead of surfacing here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocalizationError {
    /// The supported-locale set is empty.
    #[error("Supported locales must be defined.")]
    UndefinedSupportedLocales,

    /// The configured default locale is not a supported locale.
    #[error("Default locale [{0}] is not in the supported locales.")]
    UnsupportedLocale(String),

    /// A locale key has no metadata in the catalog or registry.
    #[error("Unknown locale [{0}].")]
    UnknownLocale(String),

    /// A locale key appears more than once in the supported-locale set.
    #[error("Locale [{0}] is listed more than once in the supported locales.")]
    DuplicateLocale(String),

    /// No template exists for the route in the requested locale.
    #[error("No translation for route [{route}] in locale [{locale}].")]
    UnknownRoute { route: String, locale: String },

    /// A required placeholder had no supplied value.
    #[error("Missing parameter [{name}] for route template [{template}].")]
    MissingParameter { name: String, template: String },

    /// A parameter value would render as a `.` or `..` path segment.
    #[error("Parameter [{name}] value [{value}] is not a valid path segment in route template [{template}].")]
    InvalidParameter {
        name: String,
        value: String,
        template: String,
    },

    /// A route template could not be parsed.
    #[error("Invalid route template [{template}]: {reason}")]
    InvalidTemplate { template: String, reason: String },

    /// A route translation document could not be read or parsed.
    #[error("Failed to load route translations: {0}")]
    RouteFile(String),
}

/// Result alias for localization operations.
pub type Result<T> = std::result::Result<T, LocalizationError>;
