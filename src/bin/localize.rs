//! Localize binary - rewrites a single URL using the environment configuration
//!
//! Usage:
//!   cargo run --bin localize -- <url> [locale]               # Swap the locale prefix
//!   cargo run --bin localize -- <url> [locale] --translate   # Also translate route paths
//!   cargo run --bin localize -- <url> --canonical            # Remove the locale prefix
//!
//! Optional environment variables:
//! - APP_URL (base for relative URLs)
//! - LOCALIZATION_DEFAULT_LOCALE (defaults to en)
//! - LOCALIZATION_SUPPORTED_LOCALES (defaults to en,es,fr)
//! - LOCALIZATION_HIDE_DEFAULT_IN_URL (defaults to false)
//! - ROUTES_FILE (JSON route translations)

use anyhow::{bail, Result};
use tracing::info;
use url_localization::config::Config;

fn main() -> Result<()> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("url_localization=warn".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let translate = args.iter().any(|a| a == "--translate");
    let canonical = args.iter().any(|a| a == "--canonical");
    let positional: Vec<&str> = args
        .iter()
        .filter(|a| !a.starts_with("--"))
        .map(String::as_str)
        .collect();

    let (url, locale) = match positional.as_slice() {
        [url] => (*url, None),
        [url, locale] => (*url, Some(*locale)),
        _ => bail!("Usage: localize <url> [locale] [--translate | --canonical]"),
    };

    let config = Config::from_env()?;
    let localizer = config.build_localizer()?;
    let ctx = localizer.context();

    let localized = if canonical {
        localizer.non_localized_url(&ctx, Some(url))
    } else if translate {
        localizer.get_localized_url(&ctx, locale, Some(url))
    } else {
        localizer.localize_url(&ctx, locale, Some(url))
    };

    match localized {
        Some(localized) => {
            info!("Localized {} -> {}", url, localized);
            println!("{}", localized);
            Ok(())
        }
        None => bail!("No URL available for '{}'", url),
    }
}
