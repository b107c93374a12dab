use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;
use url_localization::{config::Config, server};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("url_localization=info".parse()?)
                .add_directive("tower_http=info".parse()?),
        )
        .init();

    info!("Starting URL localization service");

    // Load configuration and validate locales (fatal on misconfiguration)
    let config = Config::from_env()?;
    let localizer = config.build_localizer()?;

    info!(
        "Supported locales: {} (default: {}, hidden in URLs: {})",
        localizer.supported_locale_keys().join(", "),
        config.default_locale,
        localizer.hides_default_locale()
    );

    let app = server::router(Arc::new(localizer));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
