//! HTTP Error Handler demo server
//!
//! Serves a handful of failing routes with the error-handling middleware
//! installed, configured from a TOML file.

use http_error_handler::api::create_router;
use http_error_handler::config::{Config, ConfigError};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Default configuration file path.
const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_path =
        std::env::var("CONFIG_PATH").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let config = match Config::load(&config_path) {
        Ok(config) => config,
        Err(ConfigError::ReadError(e)) => {
            warn!("Could not read {}: {}; using defaults", config_path, e);
            Config::default()
        }
        Err(e) => return Err(e.into()),
    };

    let handler = config.errors.handler();
    info!(
        suppress_internal = handler.suppress_internal(),
        "Error handler configured"
    );

    // Build the router
    let app = create_router(handler).layer(TraceLayer::new_for_http());

    // Start the server
    let addr = config.server.addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
