//! Web server for the Quid creator dashboard
#![forbid(unsafe_code)]

use quid_web::build_app;
use std::net::{IpAddr, SocketAddr};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Get configuration, remembering any load failure until logging is up
    let (config, config_error) = match quid_core::Config::load() {
        Ok(config) => (config, None),
        Err(e) => (quid_core::Config::default(), Some(e)),
    };

    // Initialize tracing
    quid_core::init_logging(&config.logging)?;

    if let Some(e) = config_error {
        warn!("Failed to load config: {}, using defaults", e);
    }

    // Build the application with configuration
    let app = build_app(config.clone());

    // Use configuration for web server address
    let host: IpAddr = config
        .server
        .host
        .parse()
        .map_err(|e| format!("Invalid web server host '{}': {}", config.server.host, e))?;
    let addr = SocketAddr::new(host, config.server.port);

    info!("Starting Quid dashboard server on {}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
