//! # Relay Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Build the Pi platform client
//! - Create the relay service
//! - Start the HTTP server

mod config;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pi_platform::PiPlatformClient;
use relay_hex::{RelayService, inbound::HttpServer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,relay_app=debug,relay_hex=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = config::Config::from_env()?;

    tracing::info!("Starting relay server on port {}", config.port);
    tracing::info!("Sandbox mode: {}", config.sandbox_mode);
    if config.pi_api_key.is_none() {
        tracing::warn!("PI_API_KEY not set; upstream calls will be sent unauthenticated");
    }

    // Build the platform adapter
    let platform = PiPlatformClient::new(config.sandbox_mode, config.pi_api_key.clone());

    // Create the relay service
    let service = RelayService::new(platform);

    // Create the HTTP server, restricted to the configured origin
    let server = if config.allowed_origin == "*" {
        HttpServer::new(service)
    } else {
        HttpServer::with_allowed_origin(service, config.allowed_origin.parse()?)
    };

    tracing::info!("Available endpoints:");
    for route in relay_hex::inbound::route_table() {
        tracing::info!("- {} {}", route.method, route.path);
    }

    let addr = format!("0.0.0.0:{}", config.port);
    server.run(&addr).await?;

    Ok(())
}
