//! HTTP Server configuration and startup.

use std::sync::Arc;

use axum::{
    Router,
    http::{Method, header},
    routing::{get, post},
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use relay_types::PaymentPlatform;

use super::handlers::{self, AppState};
use crate::RelayService;

/// HTTP Server for the relay API.
pub struct HttpServer<P: PaymentPlatform> {
    state: Arc<AppState<P>>,
    allow_origin: AllowOrigin,
}

impl<P: PaymentPlatform> HttpServer<P> {
    /// Creates a new HTTP server allowing any cross-origin caller.
    pub fn new(service: RelayService<P>) -> Self {
        Self {
            state: Arc::new(AppState { service }),
            allow_origin: AllowOrigin::any(),
        }
    }

    /// Creates a new HTTP server restricted to one front-end origin.
    pub fn with_allowed_origin(
        service: RelayService<P>,
        origin: axum::http::HeaderValue,
    ) -> Self {
        Self {
            state: Arc::new(AppState { service }),
            allow_origin: AllowOrigin::exact(origin),
        }
    }

    /// Builds the Axum router with all routes.
    ///
    /// Must stay in lockstep with `routes::ROUTES` - the integration tests
    /// compare the two.
    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(self.allow_origin.clone())
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE]);

        Router::new()
            .route("/", get(handlers::root))
            .route("/test", get(handlers::test_endpoint))
            .route("/api/payments/approve", post(handlers::approve_payment::<P>))
            .route(
                "/api/payments/complete",
                post(handlers::complete_payment::<P>),
            )
            .route(
                "/api/payments/webhook",
                post(handlers::receive_webhook::<P>).get(handlers::webhook_probe),
            )
            .route("/debug/routes", get(handlers::debug_routes))
            .layer(cors)
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Runs the server on the given address with graceful shutdown.
    pub async fn run(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Server listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
