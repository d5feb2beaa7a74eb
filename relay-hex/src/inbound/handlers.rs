//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::Value;

use relay_types::{
    ApproveRequest, CompleteRequest, ErrorResponse, PaymentPlatform, PlatformError, RelayResponse,
    RoutesResponse, WebhookAck,
};

use super::routes::route_table;
use crate::RelayService;

/// Application state shared across handlers.
pub struct AppState<P: PaymentPlatform> {
    pub service: RelayService<P>,
}

/// An upstream failure plus the operation it interrupted.
///
/// Every failure maps to the same 500 envelope - clients cannot (and by
/// contract should not) distinguish bad input from an unavailable platform.
pub struct ApiError {
    context: &'static str,
    source: PlatformError,
}

impl ApiError {
    fn new(context: &'static str, source: PlatformError) -> Self {
        Self { context, source }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!("{}: {}", self.context, self.source);

        let body = ErrorResponse {
            error: self.context.to_string(),
            details: self.source.to_string(),
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

/// Liveness probe.
pub async fn root() -> &'static str {
    "Pi Payments Backend Server is running!"
}

/// Static test probe.
pub async fn test_endpoint() -> impl IntoResponse {
    Json(serde_json::json!({ "message": "Test endpoint is working" }))
}

/// Relay a payment approval to the platform.
#[tracing::instrument(skip(state), fields(payment_id = %req.payment_id))]
pub async fn approve_payment<P: PaymentPlatform>(
    State(state): State<Arc<AppState<P>>>,
    Json(req): Json<ApproveRequest>,
) -> Result<Json<RelayResponse>, ApiError> {
    let data = state
        .service
        .approve(req)
        .await
        .map_err(|e| ApiError::new("Failed to approve payment", e))?;

    Ok(Json(RelayResponse::ok(data)))
}

/// Relay a payment completion to the platform.
#[tracing::instrument(skip(state), fields(payment_id = %req.payment_id, txid = %req.txid))]
pub async fn complete_payment<P: PaymentPlatform>(
    State(state): State<Arc<AppState<P>>>,
    Json(req): Json<CompleteRequest>,
) -> Result<Json<RelayResponse>, ApiError> {
    let data = state
        .service
        .complete(req)
        .await
        .map_err(|e| ApiError::new("Failed to complete payment", e))?;

    Ok(Json(RelayResponse::ok(data)))
}

/// Accept a webhook delivery from the platform.
///
/// Deliveries are unauthenticated - no signature or shared-secret check -
/// so the payload is logged and acknowledged, nothing more. Never fails.
#[tracing::instrument(skip(state, payload))]
pub async fn receive_webhook<P: PaymentPlatform>(
    State(state): State<Arc<AppState<P>>>,
    Json(payload): Json<Value>,
) -> Json<WebhookAck> {
    Json(state.service.receive_webhook(payload))
}

/// Explain the webhook endpoint to a browser poking at it.
pub async fn webhook_probe() -> impl IntoResponse {
    tracing::info!("GET request received on webhook endpoint");

    Json(serde_json::json!({
        "message": "Webhook endpoint is working (GET)",
        "note": "The payment platform delivers webhooks via POST, not GET",
    }))
}

/// Report the statically declared route table.
pub async fn debug_routes() -> Json<RoutesResponse> {
    Json(RoutesResponse {
        routes: route_table(),
    })
}
