//! Data Transfer Objects (DTOs) for requests and responses.
//!
//! Wire field names follow the front-end contract (camelCase).

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ─────────────────────────────────────────────────────────────────────────────
// Payment lifecycle DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to relay a payment approval.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApproveRequest {
    /// Platform-issued payment identifier
    pub payment_id: String,
}

/// Request to relay a payment completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteRequest {
    /// Platform-issued payment identifier
    pub payment_id: String,
    /// Blockchain transaction id produced by the client
    pub txid: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Response envelopes
// ─────────────────────────────────────────────────────────────────────────────

/// Envelope returned when the upstream call succeeded.
///
/// `data` is the platform's JSON body, relayed without schema enforcement -
/// the relay does not own the upstream schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayResponse {
    pub success: bool,
    pub data: Value,
}

impl RelayResponse {
    /// Wraps an upstream body in the success envelope.
    pub fn ok(data: Value) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Envelope returned when the upstream call failed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Operation-level message ("Failed to approve payment")
    pub error: String,
    /// Display string of the underlying failure
    pub details: String,
}

/// Acknowledgement for an inbound webhook delivery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookAck {
    pub received: bool,
}

// ─────────────────────────────────────────────────────────────────────────────
// Route introspection DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// One entry of the relay's route table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteInfo {
    pub path: String,
    pub method: String,
}

/// Response body of the route introspection endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutesResponse {
    pub routes: Vec<RouteInfo>,
}
