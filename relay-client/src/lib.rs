//! # Relay Client SDK
//!
//! A typed Rust client for the payment relay API.

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;

use relay_types::{ApproveRequest, CompleteRequest, RelayResponse, RoutesResponse, WebhookAck};

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Relay API client.
pub struct RelayClient {
    base_url: String,
    http: Client,
}

impl RelayClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Fetches the liveness string from the relay root.
    pub async fn health(&self) -> Result<String, ClientError> {
        let resp = self.http.get(format!("{}/", self.base_url)).send().await?;
        let status = resp.status();
        let text = resp.text().await?;
        if status.is_success() {
            Ok(text)
        } else {
            Err(ClientError::Api {
                status: status.as_u16(),
                message: text,
            })
        }
    }

    /// Calls the static test probe.
    pub async fn test_probe(&self) -> Result<Value, ClientError> {
        self.get("/test").await
    }

    /// Relays a payment approval.
    pub async fn approve_payment(&self, payment_id: &str) -> Result<RelayResponse, ClientError> {
        let req = ApproveRequest {
            payment_id: payment_id.to_string(),
        };
        self.post("/api/payments/approve", &req).await
    }

    /// Relays a payment completion.
    pub async fn complete_payment(
        &self,
        payment_id: &str,
        txid: &str,
    ) -> Result<RelayResponse, ClientError> {
        let req = CompleteRequest {
            payment_id: payment_id.to_string(),
            txid: txid.to_string(),
        };
        self.post("/api/payments/complete", &req).await
    }

    /// Delivers a webhook payload to the relay, as the platform would.
    pub async fn send_webhook(&self, payload: &Value) -> Result<WebhookAck, ClientError> {
        self.post("/api/payments/webhook", payload).await
    }

    /// Fetches the relay's route table.
    pub async fn routes(&self) -> Result<RoutesResponse, ClientError> {
        self.get("/debug/routes").await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let resp = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?;
        self.handle_response(resp).await
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let resp = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .await?;
        self.handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
                .unwrap_or(body);
            Err(ClientError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}
