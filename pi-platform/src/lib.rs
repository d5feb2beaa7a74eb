//! # Pi Platform Adapter
//!
//! Reqwest-based implementation of the [`PaymentPlatform`] port against the
//! Pi Network platform REST API.
//!
//! The adapter owns the two concerns the front-end must never see:
//! which host to talk to (sandbox vs production) and the server-held API
//! key, sent as a `Key`-scheme authorization header on every call.

use relay_types::{PaymentPlatform, PlatformError};
use reqwest::Client;
use serde_json::{Value, json};

/// Production platform endpoint.
const PRODUCTION_BASE_URL: &str = "https://api.minepi.com/v2/payments";

/// Sandbox platform endpoint. Same path scheme as production.
const SANDBOX_BASE_URL: &str = "https://api.sandbox.minepi.com/v2/payments";

/// HTTP client for the Pi platform payments API.
pub struct PiPlatformClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
}

impl PiPlatformClient {
    /// Creates a client against the sandbox or production host.
    ///
    /// `api_key` is optional to mirror the deployment reality: without a
    /// key the authorization header is omitted and the platform will
    /// reject the call, which surfaces as a normal upstream error.
    pub fn new(sandbox: bool, api_key: Option<String>) -> Self {
        let base_url = if sandbox {
            SANDBOX_BASE_URL
        } else {
            PRODUCTION_BASE_URL
        };

        Self {
            http: Client::new(),
            base_url: base_url.to_string(),
            api_key,
        }
    }

    /// Points the client at a custom base URL (tests, local stubs).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Returns the base URL currently in use.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn action_url(&self, payment_id: &str, action: &str) -> String {
        format!("{}/{}/{}", self.base_url, payment_id, action)
    }

    async fn post(&self, url: String, body: Value) -> Result<Value, PlatformError> {
        let mut req = self.http.post(&url).json(&body);
        if let Some(key) = &self.api_key {
            req = req.header("Authorization", format!("Key {}", key));
        }

        let resp = req
            .send()
            .await
            .map_err(|e| PlatformError::Transport(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| PlatformError::Transport(e.to_string()))?;

        if status.is_success() {
            serde_json::from_str(&text).map_err(|e| PlatformError::Decode(e.to_string()))
        } else {
            Err(PlatformError::Status {
                status: status.as_u16(),
                body: text,
            })
        }
    }
}

#[async_trait::async_trait]
impl PaymentPlatform for PiPlatformClient {
    async fn approve_payment(&self, payment_id: &str) -> Result<Value, PlatformError> {
        let url = self.action_url(payment_id, "approve");
        tracing::debug!(%url, "POST approve to platform");
        self.post(url, json!({})).await
    }

    async fn complete_payment(
        &self,
        payment_id: &str,
        txid: &str,
    ) -> Result<Value, PlatformError> {
        let url = self.action_url(payment_id, "complete");
        tracing::debug!(%url, "POST complete to platform");
        // paymentId travels in the path; the body carries only the txid.
        self.post(url, json!({ "txid": txid })).await
    }
}
