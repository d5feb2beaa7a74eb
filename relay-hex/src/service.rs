//! Relay Application Service
//!
//! Forwards payment lifecycle calls through the platform port and
//! acknowledges inbound webhooks. Contains NO transport logic - the
//! adapter owns hosts, credentials, and HTTP.

use serde_json::Value;

use relay_types::{ApproveRequest, CompleteRequest, PaymentPlatform, PlatformError, WebhookAck};

/// Application service for relay operations.
///
/// Generic over `P: PaymentPlatform` - the adapter is injected at compile
/// time, so tests run against an in-memory stub instead of the network.
pub struct RelayService<P: PaymentPlatform> {
    platform: P,
}

impl<P: PaymentPlatform> RelayService<P> {
    /// Creates a new relay service with the given platform adapter.
    pub fn new(platform: P) -> Self {
        Self { platform }
    }

    /// Returns a reference to the underlying platform adapter.
    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Relays a payment approval to the platform.
    ///
    /// Approve and complete are independent calls; the relay does not
    /// check that an approval precedes a completion.
    pub async fn approve(&self, req: ApproveRequest) -> Result<Value, PlatformError> {
        tracing::info!("Approving payment: {}", req.payment_id);

        let data = self.platform.approve_payment(&req.payment_id).await?;

        tracing::info!("Payment approved: {}", data);
        Ok(data)
    }

    /// Relays a payment completion to the platform.
    pub async fn complete(&self, req: CompleteRequest) -> Result<Value, PlatformError> {
        tracing::info!("Completing payment: {} with txid: {}", req.payment_id, req.txid);

        let data = self
            .platform
            .complete_payment(&req.payment_id, &req.txid)
            .await?;

        tracing::info!("Payment completed: {}", data);
        Ok(data)
    }

    /// Logs an inbound webhook payload and acknowledges it.
    ///
    /// Deliveries are not signature-checked and the payload is not
    /// validated; treat it as untrusted input. This path never fails.
    pub fn receive_webhook(&self, payload: Value) -> WebhookAck {
        tracing::info!("Received webhook from platform: {}", payload);

        WebhookAck { received: true }
    }
}
