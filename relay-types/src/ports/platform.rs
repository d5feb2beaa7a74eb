//! Payment platform port trait.
//!
//! This is the single outbound port of the relay. The adapter owns the
//! HTTP transport, host selection, and the server-held API credential.

use serde_json::Value;

use crate::error::PlatformError;

/// Outbound port to the payment platform's REST API.
///
/// Both operations are independent relay calls - the platform, not the
/// relay, tracks payment state across them.
#[async_trait::async_trait]
pub trait PaymentPlatform: Send + Sync + 'static {
    /// Approves a pending payment identified by `payment_id`.
    ///
    /// Returns the platform's JSON body verbatim.
    async fn approve_payment(&self, payment_id: &str) -> Result<Value, PlatformError>;

    /// Completes an approved payment with the blockchain transaction id.
    ///
    /// Returns the platform's JSON body verbatim.
    async fn complete_payment(
        &self,
        payment_id: &str,
        txid: &str,
    ) -> Result<Value, PlatformError>;
}
