//! Error types for the payment relay.

/// Failure of an outbound call to the payment platform.
///
/// Clients of the relay see all three causes as the same 500 envelope;
/// the variants exist so logs can tell them apart.
#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    /// The request never produced a response (connect, DNS, timeout).
    #[error("request to payment platform failed: {0}")]
    Transport(String),

    /// The platform answered with a non-success status.
    #[error("payment platform returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The platform answered 2xx but the body was not valid JSON.
    #[error("invalid JSON from payment platform: {0}")]
    Decode(String),
}
