//! # Relay Types
//!
//! Wire types and port traits for the payment relay service.
//! This crate has ZERO IO dependencies - only data structures,
//! error types, and trait definitions.
//!
//! ## Architecture
//!
//! - `dto` - Request/response shapes crossing the relay's HTTP boundary
//! - `error` - Upstream failure taxonomy
//! - `ports` - Trait the outbound platform adapter must implement

pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use dto::{
    ApproveRequest, CompleteRequest, ErrorResponse, RelayResponse, RouteInfo, RoutesResponse,
    WebhookAck,
};
pub use error::PlatformError;
pub use ports::PaymentPlatform;
