//! # Relay Hex
//!
//! Application service layer and HTTP adapter for the payment relay.
//!
//! ## Architecture
//!
//! - `service` - Application service (drives the platform port)
//! - `inbound` - HTTP adapter (Axum server, handlers, route table)
//!
//! The service is generic over `P: PaymentPlatform`, allowing the real
//! reqwest adapter or a test stub to be injected.

pub mod inbound;
pub mod service;


pub use service::RelayService;
