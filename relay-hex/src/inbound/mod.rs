//! HTTP Inbound Adapter
//!
//! Axum-based HTTP server that drives the application layer.

mod handlers;
mod routes;
mod server;

pub use routes::route_table;
pub use server::HttpServer;
