//! Statically declared route table.
//!
//! The relay's surface is known at compile time, so the debug endpoint
//! reports this table instead of walking the live router's internals.
//! `HttpServer::router` registers exactly these routes; the integration
//! tests cross-check the two so they cannot drift.

use relay_types::RouteInfo;

/// Every route the relay serves, as `(method, path)` pairs, in
/// registration order.
pub(crate) const ROUTES: &[(&str, &str)] = &[
    ("GET", "/"),
    ("GET", "/test"),
    ("POST", "/api/payments/approve"),
    ("POST", "/api/payments/complete"),
    ("POST", "/api/payments/webhook"),
    ("GET", "/api/payments/webhook"),
    ("GET", "/debug/routes"),
];

/// The route table as wire DTOs.
pub fn route_table() -> Vec<RouteInfo> {
    ROUTES
        .iter()
        .map(|(method, path)| RouteInfo {
            path: (*path).to_string(),
            method: (*method).to_string(),
        })
        .collect()
}
