//! Demo driving the full relay flow against an in-process server.
//!
//! The platform adapter is replaced with a canned stub so the demo runs
//! offline - everything else (router, envelopes, client SDK) is the real
//! thing.
//!
//! Run with: cargo run -p relay-app --example relay_demo

use async_trait::async_trait;
use serde_json::{Value, json};
use tokio::net::TcpListener;

use relay_client::RelayClient;
use relay_hex::{RelayService, inbound::HttpServer};
use relay_types::{PaymentPlatform, PlatformError};

/// Stand-in for the Pi platform answering with plausible payment JSON.
struct CannedPlatform;

#[async_trait]
impl PaymentPlatform for CannedPlatform {
    async fn approve_payment(&self, payment_id: &str) -> Result<Value, PlatformError> {
        Ok(json!({
            "identifier": payment_id,
            "status": { "developer_approved": true, "developer_completed": false },
        }))
    }

    async fn complete_payment(
        &self,
        payment_id: &str,
        txid: &str,
    ) -> Result<Value, PlatformError> {
        Ok(json!({
            "identifier": payment_id,
            "transaction": { "txid": txid, "verified": true },
            "status": { "developer_approved": true, "developer_completed": true },
        }))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    // Bind an ephemeral port and serve the relay on it
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    let service = RelayService::new(CannedPlatform);
    let router = HttpServer::new(service).router();

    println!("🚀 Relay serving on {addr}");

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    // Drive it with the client SDK
    let client = RelayClient::new(format!("http://{addr}"));

    println!("\n── Health ──");
    println!("{}", client.health().await?);

    println!("\n── Approve ──");
    let approved = client.approve_payment("demo-payment-1").await?;
    println!("{}", serde_json::to_string_pretty(&approved.data)?);

    println!("\n── Complete ──");
    let completed = client.complete_payment("demo-payment-1", "demo-txid-1").await?;
    println!("{}", serde_json::to_string_pretty(&completed.data)?);

    println!("\n── Webhook ──");
    let ack = client
        .send_webhook(&json!({ "payment": { "identifier": "demo-payment-1" } }))
        .await?;
    println!("received: {}", ack.received);

    println!("\n── Routes ──");
    for route in client.routes().await?.routes {
        println!("- {} {}", route.method, route.path);
    }

    Ok(())
}
