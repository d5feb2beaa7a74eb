//! End-to-end test: real server on an ephemeral port, driven through the
//! client SDK, with a stub standing in for the Pi platform.

use async_trait::async_trait;
use serde_json::{Value, json};
use tokio::net::TcpListener;

use relay_client::{ClientError, RelayClient};
use relay_hex::{RelayService, inbound::HttpServer};
use relay_types::{PaymentPlatform, PlatformError};

struct StubPlatform {
    fail: bool,
}

#[async_trait]
impl PaymentPlatform for StubPlatform {
    async fn approve_payment(&self, payment_id: &str) -> Result<Value, PlatformError> {
        if self.fail {
            return Err(PlatformError::Status {
                status: 502,
                body: "nope".into(),
            });
        }
        Ok(json!({ "identifier": payment_id }))
    }

    async fn complete_payment(
        &self,
        payment_id: &str,
        txid: &str,
    ) -> Result<Value, PlatformError> {
        if self.fail {
            return Err(PlatformError::Status {
                status: 502,
                body: "nope".into(),
            });
        }
        Ok(json!({ "identifier": payment_id, "transaction": { "txid": txid } }))
    }
}

async fn spawn_relay(platform: StubPlatform) -> RelayClient {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let router = HttpServer::new(RelayService::new(platform)).router();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    RelayClient::new(format!("http://{addr}"))
}

#[tokio::test]
async fn client_round_trips_the_full_surface() {
    let client = spawn_relay(StubPlatform { fail: false }).await;

    let health = client.health().await.unwrap();
    assert_eq!(health, "Pi Payments Backend Server is running!");

    let probe = client.test_probe().await.unwrap();
    assert_eq!(probe["message"], "Test endpoint is working");

    let approved = client.approve_payment("P1").await.unwrap();
    assert!(approved.success);
    assert_eq!(approved.data, json!({ "identifier": "P1" }));

    let completed = client.complete_payment("P1", "T1").await.unwrap();
    assert!(completed.success);
    assert_eq!(completed.data["transaction"]["txid"], "T1");

    let ack = client.send_webhook(&json!({ "anything": [1, 2, 3] })).await.unwrap();
    assert!(ack.received);

    let routes = client.routes().await.unwrap();
    assert_eq!(routes.routes.len(), 7);
}

#[tokio::test]
async fn client_surfaces_the_error_envelope() {
    let client = spawn_relay(StubPlatform { fail: true }).await;

    let err = client.approve_payment("P1").await.unwrap_err();

    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "Failed to approve payment");
        }
        other => panic!("expected API error, got {other:?}"),
    }
}
