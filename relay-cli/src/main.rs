//! Relay CLI
//!
//! Command-line client for the payment relay API. Useful for poking a
//! deployed relay without a front-end.

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde_json::Value;

use relay_client::RelayClient;

#[derive(Parser)]
#[command(name = "relay")]
#[command(author, version, about = "Payment relay CLI client", long_about = None)]
struct Cli {
    /// Base URL of the relay API
    #[arg(long, env = "RELAY_API_URL", default_value = "http://localhost:10000")]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check relay liveness
    Health,
    /// Call the static test probe
    Test,
    /// Relay a payment approval
    Approve {
        /// Platform payment identifier
        payment_id: String,
    },
    /// Relay a payment completion
    Complete {
        /// Platform payment identifier
        payment_id: String,
        /// Blockchain transaction id
        txid: String,
    },
    /// Deliver a webhook payload to the relay
    Webhook {
        /// JSON payload (defaults to an empty object)
        #[arg(long, default_value = "{}")]
        payload: String,
    },
    /// List the relay's routes
    Routes,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let client = RelayClient::new(&cli.api_url);

    match cli.command {
        Commands::Health => {
            let text = client.health().await?;
            println!("{text}");
        }
        Commands::Test => {
            let body = client.test_probe().await?;
            print_json(&body)?;
        }
        Commands::Approve { payment_id } => {
            let resp = client.approve_payment(&payment_id).await?;
            print_json(&serde_json::to_value(resp)?)?;
        }
        Commands::Complete { payment_id, txid } => {
            let resp = client.complete_payment(&payment_id, &txid).await?;
            print_json(&serde_json::to_value(resp)?)?;
        }
        Commands::Webhook { payload } => {
            let payload: Value = serde_json::from_str(&payload)?;
            let ack = client.send_webhook(&payload).await?;
            print_json(&serde_json::to_value(ack)?)?;
        }
        Commands::Routes => {
            let routes = client.routes().await?;
            print_json(&serde_json::to_value(routes)?)?;
        }
    }

    Ok(())
}

fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
