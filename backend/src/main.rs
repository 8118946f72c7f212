//! # Callback Server
//!
//! Thin entry point: builds the host-facing address queue and starts the
//! HTTP server. When this service is embedded in a larger application, the
//! embedding side holds the queue receiver instead of the logging task below.

use backend::{start_server, Config};
use shared::dto::callback::AddressUpdate;
use shared::utils::truncate_address;
use tokio::sync::mpsc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    let (updates_tx, mut updates_rx) = mpsc::channel::<AddressUpdate>(config.queue_capacity);

    // Standalone host hook: drain the queue and log each linked wallet.
    tokio::spawn(async move {
        while let Some(update) = updates_rx.recv().await {
            info!(
                "wallet linked: {} ({})",
                truncate_address(&update.address),
                update.received_at
            );
        }
    });

    start_server(config, updates_tx).await
}
