//! Fetches open XBTUSD orders from the testnet and pretty-prints the payload.
//!
//! Credentials come from `BITMEX_API_KEY` / `BITMEX_API_SECRET`.

use bitmex_testnet_client::{BitmexClient, BitmexConfig, Credentials};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let key = std::env::var("BITMEX_API_KEY").unwrap_or_default();
    let secret = std::env::var("BITMEX_API_SECRET").unwrap_or_default();

    let config = BitmexConfig::testnet(Some(Credentials::new(key, secret)))?;
    let client = BitmexClient::new(config);

    let raw = client.orders("XBTUSD").await?;
    let orders: serde_json::Value = serde_json::from_str(&raw)?;
    println!("{orders:#}");

    Ok(())
}
