//! Campaign event indexer — entry point.
//!
//! One process, two jobs: a background poller copies campaign-ledger
//! contract events from Soroban RPC into SQLite, and a small REST API
//! serves the stored history.

mod api;
mod config;
mod db;
mod errors;
mod events;
mod indexer;
mod rpc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::db::EventStore;
use crate::indexer::Poller;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env first so RUST_LOG set there reaches the subscriber.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::from_env().context("loading configuration")?;
    let store = EventStore::open(&config.database_url)
        .await
        .context("opening event store")?;

    let http = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(30))
        .build()?;
    tokio::spawn(Poller::new(store.clone(), http, config.clone()).run());

    let addr = format!("0.0.0.0:{}", config.api_port);
    info!("serving API on http://{addr}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, api::router(store)).await?;

    Ok(())
}
