//! Background poller: drains Soroban `getEvents` pages into the store.

use std::time::Duration;

use reqwest::Client;
use tracing::{info, warn};

use crate::config::Config;
use crate::db::{Checkpoint, EventStore};
use crate::errors::Result;
use crate::rpc;

pub struct Poller {
    store: EventStore,
    http: Client,
    config: Config,
}

impl Poller {
    pub fn new(store: EventStore, http: Client, config: Config) -> Self {
        Self {
            store,
            http,
            config,
        }
    }

    /// Run forever. Each pass fetches one page of contract events, stores
    /// whatever is new, and persists the advanced checkpoint so a restart
    /// picks up exactly where this process stopped.
    pub async fn run(self) {
        info!(contract = %self.config.contract_id, "poller starting");

        let mut checkpoint = self.starting_checkpoint().await;
        info!(ledger = checkpoint.ledger, "resuming");

        let interval = Duration::from_secs(self.config.poll_interval_secs);
        loop {
            if let Err(e) = self.drain_page(&mut checkpoint).await {
                warn!("poll pass failed: {e}");
            }
            tokio::time::sleep(interval).await;
        }
    }

    /// The stored checkpoint when one exists, the configured start ledger
    /// otherwise.
    async fn starting_checkpoint(&self) -> Checkpoint {
        match self.store.checkpoint().await {
            Ok(cp) if cp.ledger > 0 => cp,
            Ok(_) => Checkpoint {
                ledger: self.config.start_ledger as i64,
                cursor: None,
            },
            Err(e) => {
                warn!("could not read checkpoint, using configured start: {e}");
                Checkpoint {
                    ledger: self.config.start_ledger as i64,
                    cursor: None,
                }
            }
        }
    }

    /// Fetch and store one page of events, then advance `checkpoint`.
    ///
    /// While the RPC hands back a pagination cursor the start ledger stays
    /// put and the cursor walks the rest of the range; once the page runs
    /// dry the checkpoint jumps to the latest ledger the RPC reported.
    async fn drain_page(&self, checkpoint: &mut Checkpoint) -> Result<()> {
        let (raw, next_cursor, latest_ledger) = rpc::fetch_events(
            &self.http,
            &self.config.rpc_url,
            &self.config.contract_id,
            checkpoint.ledger as u32,
            checkpoint.cursor.as_deref(),
            self.config.events_per_page,
        )
        .await?;

        if !raw.is_empty() {
            let decoded = rpc::decode_events(&raw, &self.config.contract_id);
            let fresh = self.store.record(&decoded).await?;
            info!(fetched = raw.len(), fresh, "stored events");
        }

        if let Some(latest) = latest_ledger {
            checkpoint.ledger = checkpoint.ledger.max(latest as i64);
        }
        checkpoint.cursor = next_cursor;
        self.store.save_checkpoint(checkpoint).await
    }
}
