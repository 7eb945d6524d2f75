//! SQLite-backed event store.
//!
//! All database access goes through [`EventStore`]: schema migrations at
//! open, idempotent event writes, the poller's resume checkpoint, and the
//! read queries behind the REST API.

use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use tracing::info;

use crate::errors::Result;
use crate::events::{CampaignEvent, EventRecord};

/// Resume position of the poller: the last ledger scanned plus the opaque
/// pagination cursor within it, if any.
#[derive(Debug, Clone, Default)]
pub struct Checkpoint {
    pub ledger: i64,
    pub cursor: Option<String>,
}

/// Handle on the SQLite database. Cheap to clone; clones share the pool.
#[derive(Clone)]
pub struct EventStore {
    pool: SqlitePool,
}

impl EventStore {
    /// Open (creating if necessary) the database and bring its schema up
    /// to date.
    pub async fn open(database_url: &str) -> Result<Self> {
        let url = if database_url.starts_with("sqlite:") {
            database_url.to_string()
        } else {
            format!("sqlite:{database_url}")
        };

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(&url)
            .await?;
        sqlx::migrate!("./migrations").run(&pool).await?;
        info!("event store ready ({url})");

        Ok(Self { pool })
    }

    /// The persisted resume position. A fresh database reads as ledger 0
    /// with no cursor.
    pub async fn checkpoint(&self) -> Result<Checkpoint> {
        let row: Option<(i64, Option<String>)> =
            sqlx::query_as("SELECT last_ledger, last_cursor FROM indexer_cursor WHERE id = 1")
                .fetch_optional(&self.pool)
                .await?;
        Ok(row
            .map(|(ledger, cursor)| Checkpoint { ledger, cursor })
            .unwrap_or_default())
    }

    /// Persist the resume position so a restart continues from it.
    pub async fn save_checkpoint(&self, checkpoint: &Checkpoint) -> Result<()> {
        sqlx::query("UPDATE indexer_cursor SET last_ledger = ?1, last_cursor = ?2 WHERE id = 1")
            .bind(checkpoint.ledger)
            .bind(checkpoint.cursor.as_deref())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Write a batch of decoded events, skipping any the store has seen
    /// before — the UNIQUE constraint on `(ledger, tx_hash, event_type,
    /// campaign_id)` absorbs replayed ledger ranges. Returns the number of
    /// rows that were actually new.
    pub async fn record(&self, events: &[CampaignEvent]) -> Result<usize> {
        let mut fresh = 0usize;
        for ev in events {
            let outcome = sqlx::query(
                "INSERT OR IGNORE INTO events \
                     (event_type, campaign_id, actor, amount, ledger, timestamp, contract_id, tx_hash) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            )
            .bind(&ev.event_type)
            .bind(&ev.campaign_id)
            .bind(&ev.actor)
            .bind(&ev.amount)
            .bind(ev.ledger)
            .bind(ev.timestamp)
            .bind(&ev.contract_id)
            .bind(&ev.tx_hash)
            .execute(&self.pool)
            .await?;

            if outcome.rows_affected() > 0 {
                fresh += 1;
            }
        }
        Ok(fresh)
    }

    /// Every stored event for one campaign, oldest first.
    pub async fn campaign_history(&self, campaign_id: &str) -> Result<Vec<EventRecord>> {
        let rows = sqlx::query_as::<_, EventRecord>(
            "SELECT id, event_type, campaign_id, actor, amount, ledger, timestamp, \
                    contract_id, tx_hash, created_at \
             FROM events WHERE campaign_id = ?1 ORDER BY ledger, id",
        )
        .bind(campaign_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Every stored event across all campaigns, oldest first.
    pub async fn all_events(&self) -> Result<Vec<EventRecord>> {
        let rows = sqlx::query_as::<_, EventRecord>(
            "SELECT id, event_type, campaign_id, actor, amount, ledger, timestamp, \
                    contract_id, tx_hash, created_at \
             FROM events ORDER BY ledger, id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
