//! Error type shared across the indexer.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IndexerError {
    #[error("sqlite: {0}")]
    Sqlite(#[from] sqlx::Error),

    #[error("migrations failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("rpc transport: {0}")]
    Rpc(#[from] reqwest::Error),

    #[error("configuration: {0}")]
    Config(String),

    #[error("event decode: {0}")]
    Decode(String),
}

pub type Result<T> = std::result::Result<T, IndexerError>;
