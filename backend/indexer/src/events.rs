//! Canonical event types emitted by the campaign-ledger contract.
//!
//! These mirror the Soroban events defined in
//! `contracts/campaign_ledger/src/events.rs`. The contract publishes each
//! with a `(short symbol, campaign id)` topic pair.

use serde::{Deserialize, Serialize};

/// All recognised event kinds from the campaign-ledger contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// A new campaign was registered (`created` topic).
    CampaignCreated,
    /// A donation was made to a campaign (`donated` topic).
    DonationMade,
    /// The creator withdrew a campaign's funds (`claimed` topic).
    FundsClaimed,
    /// An event from this contract that we don't recognise yet.
    Unknown,
}

impl EventKind {
    /// Parse the leading topic symbol produced by Soroban into an [`EventKind`].
    pub fn from_topic(topic: &str) -> Self {
        match topic {
            "created" => Self::CampaignCreated,
            "donated" => Self::DonationMade,
            "claimed" => Self::FundsClaimed,
            _ => Self::Unknown,
        }
    }

    /// Short identifier string stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CampaignCreated => "campaign_created",
            Self::DonationMade => "donation_made",
            Self::FundsClaimed => "funds_claimed",
            Self::Unknown => "unknown",
        }
    }
}

/// A fully decoded campaign event, ready to be stored in the database.
///
/// `actor` is the creator for created/claimed events and the donor for
/// donations; `amount` is the goal, the donated amount, or the net payout
/// respectively. Both are kept as strings so i128 token amounts survive
/// untruncated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignEvent {
    pub event_type: String,
    pub campaign_id: Option<String>,
    pub actor: Option<String>,
    pub amount: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
}

/// An event record as stored in / read from the database.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct EventRecord {
    pub id: i64,
    pub event_type: String,
    pub campaign_id: Option<String>,
    pub actor: Option<String>,
    pub amount: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
    pub created_at: i64,
}
