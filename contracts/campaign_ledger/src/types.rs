//! # Types
//!
//! Shared data structures of the campaign ledger.
//!
//! ## Config / State split
//!
//! A `Campaign` is internally stored as two separate ledger entries:
//!
//! - [`CampaignConfig`] — written once at creation; never mutated.
//! - [`CampaignState`] — written on every donation and on claim.
//!
//! Donations are the high-frequency write path, so only the small state
//! entry is rewritten per donation. The public API exposes the
//! reconstructed [`Campaign`] struct for convenience.
//!
//! ## Lifecycle
//!
//! ```text
//! created (claimed = false) ──deadline──► claimable ──claim_funds──► claimed = true
//! ```
//!
//! `claimed` transitions false→true exactly once and never reverses.
//! `raised` only grows; it is deliberately left untouched by a claim so it
//! keeps reporting total-ever-raised.

use soroban_sdk::{contracttype, Address, String};

/// Immutable campaign configuration, written once at creation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignConfig {
    pub id: u64,
    pub creator: Address,
    pub title: String,
    /// Opaque free text; the ledger never validates or interprets it.
    pub description: String,
    /// Target amount in the smallest unit of the funding token. Always > 0.
    pub goal: i128,
    /// Unix timestamp after which donations close and claiming opens.
    pub deadline: u64,
}

/// Mutable campaign state, updated on donations and on claim.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignState {
    /// Total donated so far. May exceed `goal`; never decreases.
    pub raised: i128,
    /// Set exactly once by a successful claim.
    pub claimed: bool,
}

/// Full public representation of a campaign.
///
/// Reconstructed from the split `CampaignConfig` + `CampaignState`
/// storage entries; the per-donor ledger is not part of it.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Campaign {
    /// Unique identifier, auto-incremented starting at 1.
    pub id: u64,
    /// Address that created the campaign and receives the payout.
    pub creator: Address,
    pub title: String,
    pub description: String,
    /// Target funding amount.
    pub goal: i128,
    /// Total donated so far.
    pub raised: i128,
    /// Unix timestamp closing the donation window.
    pub deadline: u64,
    /// Whether the creator has already withdrawn the funds.
    pub claimed: bool,
}
