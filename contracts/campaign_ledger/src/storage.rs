//! # Storage
//!
//! Typed helpers over Soroban's two storage tiers used by the ledger.
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key             | Type      | Description                          |
//! |-----------------|-----------|--------------------------------------|
//! | `CampaignCount` | `u64`     | Last campaign id handed out (0 = none) |
//! | `FeeRecipient`  | `Address` | Platform-fee recipient, set at init  |
//! | `Token`         | `Address` | Funding token, set at init           |
//! | `Busy`          | `bool`    | Reentrancy latch (see [`crate::guard`]) |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                       | Type             | Description                     |
//! |---------------------------|------------------|---------------------------------|
//! | `Config(id)`              | `CampaignConfig` | Immutable campaign configuration |
//! | `State(id)`               | `CampaignState`  | Mutable campaign state          |
//! | `Donation(id, donor)`     | `i128`           | Cumulative amount per donor     |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days remaining.
//!
//! Campaign ids start at 1; id 0 never has a `Config` entry, so an absent
//! entry doubles as the "not found" sentinel and no separate `exists` flag
//! is stored.

use soroban_sdk::{contracttype, Address, Env};

use crate::types::{Campaign, CampaignConfig, CampaignState};

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage: bump by 7 days when below 1 day remaining.
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

/// Persistent storage: bump by 30 days when below 7 days remaining.
const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

/// All contract storage keys.
///
/// Instance-tier keys (`CampaignCount`, `FeeRecipient`, `Token`, `Busy`)
/// live as long as the contract and are extended together. Persistent-tier
/// keys (`Config`, `State`, `Donation`) hold per-campaign data with
/// independent TTLs.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Monotonic campaign id counter (Instance).
    CampaignCount,
    /// Platform-fee recipient address (Instance).
    FeeRecipient,
    /// Funding token address (Instance).
    Token,
    /// Reentrancy latch (Instance).
    Busy,
    /// Immutable campaign configuration keyed by id (Persistent).
    Config(u64),
    /// Mutable campaign state keyed by id (Persistent).
    State(u64),
    /// Cumulative donation keyed by (campaign id, donor) (Persistent).
    Donation(u64, Address),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

/// Extend instance storage TTL if it falls below the threshold.
pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

/// Allocate the next campaign id.
///
/// The counter starts at 0 and is incremented before the id is handed out,
/// so the first campaign gets id 1. Ids are never reused; callers must run
/// all validation before calling this.
pub fn allocate_campaign_id(env: &Env) -> u64 {
    bump_instance(env);
    let next: u64 = env
        .storage()
        .instance()
        .get(&DataKey::CampaignCount)
        .unwrap_or(0)
        + 1;
    env.storage().instance().set(&DataKey::CampaignCount, &next);
    next
}

/// `true` once `init` has stored the collaborator addresses.
pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::FeeRecipient)
}

/// Store the collaborator capabilities. Called exactly once from `init`.
pub fn set_collaborators(env: &Env, fee_recipient: &Address, token: &Address) {
    env.storage()
        .instance()
        .set(&DataKey::FeeRecipient, fee_recipient);
    env.storage().instance().set(&DataKey::Token, token);
    bump_instance(env);
}

/// Retrieve the platform-fee recipient, if `init` has run.
pub fn get_fee_recipient(env: &Env) -> Option<Address> {
    bump_instance(env);
    env.storage().instance().get(&DataKey::FeeRecipient)
}

/// Retrieve the funding-token address, if `init` has run.
pub fn get_token(env: &Env) -> Option<Address> {
    bump_instance(env);
    env.storage().instance().get(&DataKey::Token)
}

// ── Persistent Storage Helpers ───────────────────────────────────────

/// Extend the TTL for a persistent storage key.
fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

/// Save both the immutable config and initial mutable state for a new campaign.
pub fn save_campaign(env: &Env, campaign: &Campaign) {
    let config_key = DataKey::Config(campaign.id);
    let state_key = DataKey::State(campaign.id);

    let config = CampaignConfig {
        id: campaign.id,
        creator: campaign.creator.clone(),
        title: campaign.title.clone(),
        description: campaign.description.clone(),
        goal: campaign.goal,
        deadline: campaign.deadline,
    };

    let state = CampaignState {
        raised: campaign.raised,
        claimed: campaign.claimed,
    };

    env.storage().persistent().set(&config_key, &config);
    env.storage().persistent().set(&state_key, &state);
    bump_persistent(env, &config_key);
    bump_persistent(env, &state_key);
}

/// Load the full `Campaign` by combining config and state.
/// Returns `None` when the campaign was never created.
pub fn load_campaign(env: &Env, id: u64) -> Option<Campaign> {
    let config = load_config(env, id)?;
    let state = load_state(env, id)?;
    Some(Campaign {
        id: config.id,
        creator: config.creator,
        title: config.title,
        description: config.description,
        goal: config.goal,
        raised: state.raised,
        deadline: config.deadline,
        claimed: state.claimed,
    })
}

/// Load only the immutable campaign configuration.
pub fn load_config(env: &Env, id: u64) -> Option<CampaignConfig> {
    let key = DataKey::Config(id);
    let config: Option<CampaignConfig> = env.storage().persistent().get(&key);
    if config.is_some() {
        bump_persistent(env, &key);
    }
    config
}

/// Load only the mutable campaign state.
pub fn load_state(env: &Env, id: u64) -> Option<CampaignState> {
    let key = DataKey::State(id);
    let state: Option<CampaignState> = env.storage().persistent().get(&key);
    if state.is_some() {
        bump_persistent(env, &key);
    }
    state
}

/// Save only the mutable campaign state (the hot donate/claim write path).
pub fn save_state(env: &Env, id: u64, state: &CampaignState) {
    let key = DataKey::State(id);
    env.storage().persistent().set(&key, state);
    bump_persistent(env, &key);
}

/// Cumulative amount `donor` has donated to campaign `id`.
/// Unknown pairs read as 0; there is deliberately no existence check.
pub fn get_donation(env: &Env, id: u64, donor: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Donation(id, donor.clone()))
        .unwrap_or(0)
}

/// Add `amount` to the donor's cumulative entry for campaign `id`.
pub fn add_donation(env: &Env, id: u64, donor: &Address, amount: i128) {
    let key = DataKey::Donation(id, donor.clone());
    let total = get_donation(env, id, donor) + amount;
    env.storage().persistent().set(&key, &total);
    bump_persistent(env, &key);
}
