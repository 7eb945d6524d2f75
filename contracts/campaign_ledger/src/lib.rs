//! # Campaign Ledger Contract
//!
//! Fund-custody ledger for time-boxed crowdfunding campaigns: creators
//! register a funding goal and deadline, donors deposit the funding token
//! while the campaign is open, and after the deadline the creator withdraws
//! the collected amount minus a fixed 5% platform fee.
//!
//! | Phase      | Entry Point(s)                               |
//! |------------|----------------------------------------------|
//! | Bootstrap  | [`CampaignLedger::init`]                     |
//! | Creation   | [`CampaignLedger::create_campaign`]          |
//! | Funding    | [`CampaignLedger::donate`]                   |
//! | Withdrawal | [`CampaignLedger::claim_funds`]              |
//! | Queries    | `get_campaign`, `get_donation`, `fee_recipient`, `funding_token` |
//!
//! ## Architecture
//!
//! Storage access is fully delegated to [`storage`], event emission to
//! [`events`], and the reentrancy latch to [`guard`]. This file contains
//! only the public entry points and their precondition checks.
//!
//! The fee recipient and the funding token are collaborator capabilities
//! fixed at [`CampaignLedger::init`]; rotating the fee recipient is its own
//! governance concern and has no entry point here.

#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, panic_with_error, token, Address, Env, String,
};

mod events;
mod guard;
mod storage;
mod types;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_events;

pub use events::{CampaignCreated, DonationMade, FundsClaimed};
pub use types::{Campaign, CampaignConfig, CampaignState};

const SECONDS_PER_DAY: u64 = 86_400;
const MAX_DURATION_DAYS: u64 = 365;

/// Platform fee, percent of `raised`, truncated toward zero. The division
/// remainder stays with the creator via `payout = raised - fee`.
const FEE_PERCENT: i128 = 5;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    InvalidGoal        = 1,
    InvalidDuration    = 2,
    NotFound           = 3,
    CampaignEnded      = 4,
    ZeroDonation       = 5,
    NotCreator         = 6,
    AlreadyClaimed     = 7,
    TooEarly           = 8,
    TransferFailed     = 9,
    ReentrantCall      = 10,
    AlreadyInitialized = 11,
    NotInitialized     = 12,
}

#[contract]
pub struct CampaignLedger;

#[contractimpl]
impl CampaignLedger {
    /// Initialise the contract with its two collaborator capabilities.
    ///
    /// Must be called exactly once after deployment; subsequent calls panic
    /// with `Error::AlreadyInitialized`.
    ///
    /// - `fee_recipient` receives the platform fee on every claim.
    /// - `token` is the single funding asset donations are made in.
    pub fn init(env: Env, fee_recipient: Address, token: Address) -> Result<(), Error> {
        if storage::is_initialized(&env) {
            panic_with_error!(&env, Error::AlreadyInitialized);
        }
        storage::set_collaborators(&env, &fee_recipient, &token);
        Ok(())
    }

    /// Register a new campaign and return its id.
    ///
    /// - `goal` must be positive (`Error::InvalidGoal`).
    /// - `duration_days` must be in `1..=365` (`Error::InvalidDuration`).
    ///
    /// Validation runs before the id counter moves, so a rejected call
    /// never consumes an id. The deadline is `now + duration_days` in
    /// seconds; `title` and `description` are stored as opaque text.
    pub fn create_campaign(
        env: Env,
        creator: Address,
        title: String,
        description: String,
        goal: i128,
        duration_days: u64,
    ) -> Result<u64, Error> {
        creator.require_auth();

        if !storage::is_initialized(&env) {
            panic_with_error!(&env, Error::NotInitialized);
        }
        if goal <= 0 {
            panic_with_error!(&env, Error::InvalidGoal);
        }
        if duration_days < 1 || duration_days > MAX_DURATION_DAYS {
            panic_with_error!(&env, Error::InvalidDuration);
        }

        let id = storage::allocate_campaign_id(&env);
        let deadline = env.ledger().timestamp() + duration_days * SECONDS_PER_DAY;

        let campaign = Campaign {
            id,
            creator: creator.clone(),
            title: title.clone(),
            description,
            goal,
            raised: 0,
            deadline,
            claimed: false,
        };
        storage::save_campaign(&env, &campaign);

        events::emit_campaign_created(
            &env,
            CampaignCreated {
                id,
                creator,
                title,
                goal,
                deadline,
            },
        );

        Ok(id)
    }

    /// Donate `amount` of the funding token to an open campaign.
    ///
    /// Checked in order:
    /// - `Error::NotFound` — unknown campaign id.
    /// - `Error::CampaignEnded` — the deadline has passed. Strict: a
    ///   donation at exactly the deadline timestamp is rejected.
    /// - `Error::ZeroDonation` — `amount` is zero or negative.
    ///
    /// Moves the tokens from `donor` to the contract, then credits both
    /// `raised` and the donor's cumulative ledger entry.
    pub fn donate(env: Env, campaign_id: u64, donor: Address, amount: i128) -> Result<(), Error> {
        donor.require_auth();

        if guard::is_locked(&env) {
            panic_with_error!(&env, Error::ReentrantCall);
        }
        guard::lock(&env);

        let Some(config) = storage::load_config(&env, campaign_id) else {
            panic_with_error!(&env, Error::NotFound);
        };
        if env.ledger().timestamp() >= config.deadline {
            panic_with_error!(&env, Error::CampaignEnded);
        }
        if amount <= 0 {
            panic_with_error!(&env, Error::ZeroDonation);
        }

        let Some(token_addr) = storage::get_token(&env) else {
            panic_with_error!(&env, Error::NotInitialized);
        };
        let token_client = token::Client::new(&env, &token_addr);
        token_client.transfer(&donor, &env.current_contract_address(), &amount);

        let Some(mut state) = storage::load_state(&env, campaign_id) else {
            panic_with_error!(&env, Error::NotFound);
        };
        state.raised += amount;
        storage::save_state(&env, campaign_id, &state);
        storage::add_donation(&env, campaign_id, &donor, amount);

        events::emit_donation_made(
            &env,
            DonationMade {
                campaign_id,
                donor,
                amount,
            },
        );

        guard::unlock(&env);
        Ok(())
    }

    /// Withdraw a campaign's funds after its deadline.
    ///
    /// Checked in order:
    /// - `Error::NotFound` — unknown campaign id.
    /// - `Error::NotCreator` — `caller` is not the campaign creator.
    /// - `Error::AlreadyClaimed` — the payout already happened.
    /// - `Error::TooEarly` — before the deadline. Inclusive: claiming at
    ///   exactly the deadline instant is allowed.
    ///
    /// `claimed` is set before either outbound transfer. The fee is
    /// `raised * 5 / 100` truncated toward zero and goes to the fee
    /// recipient; the creator receives `raised - fee`. If either transfer
    /// fails the call panics with `Error::TransferFailed` and every state
    /// change, the claimed flag included, is rolled back — a failed claim
    /// is fully retryable. `raised` itself is never zeroed; it keeps
    /// reporting total-ever-raised.
    pub fn claim_funds(env: Env, campaign_id: u64, caller: Address) -> Result<(), Error> {
        caller.require_auth();

        if guard::is_locked(&env) {
            panic_with_error!(&env, Error::ReentrantCall);
        }
        guard::lock(&env);

        let Some(config) = storage::load_config(&env, campaign_id) else {
            panic_with_error!(&env, Error::NotFound);
        };
        if caller != config.creator {
            panic_with_error!(&env, Error::NotCreator);
        }
        let Some(mut state) = storage::load_state(&env, campaign_id) else {
            panic_with_error!(&env, Error::NotFound);
        };
        if state.claimed {
            panic_with_error!(&env, Error::AlreadyClaimed);
        }
        if env.ledger().timestamp() < config.deadline {
            panic_with_error!(&env, Error::TooEarly);
        }

        // Mark claimed before any outbound transfer.
        state.claimed = true;
        storage::save_state(&env, campaign_id, &state);

        let fee = state.raised * FEE_PERCENT / 100;
        let payout = state.raised - fee;

        let Some(token_addr) = storage::get_token(&env) else {
            panic_with_error!(&env, Error::NotInitialized);
        };
        let Some(fee_recipient) = storage::get_fee_recipient(&env) else {
            panic_with_error!(&env, Error::NotInitialized);
        };
        let token_client = token::Client::new(&env, &token_addr);
        let contract = env.current_contract_address();

        if token_client.try_transfer(&contract, &fee_recipient, &fee).is_err() {
            panic_with_error!(&env, Error::TransferFailed);
        }
        if token_client.try_transfer(&contract, &config.creator, &payout).is_err() {
            panic_with_error!(&env, Error::TransferFailed);
        }

        events::emit_funds_claimed(
            &env,
            FundsClaimed {
                campaign_id,
                creator: config.creator,
                payout,
            },
        );

        guard::unlock(&env);
        Ok(())
    }

    /// Retrieve a campaign by its id.
    ///
    /// Returns every field except the per-donor ledger. Panics with
    /// `Error::NotFound` for ids that were never created.
    pub fn get_campaign(env: Env, campaign_id: u64) -> Result<Campaign, Error> {
        match storage::load_campaign(&env, campaign_id) {
            Some(campaign) => Ok(campaign),
            None => panic_with_error!(&env, Error::NotFound),
        }
    }

    /// Cumulative amount `donor` has donated to `campaign_id`.
    ///
    /// Lenient read path: unknown campaigns and unknown donors both read
    /// as 0, and the call never fails.
    pub fn get_donation(env: Env, campaign_id: u64, donor: Address) -> i128 {
        storage::get_donation(&env, campaign_id, &donor)
    }

    /// The platform-fee recipient fixed at `init`.
    pub fn fee_recipient(env: Env) -> Address {
        match storage::get_fee_recipient(&env) {
            Some(addr) => addr,
            None => panic_with_error!(&env, Error::NotInitialized),
        }
    }

    /// The funding-token address fixed at `init`.
    pub fn funding_token(env: Env) -> Address {
        match storage::get_token(&env) {
            Some(addr) => addr,
            None => panic_with_error!(&env, Error::NotInitialized),
        }
    }
}
