//! Events emitted by the campaign ledger.
//!
//! Three events form the contract's externally observable log. Each is
//! published exactly once, only on the success path of its operation, with
//! a `(short symbol, campaign id)` topic pair so indexers can filter by
//! campaign without decoding the data payload.

use soroban_sdk::{contracttype, symbol_short, Address, Env, String};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignCreated {
    pub id: u64,
    pub creator: Address,
    pub title: String,
    pub goal: i128,
    pub deadline: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DonationMade {
    pub campaign_id: u64,
    pub donor: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundsClaimed {
    pub campaign_id: u64,
    pub creator: Address,
    pub payout: i128,
}

pub fn emit_campaign_created(env: &Env, event: CampaignCreated) {
    env.events()
        .publish((symbol_short!("created"), event.id), event);
}

pub fn emit_donation_made(env: &Env, event: DonationMade) {
    env.events()
        .publish((symbol_short!("donated"), event.campaign_id), event);
}

pub fn emit_funds_claimed(env: &Env, event: FundsClaimed) {
    env.events()
        .publish((symbol_short!("claimed"), event.campaign_id), event);
}
