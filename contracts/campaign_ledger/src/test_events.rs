extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events, Ledger},
    token, vec, Address, Env, IntoVal, String, TryIntoVal,
};

use crate::events::{CampaignCreated, DonationMade, FundsClaimed};
use crate::{CampaignLedger, CampaignLedgerClient};

const BASE_TIME: u64 = 1_700_000_000;
const DAY: u64 = 86_400;

fn setup_with_init() -> (Env, CampaignLedgerClient<'static>, token::Client<'static>) {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().with_mut(|li| li.timestamp = BASE_TIME);
    let contract_id = env.register(CampaignLedger, ());
    let client = CampaignLedgerClient::new(&env, &contract_id);

    let fee_recipient = Address::generate(&env);
    let token_admin = Address::generate(&env);
    let token_addr = env.register_stellar_asset_contract_v2(token_admin);
    let token = token::Client::new(&env, &token_addr.address());
    client.init(&fee_recipient, &token.address);
    (env, client, token)
}

fn mint(env: &Env, token: &token::Client, to: &Address, amount: i128) {
    token::StellarAssetClient::new(env, &token.address).mint(to, &amount);
}

#[test]
fn campaign_created_event() {
    let (env, client, _token) = setup_with_init();
    let creator = Address::generate(&env);
    let title = String::from_str(&env, "Roof repair");
    let description = String::from_str(&env, "Fix the community hall roof");

    let id = client.create_campaign(&creator, &title, &description, &2_500, &14);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("no events");

    // Topic: ("created", campaign id)
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("created").into_val(&env),
        id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    // Data: CampaignCreated struct
    let event_data: CampaignCreated = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        CampaignCreated {
            id,
            creator,
            title,
            goal: 2_500,
            deadline: BASE_TIME + 14 * DAY,
        }
    );
}

#[test]
fn donation_made_event() {
    let (env, client, token) = setup_with_init();
    let creator = Address::generate(&env);
    let donor = Address::generate(&env);
    let title = String::from_str(&env, "Roof repair");
    let description = String::from_str(&env, "Fix the community hall roof");

    let id = client.create_campaign(&creator, &title, &description, &2_500, &14);
    mint(&env, &token, &donor, 1_000);
    client.donate(&id, &donor, &1_000);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("no events");

    // Topic: ("donated", campaign id)
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("donated").into_val(&env),
        id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    // Data: DonationMade struct
    let event_data: DonationMade = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        DonationMade {
            campaign_id: id,
            donor,
            amount: 1_000,
        }
    );
}

#[test]
fn funds_claimed_event() {
    let (env, client, token) = setup_with_init();
    let creator = Address::generate(&env);
    let donor = Address::generate(&env);
    let title = String::from_str(&env, "Roof repair");
    let description = String::from_str(&env, "Fix the community hall roof");

    let id = client.create_campaign(&creator, &title, &description, &2_500, &14);
    mint(&env, &token, &donor, 2_000);
    client.donate(&id, &donor, &2_000);

    env.ledger().with_mut(|li| li.timestamp = BASE_TIME + 14 * DAY);
    client.claim_funds(&id, &creator);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("no events");

    // Topic: ("claimed", campaign id)
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("claimed").into_val(&env),
        id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    // Data: FundsClaimed struct carrying the net payout, not the raw total.
    let event_data: FundsClaimed = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        FundsClaimed {
            campaign_id: id,
            creator,
            payout: 1_900,
        }
    );
}

/// Failed operations emit nothing: the event log only ever records the
/// success path.
#[test]
fn failed_operations_emit_no_events() {
    let (env, client, token) = setup_with_init();
    let creator = Address::generate(&env);
    let donor = Address::generate(&env);
    let title = String::from_str(&env, "Roof repair");
    let description = String::from_str(&env, "Fix the community hall roof");

    let id = client.create_campaign(&creator, &title, &description, &2_500, &14);
    mint(&env, &token, &donor, 1_000);

    // Every donation and claim below is rejected; no "donated" or
    // "claimed" topic may ever appear.
    let _ = client.try_donate(&id, &donor, &0);
    let _ = client.try_donate(&99, &donor, &100);
    let _ = client.try_claim_funds(&id, &creator); // TooEarly
    let _ = client.try_claim_funds(&id, &donor); // NotCreator

    let donated_topics = vec![
        &env,
        symbol_short!("donated").into_val(&env),
        id.into_val(&env),
    ];
    let claimed_topics = vec![
        &env,
        symbol_short!("claimed").into_val(&env),
        id.into_val(&env),
    ];
    for (_, topics, _) in env.events().all().iter() {
        assert_ne!(topics, donated_topics);
        assert_ne!(topics, claimed_topics);
    }
}

/// FundsClaimed appears exactly once even when a second claim is attempted.
#[test]
fn double_claim_emits_no_additional_event() {
    let (env, client, token) = setup_with_init();
    let creator = Address::generate(&env);
    let donor = Address::generate(&env);
    let title = String::from_str(&env, "Roof repair");
    let description = String::from_str(&env, "Fix the community hall roof");

    let id = client.create_campaign(&creator, &title, &description, &2_500, &14);
    mint(&env, &token, &donor, 2_000);
    client.donate(&id, &donor, &2_000);

    env.ledger().with_mut(|li| li.timestamp = BASE_TIME + 14 * DAY);
    client.claim_funds(&id, &creator);
    let _ = client.try_claim_funds(&id, &creator);

    let claimed_topics = vec![
        &env,
        symbol_short!("claimed").into_val(&env),
        id.into_val(&env),
    ];
    let claimed_count = env
        .events()
        .all()
        .iter()
        .filter(|(_, topics, _)| *topics == claimed_topics)
        .count();
    assert_eq!(claimed_count, 1, "FundsClaimed must appear exactly once");
}
