#![allow(dead_code)]

extern crate std;

use crate::types::Campaign;

/// INV-1: `raised` must never be negative.
pub fn assert_raised_non_negative(campaign: &Campaign) {
    assert!(
        campaign.raised >= 0,
        "INV-1 violated: campaign {} has negative raised ({})",
        campaign.id,
        campaign.raised
    );
}

/// INV-2: `goal` must always be positive.
pub fn assert_goal_positive(campaign: &Campaign) {
    assert!(
        campaign.goal > 0,
        "INV-2 violated: campaign {} has non-positive goal ({})",
        campaign.id,
        campaign.goal
    );
}

/// INV-3: `deadline` must be positive.
pub fn assert_deadline_positive(campaign: &Campaign) {
    assert!(
        campaign.deadline > 0,
        "INV-3 violated: campaign {} has zero deadline",
        campaign.id
    );
}

/// INV-4: `raised` never decreases, and a donation of `amount` grows it by
/// exactly `amount`.
pub fn assert_donation_invariant(raised_before: i128, raised_after: i128, amount: i128) {
    assert_eq!(
        raised_after,
        raised_before + amount,
        "INV-4 violated: donation invariant broken: {} + {} != {}",
        raised_before,
        amount,
        raised_after
    );
}

/// INV-5: campaign ids are sequential starting from 1, never reused.
pub fn assert_sequential_ids(campaigns: &[Campaign]) {
    for (i, campaign) in campaigns.iter().enumerate() {
        assert_eq!(
            campaign.id,
            i as u64 + 1,
            "INV-5 violated: expected id {}, got {}",
            i + 1,
            campaign.id
        );
    }
}

/// INV-6: `claimed` only moves false→true, never back.
pub fn assert_claimed_monotonic(claimed_before: bool, claimed_after: bool) {
    assert!(
        claimed_after || !claimed_before,
        "INV-6 violated: claimed reversed from true to false"
    );
}

/// INV-7: fields written at creation (creator, title, description, goal,
/// deadline) never change afterwards.
pub fn assert_immutable_fields(original: &Campaign, current: &Campaign) {
    assert_eq!(original.id, current.id, "INV-7 violated: campaign id changed");
    assert_eq!(
        original.creator, current.creator,
        "INV-7 violated: campaign creator changed"
    );
    assert_eq!(
        original.title, current.title,
        "INV-7 violated: campaign title changed"
    );
    assert_eq!(
        original.description, current.description,
        "INV-7 violated: campaign description changed"
    );
    assert_eq!(
        original.goal, current.goal,
        "INV-7 violated: campaign goal changed"
    );
    assert_eq!(
        original.deadline, current.deadline,
        "INV-7 violated: campaign deadline changed"
    );
}

/// INV-8: the fee split conserves value exactly. `fee = floor(raised*5/100)`,
/// `payout = raised - fee`, and the two legs always sum back to `raised`.
pub fn assert_fee_split(raised: i128, fee: i128, payout: i128) {
    assert_eq!(
        fee,
        raised * 5 / 100,
        "INV-8 violated: fee {} is not 5% (truncated) of {}",
        fee,
        raised
    );
    assert_eq!(
        fee + payout,
        raised,
        "INV-8 violated: fee {} + payout {} != raised {}",
        fee,
        payout,
        raised
    );
}

/// Run all stateless campaign invariants.
pub fn assert_all_campaign_invariants(campaign: &Campaign) {
    assert_raised_non_negative(campaign);
    assert_goal_positive(campaign);
    assert_deadline_positive(campaign);
}
