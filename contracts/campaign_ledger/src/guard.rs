//! Reentrancy guard.
//!
//! A single instance-storage latch shared by every guarded entry point:
//! while any guarded call is in flight, a nested call into the contract
//! observes the latch and aborts with `ReentrantCall`. The latch is global
//! across campaigns, not per campaign.
//!
//! The latch needs no failure-path cleanup: a Soroban panic reverts the
//! whole invocation's storage writes, latch included, so it can never be
//! left stuck by an aborted call.

use soroban_sdk::Env;

use crate::storage::{bump_instance, DataKey};

/// `true` while a guarded call is in flight.
pub fn is_locked(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Busy)
        .unwrap_or(false)
}

/// Set the latch. The caller must have checked [`is_locked`] first.
pub fn lock(env: &Env) {
    env.storage().instance().set(&DataKey::Busy, &true);
    bump_instance(env);
}

/// Clear the latch on the success path of a guarded call.
pub fn unlock(env: &Env) {
    env.storage().instance().set(&DataKey::Busy, &false);
}
