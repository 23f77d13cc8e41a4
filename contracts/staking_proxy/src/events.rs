#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{contracttype, symbol_short, Address, Env};

/// Fired once, when the initializer runs.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub owner: Address,
    pub code: Address,
    pub version: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CodeUpdatedEvent {
    pub previous: Address,
    pub code: Address,
    pub version: u32,
    pub at: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RateChangedEvent {
    pub previous: u128,
    pub reward_rate: u128,
}

pub fn publish_initialized(env: &Env, owner: Address, code: Address, version: u32) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            owner,
            code,
            version,
        },
    );
}

pub fn publish_code_updated(env: &Env, previous: Address, code: Address, version: u32, at: u32) {
    env.events().publish(
        (symbol_short!("CODE_UPD"),),
        CodeUpdatedEvent {
            previous,
            code,
            version,
            at,
        },
    );
}

pub fn publish_token_set(env: &Env, token: Address) {
    env.events().publish((symbol_short!("TOKEN_SET"),), token);
}

pub fn publish_rate_changed(env: &Env, previous: u128, reward_rate: u128) {
    env.events().publish(
        (symbol_short!("RATE_CHG"),),
        RateChangedEvent {
            previous,
            reward_rate,
        },
    );
}

pub fn publish_allocation_set(env: &Env, amount: u128) {
    env.events().publish((symbol_short!("ALLOC_SET"),), amount);
}

pub fn publish_staked(env: &Env, staker: Address, amount: u128) {
    env.events()
        .publish((symbol_short!("STAKED"), staker), amount);
}

pub fn publish_withdrawn(env: &Env, staker: Address, amount: u128) {
    env.events()
        .publish((symbol_short!("WITHDRAWN"), staker), amount);
}

pub fn publish_reward_paid(env: &Env, staker: Address, amount: u128) {
    env.events()
        .publish((symbol_short!("RWD_PAID"), staker), amount);
}
