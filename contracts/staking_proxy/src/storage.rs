//! Reads and writes of the proxy's storage slots.
//!
//! Snapshots are written back slot by slot and only where the value
//! changed, so an implementation that never touches an appended slot never
//! causes it to be created.

use common::layout::{
    reward_paid_key, staker_key, ALLOCATED_REWARD, CODE, CODE_AT, CODE_VERSION, DEFAULT_ALLOCATED_REWARD,
    DEFAULT_REWARD_RATE, DISTRIBUTED_REWARD, DYNAMIC_RATE, INITIALIZED, PERSISTENT_TTL_EXTEND_TO,
    PERSISTENT_TTL_THRESHOLD, REWARD_PER_UNIT, REWARD_PER_UNIT_AT, REWARD_PER_UNIT_BASE,
    REWARD_RATE, STAKING_TOKEN, TOTAL_STAKED,
};
use common::{PoolState, StakerAccount, StakerPosition};
use soroban_sdk::{Address, Env, IntoVal, Symbol, TryFromVal, Val};

// ── Lifecycle slots ──────────────────────────────────────────────────────────

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().get(&INITIALIZED).unwrap_or(false)
}

pub fn set_initialized(env: &Env) {
    env.storage().instance().set(&INITIALIZED, &true);
}

pub fn code(env: &Env) -> Option<Address> {
    env.storage().instance().get(&CODE)
}

pub fn set_code(env: &Env, code: &Address) {
    env.storage().instance().set(&CODE, code);
}

/// Layout version of the installed code, 0 before the first install.
pub fn code_version(env: &Env) -> u32 {
    env.storage().instance().get(&CODE_VERSION).unwrap_or(0)
}

/// Record that layout `version` is live. `CODE_AT` only moves when the
/// version changes.
pub fn set_code_version(env: &Env, version: u32, at: u32) {
    if code_version(env) != version {
        env.storage().instance().set(&CODE_VERSION, &version);
        env.storage().instance().set(&CODE_AT, &at);
    }
}

pub fn staking_token(env: &Env) -> Option<Address> {
    env.storage().instance().get(&STAKING_TOKEN)
}

pub fn set_staking_token(env: &Env, token: &Address) {
    env.storage().instance().set(&STAKING_TOKEN, token);
}

/// Write the default base rate unless one is already stored.
pub fn seed_reward_rate(env: &Env) {
    if !env.storage().instance().has(&REWARD_RATE) {
        env.storage()
            .instance()
            .set(&REWARD_RATE, &DEFAULT_REWARD_RATE);
    }
}

// ── Pool snapshot ────────────────────────────────────────────────────────────

fn read<T>(env: &Env, key: &Symbol, default: T) -> T
where
    T: TryFromVal<Env, Val>,
    T::Error: core::fmt::Debug,
{
    env.storage().instance().get(key).unwrap_or(default)
}

fn write_if_changed<T>(env: &Env, key: &Symbol, before: &T, after: &T)
where
    T: PartialEq + IntoVal<Env, Val>,
{
    if before != after {
        env.storage().instance().set(key, after);
    }
}

pub fn load_pool(env: &Env) -> PoolState {
    PoolState {
        total_staked: read(env, &TOTAL_STAKED, 0),
        reward_rate: read(env, &REWARD_RATE, 0),
        code_since: read(env, &CODE_AT, 0),
        allocated_reward: read(env, &ALLOCATED_REWARD, DEFAULT_ALLOCATED_REWARD),
        distributed_reward: read(env, &DISTRIBUTED_REWARD, 0),
        reward_per_unit: read(env, &REWARD_PER_UNIT, 0),
        reward_per_unit_at: read(env, &REWARD_PER_UNIT_AT, 0),
        reward_per_unit_base: read(env, &REWARD_PER_UNIT_BASE, 0),
        dynamic_rate: read(env, &DYNAMIC_RATE, 0),
    }
}

/// Commit the slots an implementation changed. `code_since` is owned by
/// the proxy and never taken from an implementation's result.
pub fn store_pool(env: &Env, before: &PoolState, after: &PoolState) {
    write_if_changed(env, &TOTAL_STAKED, &before.total_staked, &after.total_staked);
    write_if_changed(env, &REWARD_RATE, &before.reward_rate, &after.reward_rate);
    write_if_changed(
        env,
        &ALLOCATED_REWARD,
        &before.allocated_reward,
        &after.allocated_reward,
    );
    write_if_changed(
        env,
        &DISTRIBUTED_REWARD,
        &before.distributed_reward,
        &after.distributed_reward,
    );
    write_if_changed(
        env,
        &REWARD_PER_UNIT,
        &before.reward_per_unit,
        &after.reward_per_unit,
    );
    write_if_changed(
        env,
        &REWARD_PER_UNIT_AT,
        &before.reward_per_unit_at,
        &after.reward_per_unit_at,
    );
    write_if_changed(
        env,
        &REWARD_PER_UNIT_BASE,
        &before.reward_per_unit_base,
        &after.reward_per_unit_base,
    );
    write_if_changed(env, &DYNAMIC_RATE, &before.dynamic_rate, &after.dynamic_rate);
}

// ── Staker snapshot ──────────────────────────────────────────────────────────

pub fn load_account(env: &Env, staker: &Address) -> StakerAccount {
    env.storage()
        .persistent()
        .get(&staker_key(staker))
        .unwrap_or_default()
}

pub fn load_position(env: &Env, staker: &Address) -> StakerPosition {
    StakerPosition {
        account: load_account(env, staker),
        reward_per_unit_paid: env
            .storage()
            .persistent()
            .get(&reward_paid_key(staker))
            .unwrap_or(0),
    }
}

pub fn store_position(env: &Env, staker: &Address, before: &StakerPosition, after: &StakerPosition) {
    if before.account != after.account {
        let key = staker_key(staker);
        env.storage().persistent().set(&key, &after.account);
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND_TO);
    }
    if before.reward_per_unit_paid != after.reward_per_unit_paid {
        let key = reward_paid_key(staker);
        env.storage().persistent().set(&key, &after.reward_per_unit_paid);
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND_TO);
    }
}
