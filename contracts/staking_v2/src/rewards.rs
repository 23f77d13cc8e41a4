//! Reward-per-unit accumulator.
//!
//! `reward_per_unit` grows by `dynamic_rate × elapsed` (scaled by
//! [`PRECISION`]) whenever the pool is touched, so a staker's share of the
//! emission since their last settlement is
//! `principal × (reward_per_unit − reward_per_unit_paid) / PRECISION`.
//!
//! Emission is charged to `distributed_reward` rounded up while stakers are
//! credited rounded down, so the sum of credited reward never exceeds what
//! was charged against the allocation.
//!
//! Products of an amount and a [`PRECISION`]-scaled value are formed in
//! 256 bits; only the quotient has to fit a `u128`.

use common::{PoolState, StakerPosition, StakingError};
use soroban_sdk::{Env, U256};

use crate::rate::PRECISION;

fn product(env: &Env, a: u128, b: u128) -> U256 {
    U256::from_u128(env, a).mul(&U256::from_u128(env, b))
}

pub fn mul_div(env: &Env, a: u128, b: u128, denominator: u128) -> Result<u128, StakingError> {
    if denominator == 0 {
        return Err(StakingError::ArithmeticOverflow);
    }
    product(env, a, b)
        .div(&U256::from_u128(env, denominator))
        .to_u128()
        .ok_or(StakingError::ArithmeticOverflow)
}

pub fn mul_div_ceil(env: &Env, a: u128, b: u128, denominator: u128) -> Result<u128, StakingError> {
    if denominator == 0 {
        return Err(StakingError::ArithmeticOverflow);
    }
    let denominator = U256::from_u128(env, denominator);
    let product = product(env, a, b);
    let quotient = product
        .div(&denominator)
        .to_u128()
        .ok_or(StakingError::ArithmeticOverflow)?;
    if product.rem_euclid(&denominator) == U256::from_u32(env, 0) {
        Ok(quotient)
    } else {
        quotient.checked_add(1).ok_or(StakingError::ArithmeticOverflow)
    }
}

/// Bring the accumulator up to `now` at the pool's current dynamic rate.
///
/// The increment is clipped so `distributed_reward` never passes
/// `allocated_reward`. An empty pool emits nothing; the elapsed blocks are
/// simply skipped.
pub fn advance(env: &Env, pool: &mut PoolState, now: u32) -> Result<(), StakingError> {
    let elapsed = now
        .checked_sub(pool.reward_per_unit_at)
        .ok_or(StakingError::ArithmeticOverflow)?;

    if pool.total_staked > 0 && elapsed > 0 {
        let mut increment = pool
            .dynamic_rate
            .checked_mul(u128::from(elapsed))
            .ok_or(StakingError::ArithmeticOverflow)?;
        let mut emission = mul_div_ceil(env, pool.total_staked, increment, PRECISION)?;

        let remaining = pool
            .allocated_reward
            .saturating_sub(pool.distributed_reward);
        if emission > remaining {
            increment = mul_div(env, remaining, PRECISION, pool.total_staked)?;
            emission = mul_div_ceil(env, pool.total_staked, increment, PRECISION)?;
        }

        pool.reward_per_unit = pool
            .reward_per_unit
            .checked_add(increment)
            .ok_or(StakingError::ArithmeticOverflow)?;
        pool.distributed_reward = pool
            .distributed_reward
            .checked_add(emission)
            .ok_or(StakingError::ArithmeticOverflow)?;
    }

    pool.reward_per_unit_at = now;
    Ok(())
}

/// Reward of a staker under the static-rate implementation.
fn flat_reward(principal: u128, reward_rate: u128, blocks: u32) -> Result<u128, StakingError> {
    principal
        .checked_mul(reward_rate)
        .and_then(|per_block| per_block.checked_mul(u128::from(blocks)))
        .ok_or(StakingError::ArithmeticOverflow)
}

/// Credit `position` with everything it earned up to `now`.
///
/// Must run after [`advance`] for the same block. A staker last touched
/// before this implementation was installed, or earlier in the install
/// block, is first settled at the flat rate up to the install block, then
/// joins the accumulator at its install-time value. Within the install
/// block the accumulator still equals that value, so a staker already
/// settled there loses nothing.
pub fn settle(
    env: &Env,
    pool: &PoolState,
    position: &mut StakerPosition,
    now: u32,
) -> Result<(), StakingError> {
    let account = &mut position.account;

    if account.checkpoint <= pool.code_since {
        if account.principal > 0 {
            let legacy = flat_reward(
                account.principal,
                pool.reward_rate,
                pool.code_since - account.checkpoint,
            )?;
            account.accrued_reward = account
                .accrued_reward
                .checked_add(legacy)
                .ok_or(StakingError::ArithmeticOverflow)?;
        }
        position.reward_per_unit_paid = pool.reward_per_unit_base;
    }

    let delta = pool
        .reward_per_unit
        .checked_sub(position.reward_per_unit_paid)
        .ok_or(StakingError::ArithmeticOverflow)?;
    let earned = mul_div(env, account.principal, delta, PRECISION)?;

    account.accrued_reward = account
        .accrued_reward
        .checked_add(earned)
        .ok_or(StakingError::ArithmeticOverflow)?;
    account.checkpoint = now;
    position.reward_per_unit_paid = pool.reward_per_unit;
    Ok(())
}

/// Reward already charged plus what the pool would emit over the next
/// block at its current size and rate.
pub fn projected_allocation(env: &Env, pool: &PoolState) -> Result<u128, StakingError> {
    let next_block = mul_div_ceil(env, pool.total_staked, pool.dynamic_rate, PRECISION)?;
    pool.distributed_reward
        .checked_add(next_block)
        .ok_or(StakingError::ArithmeticOverflow)
}
