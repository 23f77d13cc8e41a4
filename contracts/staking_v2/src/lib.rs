#![no_std]

//! Dynamic-rate staking behaviour with an allocation cap.
//!
//! The per-unit rate follows [`rate::dynamic_rate`] and is recomputed after
//! every change to the pool size. Rewards flow through the accumulator in
//! [`rewards`], which is advanced before the rate changes so every block is
//! paid at the rate that was in force during it. Cumulative emission is
//! capped by `allocated_reward`.

pub mod rate;
pub mod rewards;

use common::{PoolState, Settlement, StakerPosition, StakingBehavior, StakingError};
use soroban_sdk::{contract, contractimpl, log, Env};

/// Layout version this behaviour reads and writes.
pub const VERSION: u32 = 2;

#[contract]
pub struct StakingV2;

#[contractimpl]
impl StakingBehavior for StakingV2 {
    fn version(_env: Env) -> u32 {
        VERSION
    }

    /// Over another layout version, start the accumulator at `now`. Stakers
    /// whose records predate this block are settled at the flat rate up to
    /// it and join the accumulator at `reward_per_unit_base`.
    ///
    /// Over v2 itself the accumulator is live, so it is only brought up to
    /// `now`; the proxy keeps `code_since` in that case.
    fn install(
        env: Env,
        pool: PoolState,
        previous: u32,
        now: u32,
    ) -> Result<PoolState, StakingError> {
        let mut pool = pool;
        if previous == VERSION {
            rewards::advance(&env, &mut pool, now)?;
        } else {
            pool.reward_per_unit_at = now;
            pool.reward_per_unit_base = pool.reward_per_unit;
        }
        pool.dynamic_rate = rate::dynamic_rate(pool.reward_rate, pool.total_staked)?;
        Ok(pool)
    }

    fn stake(
        env: Env,
        pool: PoolState,
        position: StakerPosition,
        amount: u128,
        now: u32,
    ) -> Result<Settlement, StakingError> {
        if amount == 0 {
            return Err(StakingError::InvalidAmount);
        }

        let mut pool = pool;
        let mut position = position;
        rewards::advance(&env, &mut pool, now)?;
        rewards::settle(&env, &pool, &mut position, now)?;

        position.account.principal = position
            .account
            .principal
            .checked_add(amount)
            .ok_or(StakingError::ArithmeticOverflow)?;
        pool.total_staked = pool
            .total_staked
            .checked_add(amount)
            .ok_or(StakingError::ArithmeticOverflow)?;
        pool.dynamic_rate = rate::dynamic_rate(pool.reward_rate, pool.total_staked)?;

        let projected = rewards::projected_allocation(&env, &pool)?;
        if projected > pool.allocated_reward {
            log!(&env, "stake limit reached", pool.allocated_reward, projected);
            return Err(StakingError::StakeLimitReached);
        }

        Ok(Settlement {
            pool,
            position,
            payout: 0,
        })
    }

    fn withdraw(
        env: Env,
        pool: PoolState,
        position: StakerPosition,
        amount: u128,
        now: u32,
    ) -> Result<Settlement, StakingError> {
        if amount == 0 {
            return Err(StakingError::InvalidAmount);
        }

        let mut pool = pool;
        let mut position = position;
        rewards::advance(&env, &mut pool, now)?;
        rewards::settle(&env, &pool, &mut position, now)?;

        let available = position.account.principal;
        if amount > available {
            log!(&env, "insufficient stake", available, amount);
            return Err(StakingError::InsufficientBalance);
        }

        position.account.principal = available - amount;
        pool.total_staked = pool
            .total_staked
            .checked_sub(amount)
            .ok_or(StakingError::ArithmeticOverflow)?;
        pool.dynamic_rate = rate::dynamic_rate(pool.reward_rate, pool.total_staked)?;

        Ok(Settlement {
            pool,
            position,
            payout: amount,
        })
    }

    /// Unlike the static-rate behaviour, claiming settles first, so the
    /// claim can draw on reward earned up to the current block.
    fn withdraw_reward(
        env: Env,
        pool: PoolState,
        position: StakerPosition,
        amount: u128,
        now: u32,
    ) -> Result<Settlement, StakingError> {
        if amount == 0 {
            return Err(StakingError::InvalidAmount);
        }

        let mut pool = pool;
        let mut position = position;
        rewards::advance(&env, &mut pool, now)?;
        rewards::settle(&env, &pool, &mut position, now)?;

        let available = position.account.accrued_reward;
        if amount > available {
            log!(&env, "insufficient reward", available, amount);
            return Err(StakingError::InsufficientBalance);
        }
        position.account.accrued_reward = available - amount;

        Ok(Settlement {
            pool,
            position,
            payout: amount,
        })
    }

    fn change_reward_rate(
        env: Env,
        pool: PoolState,
        new_rate: u128,
        now: u32,
    ) -> Result<PoolState, StakingError> {
        let mut pool = pool;
        rewards::advance(&env, &mut pool, now)?;
        pool.reward_rate = new_rate;
        pool.dynamic_rate = rate::dynamic_rate(new_rate, pool.total_staked)?;
        Ok(pool)
    }

    /// Lowering the cap below what was already distributed is allowed and
    /// simply halts emission.
    fn set_allocated_reward(
        env: Env,
        pool: PoolState,
        amount: u128,
        now: u32,
    ) -> Result<PoolState, StakingError> {
        let mut pool = pool;
        rewards::advance(&env, &mut pool, now)?;
        pool.allocated_reward = amount;
        Ok(pool)
    }

    fn reward_rate(_env: Env, pool: PoolState) -> u128 {
        pool.dynamic_rate
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
