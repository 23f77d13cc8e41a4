#![no_std]

//! Static-rate staking behaviour.
//!
//! Every staked unit earns `reward_rate` per block. Rewards are settled
//! lazily, when the staker stakes or withdraws principal. Claiming reward
//! does not settle, so a claim can only draw on what earlier operations
//! already credited.

pub mod accrual;

use common::{PoolState, Settlement, StakerPosition, StakingBehavior, StakingError};
use soroban_sdk::{contract, contractimpl, log, Env};

/// Layout version this behaviour reads and writes.
pub const VERSION: u32 = 1;

#[contract]
pub struct StakingV1;

#[contractimpl]
impl StakingBehavior for StakingV1 {
    fn version(_env: Env) -> u32 {
        VERSION
    }

    /// V1 owns no appended slots.
    fn install(
        _env: Env,
        pool: PoolState,
        _previous: u32,
        _now: u32,
    ) -> Result<PoolState, StakingError> {
        Ok(pool)
    }

    fn stake(
        _env: Env,
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
        accrual::accrue(&mut position.account, pool.reward_rate, now)?;

        position.account.principal = position
            .account
            .principal
            .checked_add(amount)
            .ok_or(StakingError::ArithmeticOverflow)?;
        pool.total_staked = pool
            .total_staked
            .checked_add(amount)
            .ok_or(StakingError::ArithmeticOverflow)?;

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
        let available = position.account.principal;
        if amount > available {
            log!(&env, "insufficient stake", available, amount);
            return Err(StakingError::InsufficientBalance);
        }

        let mut pool = pool;
        let mut position = position;
        accrual::accrue(&mut position.account, pool.reward_rate, now)?;

        position.account.principal = available - amount;
        pool.total_staked = pool
            .total_staked
            .checked_sub(amount)
            .ok_or(StakingError::ArithmeticOverflow)?;

        Ok(Settlement {
            pool,
            position,
            payout: amount,
        })
    }

    fn withdraw_reward(
        env: Env,
        pool: PoolState,
        position: StakerPosition,
        amount: u128,
        _now: u32,
    ) -> Result<Settlement, StakingError> {
        if amount == 0 {
            return Err(StakingError::InvalidAmount);
        }
        let available = position.account.accrued_reward;
        if amount > available {
            log!(&env, "insufficient reward", available, amount);
            return Err(StakingError::InsufficientBalance);
        }

        let mut position = position;
        position.account.accrued_reward = available - amount;

        Ok(Settlement {
            pool,
            position,
            payout: amount,
        })
    }

    /// Replaces the flat rate. Stakers settle at whatever rate is current
    /// when they next stake or withdraw.
    fn change_reward_rate(
        _env: Env,
        pool: PoolState,
        new_rate: u128,
        _now: u32,
    ) -> Result<PoolState, StakingError> {
        let mut pool = pool;
        pool.reward_rate = new_rate;
        Ok(pool)
    }

    fn set_allocated_reward(
        _env: Env,
        _pool: PoolState,
        _amount: u128,
        _now: u32,
    ) -> Result<PoolState, StakingError> {
        Err(StakingError::UnsupportedOperation)
    }

    fn reward_rate(_env: Env, pool: PoolState) -> u128 {
        pool.reward_rate
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
