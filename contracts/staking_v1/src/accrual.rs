//! Flat-rate reward accrual.
//!
//! A staker earns `principal × reward_rate` per block. The amount is only
//! written when the staker's record is touched, covering the blocks since
//! the record's checkpoint.

use common::{StakerAccount, StakingError};

/// Reward earned by `principal` at `reward_rate` over `[from, to)`.
pub fn pending(principal: u128, reward_rate: u128, from: u32, to: u32) -> Result<u128, StakingError> {
    let elapsed = to.checked_sub(from).ok_or(StakingError::ArithmeticOverflow)?;
    principal
        .checked_mul(reward_rate)
        .and_then(|per_block| per_block.checked_mul(u128::from(elapsed)))
        .ok_or(StakingError::ArithmeticOverflow)
}

/// Bring `account` up to `now`: add the pending reward and move the
/// checkpoint.
pub fn accrue(account: &mut StakerAccount, reward_rate: u128, now: u32) -> Result<(), StakingError> {
    let earned = pending(account.principal, reward_rate, account.checkpoint, now)?;
    account.accrued_reward = account
        .accrued_reward
        .checked_add(earned)
        .ok_or(StakingError::ArithmeticOverflow)?;
    account.checkpoint = now;
    Ok(())
}
