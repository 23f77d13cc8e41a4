//! The utilisation curve.
//!
//! ```text
//! dynamic_rate = reward_rate × PRECISION × PIVOT / (PIVOT + total_staked)
//! ```
//!
//! At zero utilisation every unit earns the full `reward_rate`; the rate
//! halves once `PIVOT` units are staked and keeps falling as more arrive.
//! At [`PRECISION`] the rate stays above zero for any pool below 10²⁷
//! units, a billion tokens at 18 decimals.

use common::StakingError;

/// Fixed-point scale of `dynamic_rate` and of the reward-per-unit
/// accumulator.
pub const PRECISION: u128 = 1_000_000_000_000_000_000_000_000;

/// Total stake at which the per-unit rate is half the base rate.
pub const PIVOT: u128 = 1_000;

/// Per-unit, per-block reward scaled by [`PRECISION`].
pub fn dynamic_rate(reward_rate: u128, total_staked: u128) -> Result<u128, StakingError> {
    let numerator = reward_rate
        .checked_mul(PRECISION)
        .and_then(|v| v.checked_mul(PIVOT))
        .ok_or(StakingError::ArithmeticOverflow)?;
    let denominator = PIVOT
        .checked_add(total_staked)
        .ok_or(StakingError::ArithmeticOverflow)?;
    Ok(numerator / denominator)
}
