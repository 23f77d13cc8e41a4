use soroban_sdk::{contractclient, Env};

use crate::errors::StakingError;
use crate::layout::{PoolState, Settlement, StakerPosition};

/// Interface every staking implementation exposes to the proxy.
///
/// Implementations are stateless: the proxy hands them a snapshot of the
/// slots they interpret plus the current block, and commits whatever they
/// return. Swapping the implementation address therefore changes behaviour
/// without touching a single stored value.
#[contractclient(name = "StakingBehaviorClient")]
pub trait StakingBehavior {
    /// Layout version this implementation was written against.
    fn version(env: Env) -> u32;

    /// Called when the proxy installs this implementation, so it can
    /// prepare the slots it appended. `previous` is the layout version of
    /// the code being replaced, or 0 on construction.
    fn install(env: Env, pool: PoolState, previous: u32, now: u32) -> Result<PoolState, StakingError>;

    fn stake(
        env: Env,
        pool: PoolState,
        position: StakerPosition,
        amount: u128,
        now: u32,
    ) -> Result<Settlement, StakingError>;

    fn withdraw(
        env: Env,
        pool: PoolState,
        position: StakerPosition,
        amount: u128,
        now: u32,
    ) -> Result<Settlement, StakingError>;

    fn withdraw_reward(
        env: Env,
        pool: PoolState,
        position: StakerPosition,
        amount: u128,
        now: u32,
    ) -> Result<Settlement, StakingError>;

    fn change_reward_rate(
        env: Env,
        pool: PoolState,
        new_rate: u128,
        now: u32,
    ) -> Result<PoolState, StakingError>;

    fn set_allocated_reward(
        env: Env,
        pool: PoolState,
        amount: u128,
        now: u32,
    ) -> Result<PoolState, StakingError>;

    /// Rate reported to callers. Units are implementation specific.
    fn reward_rate(env: Env, pool: PoolState) -> u128;
}
