#![no_std]

//! Upgradeable staking proxy.
//!
//! The proxy owns every storage slot listed in [`common::layout`] and the
//! staking token it holds. Reward logic lives in a separate, stateless
//! implementation contract: for each operation the proxy loads a snapshot,
//! hands it to the installed implementation, commits the result and only
//! then moves tokens. Replacing the implementation address with
//! [`StakingProxy::update_code`] changes behaviour without rewriting a
//! single stored value.

mod dispatch;
pub mod events;
mod storage;

use common::layout::INITIALIZER_SELECTOR;
use common::{
    access, account, pause, PoolState, Settlement, StakerAccount, StakerPosition,
    StakingBehaviorClient, StakingError,
};
use soroban_sdk::{contract, contractimpl, log, Address, BytesN, Env, InvokeError};

#[contract]
pub struct StakingProxy;

#[contractimpl]
impl StakingProxy {
    // ── Construction ────────────────────────────────────────────────────────

    /// Install `code` and dispatch `selector` on behalf of `deployer`.
    ///
    /// The only selector understood is the initializer's
    /// ([`INITIALIZER_SELECTOR`]), which makes `deployer` the owner.
    pub fn initialize(
        env: Env,
        deployer: Address,
        selector: BytesN<4>,
        code: Address,
    ) -> Result<(), StakingError> {
        if storage::code(&env).is_some() {
            return Err(StakingError::AlreadyInitialized);
        }
        deployer.require_auth();

        storage::set_code(&env, &code);

        if selector.to_array() != INITIALIZER_SELECTOR {
            log!(&env, "unknown selector", selector);
            return Err(StakingError::UnknownSelector);
        }
        Self::run_initializer(&env, &deployer)
    }

    /// Claim ownership of a proxy whose code is installed but whose
    /// initializer has not run yet. Fails for the lifetime of the storage
    /// once it has.
    pub fn initializer(env: Env, caller: Address) -> Result<(), StakingError> {
        if storage::code(&env).is_none() {
            return Err(StakingError::NotInitialized);
        }
        caller.require_auth();
        Self::run_initializer(&env, &caller)
    }

    // ── Upgrade ─────────────────────────────────────────────────────────────

    /// Swap the implementation. The new code's install hook runs against
    /// the current pool before the pointer moves.
    pub fn update_code(env: Env, caller: Address, code: Address) -> Result<(), StakingError> {
        Self::require_owner(&env, &caller)?;
        let previous = storage::code(&env).ok_or(StakingError::NotInitialized)?;
        let now = env.ledger().sequence();

        let version = install(&env, &code, now)?;
        storage::set_code(&env, &code);

        events::publish_code_updated(&env, previous, code, version, now);
        Ok(())
    }

    // ── Administration ──────────────────────────────────────────────────────

    pub fn set_staking_token(env: Env, caller: Address, token: Address) -> Result<(), StakingError> {
        Self::require_owner(&env, &caller)?;
        if account::is_null(&env, &token) {
            return Err(StakingError::InvalidToken);
        }

        storage::set_staking_token(&env, &token);
        events::publish_token_set(&env, token);
        Ok(())
    }

    pub fn change_reward_rate(env: Env, caller: Address, new_rate: u128) -> Result<(), StakingError> {
        Self::require_owner(&env, &caller)?;

        let before = storage::load_pool(&env);
        let after = dispatch::forward(
            &env,
            Self::behavior(&env)?.try_change_reward_rate(&before, &new_rate, &env.ledger().sequence()),
        )?;
        storage::store_pool(&env, &before, &after);

        events::publish_rate_changed(&env, before.reward_rate, after.reward_rate);
        Ok(())
    }

    /// Cap on cumulative reward. Only meaningful to implementations that
    /// enforce one; others reject it with `UnsupportedOperation`.
    pub fn set_allocated_reward(env: Env, caller: Address, amount: u128) -> Result<(), StakingError> {
        Self::require_owner(&env, &caller)?;

        let before = storage::load_pool(&env);
        let after = dispatch::forward(
            &env,
            Self::behavior(&env)?.try_set_allocated_reward(&before, &amount, &env.ledger().sequence()),
        )?;
        storage::store_pool(&env, &before, &after);

        events::publish_allocation_set(&env, after.allocated_reward);
        Ok(())
    }

    pub fn pause(env: Env, caller: Address) -> Result<(), StakingError> {
        Self::require_owner(&env, &caller)?;
        pause::pause(&env, &caller);
        Ok(())
    }

    pub fn unpause(env: Env, caller: Address) -> Result<(), StakingError> {
        Self::require_owner(&env, &caller)?;
        pause::unpause(&env, &caller);
        Ok(())
    }

    // ── Ownership (two-step) ────────────────────────────────────────────────

    pub fn propose_owner(env: Env, caller: Address, new_owner: Address) -> Result<(), StakingError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        access::propose_owner(&env, &caller, &new_owner)?;
        Ok(())
    }

    pub fn accept_owner(env: Env, new_owner: Address) -> Result<(), StakingError> {
        Self::require_initialized(&env)?;
        new_owner.require_auth();
        access::accept_owner(&env, &new_owner)?;
        Ok(())
    }

    pub fn cancel_owner_transfer(env: Env, caller: Address) -> Result<(), StakingError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        access::cancel_owner_transfer(&env, &caller)?;
        Ok(())
    }

    // ── Staking ─────────────────────────────────────────────────────────────

    /// Deposit `amount` of the staking token. The staker must have approved
    /// the proxy for at least `amount` on the token.
    pub fn stake(env: Env, staker: Address, amount: u128) -> Result<(), StakingError> {
        let token = Self::require_active(&env, &staker)?;
        let behavior = Self::behavior(&env)?;

        settle_staker(&env, &staker, |pool, position, now| {
            behavior.try_stake(pool, position, &amount, now)
        })?;
        dispatch::pull(&env, &token, &staker, amount)?;

        events::publish_staked(&env, staker, amount);
        Ok(())
    }

    /// Return `amount` of principal to the staker.
    pub fn withdraw(env: Env, staker: Address, amount: u128) -> Result<(), StakingError> {
        let token = Self::require_active(&env, &staker)?;
        let behavior = Self::behavior(&env)?;

        let settlement = settle_staker(&env, &staker, |pool, position, now| {
            behavior.try_withdraw(pool, position, &amount, now)
        })?;
        dispatch::push(&env, &token, &staker, settlement.payout)?;

        events::publish_withdrawn(&env, staker, settlement.payout);
        Ok(())
    }

    /// Pay out `amount` of accrued reward, in the staking token.
    pub fn withdraw_reward(env: Env, staker: Address, amount: u128) -> Result<(), StakingError> {
        let token = Self::require_active(&env, &staker)?;
        let behavior = Self::behavior(&env)?;

        let settlement = settle_staker(&env, &staker, |pool, position, now| {
            behavior.try_withdraw_reward(pool, position, &amount, now)
        })?;
        dispatch::push(&env, &token, &staker, settlement.payout)?;

        events::publish_reward_paid(&env, staker, settlement.payout);
        Ok(())
    }

    // ── View functions ───────────────────────────────────────────────────────

    pub fn owner(env: Env) -> Result<Address, StakingError> {
        access::owner(&env).ok_or(StakingError::NotInitialized)
    }

    pub fn pending_owner(env: Env) -> Option<Address> {
        access::pending_owner(&env)
    }

    pub fn paused(env: Env) -> bool {
        pause::is_paused(&env)
    }

    pub fn is_initialized(env: Env) -> bool {
        storage::is_initialized(&env)
    }

    pub fn staking_token(env: Env) -> Option<Address> {
        storage::staking_token(&env)
    }

    pub fn code(env: Env) -> Option<Address> {
        storage::code(&env)
    }

    pub fn code_version(env: Env) -> Result<u32, StakingError> {
        dispatch::query(&env, Self::behavior(&env)?.try_version())
    }

    /// Rate as the installed implementation reports it: the flat rate in
    /// v1, the fixed-point dynamic rate in v2.
    pub fn reward_rate(env: Env) -> Result<u128, StakingError> {
        let pool = storage::load_pool(&env);
        dispatch::query(&env, Self::behavior(&env)?.try_reward_rate(&pool))
    }

    /// Base rate as stored, independent of the installed implementation.
    pub fn base_reward_rate(env: Env) -> u128 {
        storage::load_pool(&env).reward_rate
    }

    pub fn total_staked(env: Env) -> u128 {
        storage::load_pool(&env).total_staked
    }

    pub fn allocated_reward(env: Env) -> u128 {
        storage::load_pool(&env).allocated_reward
    }

    pub fn distributed_reward(env: Env) -> u128 {
        storage::load_pool(&env).distributed_reward
    }

    /// The staker's record as of their last stake, withdrawal or claim.
    pub fn balances(env: Env, staker: Address) -> StakerAccount {
        storage::load_account(&env, &staker)
    }

    /// Accrued reward as of the staker's last interaction.
    pub fn get_reward(env: Env, staker: Address) -> u128 {
        storage::load_account(&env, &staker).accrued_reward
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    fn run_initializer(env: &Env, caller: &Address) -> Result<(), StakingError> {
        if storage::is_initialized(env) {
            return Err(StakingError::AlreadyInitialized);
        }

        access::set_owner(env, caller);
        storage::seed_reward_rate(env);
        storage::set_initialized(env);

        let code = storage::code(env).ok_or(StakingError::NotInitialized)?;
        let version = install(env, &code, env.ledger().sequence())?;
        events::publish_initialized(env, caller.clone(), code, version);
        Ok(())
    }

    fn behavior(env: &Env) -> Result<StakingBehaviorClient<'static>, StakingError> {
        let code = storage::code(env).ok_or(StakingError::NotInitialized)?;
        Ok(StakingBehaviorClient::new(env, &code))
    }

    fn require_initialized(env: &Env) -> Result<(), StakingError> {
        if !storage::is_initialized(env) {
            return Err(StakingError::NotInitialized);
        }
        Ok(())
    }

    fn require_owner(env: &Env, caller: &Address) -> Result<(), StakingError> {
        Self::require_initialized(env)?;
        caller.require_auth();
        access::require_owner(env, caller)?;
        Ok(())
    }

    /// Gate shared by the staker operations. Returns the staking token.
    fn require_active(env: &Env, staker: &Address) -> Result<Address, StakingError> {
        Self::require_initialized(env)?;
        staker.require_auth();
        if pause::is_paused(env) {
            return Err(StakingError::Paused);
        }
        storage::staking_token(env).ok_or(StakingError::InvalidToken)
    }
}

/// Run `code`'s install hook against the current pool and commit the result.
/// Returns the layout version now live.
fn install(env: &Env, code: &Address, now: u32) -> Result<u32, StakingError> {
    let behavior = StakingBehaviorClient::new(env, code);
    let version = dispatch::query(env, behavior.try_version())?;
    let previous = storage::code_version(env);

    let before = storage::load_pool(env);
    let installed = dispatch::forward(env, behavior.try_install(&before, &previous, &now))?;
    storage::store_pool(env, &before, &installed);
    storage::set_code_version(env, version, now);
    Ok(version)
}

/// Run one staker operation against the installed implementation and commit
/// its result. Tokens move only after this returns.
fn settle_staker<F, C>(env: &Env, staker: &Address, op: F) -> Result<Settlement, StakingError>
where
    F: FnOnce(
        &PoolState,
        &StakerPosition,
        &u32,
    ) -> Result<Result<Settlement, C>, Result<StakingError, InvokeError>>,
{
    let now = env.ledger().sequence();
    let pool = storage::load_pool(env);
    let position = storage::load_position(env, staker);

    let settlement = dispatch::forward(env, op(&pool, &position, &now))?;

    storage::store_pool(env, &pool, &settlement.pool);
    storage::store_position(env, staker, &position, &settlement.position);
    Ok(settlement)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
