#![no_std]

mod balances;
pub mod events;

use common::{access, account, pause, LedgerError};
use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, String, Symbol};

// ── Storage key constants ────────────────────────────────────────────────────

const INITIALIZED: Symbol = symbol_short!("INIT");
const NAME: Symbol = symbol_short!("NAME");
const SYMBOL: Symbol = symbol_short!("SYMBOL");
const DECIMALS: Symbol = symbol_short!("DECIMALS");

// ── Contract ─────────────────────────────────────────────────────────────────

/// Fungible-token ledger: balances, allowances, supply, owner-gated
/// mint/burn and a pause gate over every mutating entry point.
#[contract]
pub struct LedgerContract;

#[contractimpl]
impl LedgerContract {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bootstrap the ledger and mint `initial_supply` to `owner`.
    pub fn initialize(
        env: Env,
        owner: Address,
        name: String,
        symbol: String,
        decimals: u32,
        initial_supply: u128,
    ) -> Result<(), LedgerError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(LedgerError::AlreadyInitialized);
        }
        if account::is_null(&env, &owner) {
            return Err(LedgerError::InvalidReceiver);
        }

        env.storage().instance().set(&INITIALIZED, &true);
        env.storage().instance().set(&NAME, &name);
        env.storage().instance().set(&SYMBOL, &symbol);
        env.storage().instance().set(&DECIMALS, &decimals);
        access::set_owner(&env, &owner);

        balances::credit(&env, &owner, initial_supply)?;
        balances::increase_supply(&env, initial_supply)?;

        events::publish_initialized(
            &env,
            owner.clone(),
            name,
            symbol,
            decimals,
            initial_supply,
        );
        events::publish_transfer(&env, account::null_account(&env), owner, initial_supply);

        Ok(())
    }

    // ── Supply management ───────────────────────────────────────────────────

    /// Create `amount` new tokens in `to`'s balance. Owner only.
    pub fn mint(env: Env, caller: Address, to: Address, amount: u128) -> Result<(), LedgerError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_not_paused(&env)?;
        access::require_owner(&env, &caller)?;

        if account::is_null(&env, &to) {
            return Err(LedgerError::InvalidReceiver);
        }

        balances::increase_supply(&env, amount)?;
        balances::credit(&env, &to, amount)?;

        events::publish_transfer(&env, account::null_account(&env), to, amount);

        Ok(())
    }

    /// Destroy `amount` tokens. Owner only, and only from the owner's own
    /// balance.
    pub fn burn(env: Env, caller: Address, from: Address, amount: u128) -> Result<(), LedgerError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_not_paused(&env)?;
        access::require_owner(&env, &caller)?;

        if from != caller || account::is_null(&env, &from) {
            return Err(LedgerError::NotOwnerBalance);
        }

        balances::debit(&env, &from, amount)?;
        balances::decrease_supply(&env, amount)?;

        events::publish_transfer(&env, from, account::null_account(&env), amount);

        Ok(())
    }

    // ── Transfers ───────────────────────────────────────────────────────────

    pub fn transfer(env: Env, from: Address, to: Address, amount: u128) -> Result<(), LedgerError> {
        Self::require_initialized(&env)?;
        from.require_auth();
        Self::require_not_paused(&env)?;

        if account::is_null(&env, &to) {
            return Err(LedgerError::InvalidReceiver);
        }

        balances::move_balance(&env, &from, &to, amount)?;

        events::publish_transfer(&env, from, to, amount);

        Ok(())
    }

    /// Move `amount` from `from` to `to` on behalf of `spender`, consuming
    /// exactly `amount` of the allowance `from` granted to `spender`.
    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: u128,
    ) -> Result<(), LedgerError> {
        Self::require_initialized(&env)?;
        spender.require_auth();
        Self::require_not_paused(&env)?;

        if account::is_null(&env, &from) {
            return Err(LedgerError::InvalidSender);
        }
        if account::is_null(&env, &to) {
            return Err(LedgerError::InvalidReceiver);
        }

        balances::spend_allowance(&env, &from, &spender, amount)?;
        balances::move_balance(&env, &from, &to, amount)?;

        events::publish_transfer(&env, from, to, amount);

        Ok(())
    }

    // ── Allowances ──────────────────────────────────────────────────────────

    /// Set the allowance of `spender` over `owner`'s balance to exactly
    /// `amount`.
    pub fn approve(env: Env, owner: Address, spender: Address, amount: u128) -> Result<(), LedgerError> {
        Self::require_initialized(&env)?;
        owner.require_auth();
        Self::require_not_paused(&env)?;
        Self::require_spender(&env, &spender)?;

        balances::set_allowance(&env, &owner, &spender, amount);

        events::publish_approval(&env, owner, spender, amount);

        Ok(())
    }

    pub fn increase_allowance(
        env: Env,
        owner: Address,
        spender: Address,
        delta: u128,
    ) -> Result<(), LedgerError> {
        Self::require_initialized(&env)?;
        owner.require_auth();
        Self::require_not_paused(&env)?;
        Self::require_spender(&env, &spender)?;

        let updated = balances::allowance(&env, &owner, &spender)
            .checked_add(delta)
            .ok_or(LedgerError::ArithmeticOverflow)?;
        balances::set_allowance(&env, &owner, &spender, updated);

        events::publish_approval(&env, owner, spender, updated);

        Ok(())
    }

    /// Lower an allowance. Fails rather than going below zero.
    pub fn decrease_allowance(
        env: Env,
        owner: Address,
        spender: Address,
        delta: u128,
    ) -> Result<(), LedgerError> {
        Self::require_initialized(&env)?;
        owner.require_auth();
        Self::require_not_paused(&env)?;
        Self::require_spender(&env, &spender)?;

        let updated = balances::spend_allowance(&env, &owner, &spender, delta)?;

        events::publish_approval(&env, owner, spender, updated);

        Ok(())
    }

    // ── Pause gate ──────────────────────────────────────────────────────────

    pub fn pause(env: Env, caller: Address) -> Result<(), LedgerError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        access::require_owner(&env, &caller)?;

        pause::pause(&env, &caller);
        Ok(())
    }

    pub fn unpause(env: Env, caller: Address) -> Result<(), LedgerError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        access::require_owner(&env, &caller)?;

        pause::unpause(&env, &caller);
        Ok(())
    }

    // ── Ownership (two-step) ────────────────────────────────────────────────

    pub fn propose_owner(env: Env, caller: Address, new_owner: Address) -> Result<(), LedgerError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        if account::is_null(&env, &new_owner) {
            return Err(LedgerError::InvalidReceiver);
        }
        access::propose_owner(&env, &caller, &new_owner)?;
        Ok(())
    }

    pub fn accept_owner(env: Env, new_owner: Address) -> Result<(), LedgerError> {
        Self::require_initialized(&env)?;
        new_owner.require_auth();
        access::accept_owner(&env, &new_owner)?;
        Ok(())
    }

    pub fn cancel_owner_transfer(env: Env, caller: Address) -> Result<(), LedgerError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        access::cancel_owner_transfer(&env, &caller)?;
        Ok(())
    }

    // ── View functions ───────────────────────────────────────────────────────

    pub fn balance(env: Env, id: Address) -> u128 {
        balances::balance_of(&env, &id)
    }

    pub fn allowance(env: Env, owner: Address, spender: Address) -> u128 {
        balances::allowance(&env, &owner, &spender)
    }

    pub fn total_supply(env: Env) -> u128 {
        balances::total_supply(&env)
    }

    pub fn owner(env: Env) -> Result<Address, LedgerError> {
        access::owner(&env).ok_or(LedgerError::NotInitialized)
    }

    pub fn pending_owner(env: Env) -> Option<Address> {
        access::pending_owner(&env)
    }

    pub fn paused(env: Env) -> bool {
        pause::is_paused(&env)
    }

    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&INITIALIZED)
    }

    pub fn name(env: Env) -> Result<String, LedgerError> {
        env.storage()
            .instance()
            .get(&NAME)
            .ok_or(LedgerError::NotInitialized)
    }

    pub fn symbol(env: Env) -> Result<String, LedgerError> {
        env.storage()
            .instance()
            .get(&SYMBOL)
            .ok_or(LedgerError::NotInitialized)
    }

    pub fn decimals(env: Env) -> Result<u32, LedgerError> {
        env.storage()
            .instance()
            .get(&DECIMALS)
            .ok_or(LedgerError::NotInitialized)
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    fn require_initialized(env: &Env) -> Result<(), LedgerError> {
        if !env.storage().instance().has(&INITIALIZED) {
            return Err(LedgerError::NotInitialized);
        }
        Ok(())
    }

    fn require_not_paused(env: &Env) -> Result<(), LedgerError> {
        if pause::is_paused(env) {
            return Err(LedgerError::Paused);
        }
        Ok(())
    }

    fn require_spender(env: &Env, spender: &Address) -> Result<(), LedgerError> {
        if account::is_null(env, spender) {
            return Err(LedgerError::InvalidSpender);
        }
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
