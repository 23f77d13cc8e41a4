//! Balance, allowance and supply bookkeeping.
//!
//! Every counter is a `u128` updated with checked arithmetic. Shortfalls log
//! the `(available, requested)` pair before failing, since contract errors
//! carry no payload.

use common::layout::{PERSISTENT_TTL_EXTEND_TO, PERSISTENT_TTL_THRESHOLD};
use common::LedgerError;
use soroban_sdk::{log, symbol_short, Address, Env, Symbol};

const TOTAL_SUPPLY: Symbol = symbol_short!("SUPPLY");

// Persistent tuple keys: (prefix, owner[, spender])
const BALANCE: Symbol = symbol_short!("BAL");
const ALLOWANCE: Symbol = symbol_short!("ALLOW");

fn balance_key(id: &Address) -> (Symbol, Address) {
    (BALANCE, id.clone())
}

fn allowance_key(owner: &Address, spender: &Address) -> (Symbol, Address, Address) {
    (ALLOWANCE, owner.clone(), spender.clone())
}

// ── Supply ───────────────────────────────────────────────────────────────────

pub fn total_supply(env: &Env) -> u128 {
    env.storage().instance().get(&TOTAL_SUPPLY).unwrap_or(0)
}

pub fn increase_supply(env: &Env, amount: u128) -> Result<u128, LedgerError> {
    let supply = total_supply(env)
        .checked_add(amount)
        .ok_or(LedgerError::ArithmeticOverflow)?;
    env.storage().instance().set(&TOTAL_SUPPLY, &supply);
    Ok(supply)
}

pub fn decrease_supply(env: &Env, amount: u128) -> Result<u128, LedgerError> {
    let supply = total_supply(env)
        .checked_sub(amount)
        .ok_or(LedgerError::ArithmeticOverflow)?;
    env.storage().instance().set(&TOTAL_SUPPLY, &supply);
    Ok(supply)
}

// ── Balances ─────────────────────────────────────────────────────────────────

pub fn balance_of(env: &Env, id: &Address) -> u128 {
    env.storage().persistent().get(&balance_key(id)).unwrap_or(0)
}

fn write_balance(env: &Env, id: &Address, amount: u128) {
    let key = balance_key(id);
    env.storage().persistent().set(&key, &amount);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND_TO);
}

pub fn credit(env: &Env, id: &Address, amount: u128) -> Result<(), LedgerError> {
    let balance = balance_of(env, id)
        .checked_add(amount)
        .ok_or(LedgerError::ArithmeticOverflow)?;
    write_balance(env, id, balance);
    Ok(())
}

pub fn debit(env: &Env, id: &Address, amount: u128) -> Result<(), LedgerError> {
    let available = balance_of(env, id);
    if available < amount {
        log!(env, "insufficient balance", id.clone(), available, amount);
        return Err(LedgerError::InsufficientBalance);
    }
    write_balance(env, id, available - amount);
    Ok(())
}

/// Debit `from` and credit `to` in one step. Either both writes land or the
/// invocation fails and neither does.
pub fn move_balance(env: &Env, from: &Address, to: &Address, amount: u128) -> Result<(), LedgerError> {
    debit(env, from, amount)?;
    credit(env, to, amount)
}

// ── Allowances ───────────────────────────────────────────────────────────────

pub fn allowance(env: &Env, owner: &Address, spender: &Address) -> u128 {
    env.storage()
        .persistent()
        .get(&allowance_key(owner, spender))
        .unwrap_or(0)
}

pub fn set_allowance(env: &Env, owner: &Address, spender: &Address, amount: u128) {
    let key = allowance_key(owner, spender);
    env.storage().persistent().set(&key, &amount);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND_TO);
}

/// Consume `amount` of the allowance `owner` granted to `spender`.
pub fn spend_allowance(
    env: &Env,
    owner: &Address,
    spender: &Address,
    amount: u128,
) -> Result<u128, LedgerError> {
    let available = allowance(env, owner, spender);
    if available < amount {
        log!(env, "insufficient allowance", spender.clone(), available, amount);
        return Err(LedgerError::InsufficientAllowance);
    }
    let remaining = available - amount;
    set_allowance(env, owner, spender, remaining);
    Ok(remaining)
}
