//! Single-owner access control.
//!
//! The owner is written once at initialisation and afterwards only moves
//! through a two-step transfer: the current owner proposes, the proposed
//! address accepts. Callers must have been authenticated with
//! `require_auth()` before any of these helpers run.

#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

// ── Storage keys ─────────────────────────────────────────────────────────────

pub const OWNER: Symbol = symbol_short!("OWNER");
pub const PENDING_OWNER: Symbol = symbol_short!("PEND_OWN");

/// Reasons an ownership check can fail. Each contract maps these into its own
/// error enum through `From`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AccessError {
    NotInitialized,
    NotOwner,
    NoPendingOwner,
}

// ── Event payloads ───────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnerTransferEvent {
    pub previous_owner: Address,
    pub new_owner: Address,
}

// ── Reads / writes ───────────────────────────────────────────────────────────

pub fn owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&OWNER)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&OWNER, owner);
}

pub fn pending_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&PENDING_OWNER)
}

/// Guard: fails unless `caller` is the stored owner.
pub fn require_owner(env: &Env, caller: &Address) -> Result<(), AccessError> {
    let owner = owner(env).ok_or(AccessError::NotInitialized)?;
    if *caller != owner {
        return Err(AccessError::NotOwner);
    }
    Ok(())
}

// ── Two-step transfer ────────────────────────────────────────────────────────

/// Record `new_owner` as the pending owner. Replaces any earlier proposal.
pub fn propose_owner(env: &Env, caller: &Address, new_owner: &Address) -> Result<(), AccessError> {
    require_owner(env, caller)?;
    env.storage().instance().set(&PENDING_OWNER, new_owner);

    env.events().publish(
        (symbol_short!("OWN_PROP"), caller.clone()),
        OwnerTransferEvent {
            previous_owner: caller.clone(),
            new_owner: new_owner.clone(),
        },
    );
    Ok(())
}

/// Complete a transfer. Only the pending owner may accept.
pub fn accept_owner(env: &Env, new_owner: &Address) -> Result<Address, AccessError> {
    let pending = pending_owner(env).ok_or(AccessError::NoPendingOwner)?;
    if *new_owner != pending {
        return Err(AccessError::NotOwner);
    }
    let previous = owner(env).ok_or(AccessError::NotInitialized)?;

    set_owner(env, new_owner);
    env.storage().instance().remove(&PENDING_OWNER);

    env.events().publish(
        (symbol_short!("OWN_ACPT"), new_owner.clone()),
        OwnerTransferEvent {
            previous_owner: previous.clone(),
            new_owner: new_owner.clone(),
        },
    );
    Ok(previous)
}

/// Drop a pending proposal. Only the current owner may cancel.
pub fn cancel_owner_transfer(env: &Env, caller: &Address) -> Result<Address, AccessError> {
    require_owner(env, caller)?;
    let pending = pending_owner(env).ok_or(AccessError::NoPendingOwner)?;
    env.storage().instance().remove(&PENDING_OWNER);

    env.events().publish(
        (symbol_short!("OWN_CNCL"), caller.clone()),
        OwnerTransferEvent {
            previous_owner: caller.clone(),
            new_owner: pending.clone(),
        },
    );
    Ok(pending)
}
