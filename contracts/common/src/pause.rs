#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, Env, Symbol};

pub const PAUSED: Symbol = symbol_short!("PAUSED");

pub fn is_paused(env: &Env) -> bool {
    env.storage().instance().get(&PAUSED).unwrap_or(false)
}

/// Engage the gate. Pausing an already paused contract is a flat set and
/// re-emits the event.
pub fn pause(env: &Env, caller: &Address) {
    env.storage().instance().set(&PAUSED, &true);
    env.events().publish((symbol_short!("paused"),), caller.clone());
}

/// Release the gate. Same flat-set semantics as [`pause`].
pub fn unpause(env: &Env, caller: &Address) {
    env.storage().instance().set(&PAUSED, &false);
    env.events().publish((symbol_short!("unpaused"),), caller.clone());
}
