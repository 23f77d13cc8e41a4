#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, Env, String};

/// Fired once when the ledger is bootstrapped.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub owner: Address,
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
    pub initial_supply: u128,
}

pub fn publish_initialized(
    env: &Env,
    owner: Address,
    name: String,
    symbol: String,
    decimals: u32,
    initial_supply: u128,
) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            owner,
            name,
            symbol,
            decimals,
            initial_supply,
        },
    );
}

/// `Transfer(from, to, amount)`. Mints use the null account as `from`,
/// burns use it as `to`.
pub fn publish_transfer(env: &Env, from: Address, to: Address, amount: u128) {
    env.events()
        .publish((symbol_short!("transfer"), from, to), amount);
}

/// `Approval(owner, spender, amount)` carrying the resulting allowance.
pub fn publish_approval(env: &Env, owner: Address, spender: Address, amount: u128) {
    env.events()
        .publish((symbol_short!("approve"), owner, spender), amount);
}
