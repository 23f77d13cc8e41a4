use soroban_sdk::{contractclient, Address, Env};

use crate::errors::LedgerError;

/// The slice of the ledger contract the staking proxy calls into.
#[contractclient(name = "LedgerClient")]
pub trait LedgerInterface {
    fn balance(env: Env, id: Address) -> u128;

    fn transfer(env: Env, from: Address, to: Address, amount: u128) -> Result<(), LedgerError>;

    fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: u128,
    ) -> Result<(), LedgerError>;
}
