use soroban_sdk::{Address, Env, String};

/// Strkey of the all-zero ed25519 account. No secret key exists for it, so it
/// can never authorise a call.
pub const NULL_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

/// The account used where an address argument means "nobody": the source of
/// mint transfers and the destination of burns.
pub fn null_account(env: &Env) -> Address {
    Address::from_string(&String::from_str(env, NULL_ACCOUNT))
}

pub fn is_null(env: &Env, id: &Address) -> bool {
    *id == null_account(env)
}
