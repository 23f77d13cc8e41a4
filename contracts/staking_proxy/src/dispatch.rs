//! Calls out of the proxy: into the installed implementation, and into the
//! staking token.

use common::{LedgerClient, LedgerError, StakingError};
use soroban_sdk::{log, Address, Env, InvokeError};

/// Unwrap the result of a `try_*` call into an implementation.
///
/// Typed errors pass through unchanged. A trap, or a value that does not
/// decode, becomes [`StakingError::ImplementationFault`].
pub fn forward<T, C>(
    env: &Env,
    result: Result<Result<T, C>, Result<StakingError, InvokeError>>,
) -> Result<T, StakingError> {
    match result {
        Ok(Ok(value)) => Ok(value),
        Err(Ok(err)) => Err(err),
        Ok(Err(_)) | Err(Err(_)) => {
            log!(env, "implementation fault");
            Err(StakingError::ImplementationFault)
        }
    }
}

/// Unwrap the result of a `try_*` call to an implementation entry point that
/// cannot fail. Any error at all is a [`StakingError::ImplementationFault`].
pub fn query<T, C, E>(
    env: &Env,
    result: Result<Result<T, C>, Result<E, InvokeError>>,
) -> Result<T, StakingError> {
    match result {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(_)) | Err(_) => {
            log!(env, "implementation fault");
            Err(StakingError::ImplementationFault)
        }
    }
}

fn settle_transfer<C>(
    env: &Env,
    result: Result<Result<(), C>, Result<LedgerError, InvokeError>>,
) -> Result<(), StakingError> {
    match result {
        Ok(Ok(())) => Ok(()),
        Err(Ok(err)) => {
            log!(env, "token transfer failed", err as u32);
            Err(StakingError::TokenTransferFailed)
        }
        Ok(Err(_)) | Err(Err(_)) => {
            log!(env, "token transfer failed");
            Err(StakingError::TokenTransferFailed)
        }
    }
}

/// Pull `amount` of `token` from `staker` into the proxy. The staker must
/// have approved the proxy as spender.
pub fn pull(env: &Env, token: &Address, staker: &Address, amount: u128) -> Result<(), StakingError> {
    let this = env.current_contract_address();
    let result = LedgerClient::new(env, token).try_transfer_from(&this, staker, &this, &amount);
    settle_transfer(env, result)
}

/// Send `amount` of `token` from the proxy to `to`.
pub fn push(env: &Env, token: &Address, to: &Address, amount: u128) -> Result<(), StakingError> {
    let this = env.current_contract_address();
    let result = LedgerClient::new(env, token).try_transfer(&this, to, &amount);
    settle_transfer(env, result)
}
