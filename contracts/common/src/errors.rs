use soroban_sdk::contracterror;

use crate::access::AccessError;

/// Failures of the token ledger.
///
/// Insufficiency variants cannot carry their `(available, requested)` pair
/// across the host boundary; the ledger writes both values to the diagnostic
/// log right before returning the error.
#[contracterror]
#[derive(Clone, Debug, Eq, PartialEq, Copy)]
#[repr(u32)]
pub enum LedgerError {
    // ── Lifecycle (1–9) ──────────────────────────────────────
    NotInitialized = 1,
    AlreadyInitialized = 2,

    // ── Authorisation (10–19) ────────────────────────────────
    /// The caller is not the ledger owner.
    NotOwner = 10,
    /// Burns may only target the owner's own balance.
    NotOwnerBalance = 11,
    NoPendingOwner = 12,

    // ── Validation (30–39) ───────────────────────────────────
    InvalidReceiver = 30,
    InvalidSender = 31,
    InvalidSpender = 32,

    // ── Insufficiency (40–49) ────────────────────────────────
    InsufficientBalance = 40,
    InsufficientAllowance = 41,

    // ── Contract state (50–59) ───────────────────────────────
    Paused = 50,

    // ── Arithmetic (60–69) ───────────────────────────────────
    ArithmeticOverflow = 60,
}

/// Failures of the staking proxy and of every staking implementation.
///
/// Implementations return these codes to the proxy, which forwards them
/// unchanged to the original caller.
#[contracterror]
#[derive(Clone, Debug, Eq, PartialEq, Copy)]
#[repr(u32)]
pub enum StakingError {
    // ── Lifecycle (1–9) ──────────────────────────────────────
    NotInitialized = 1,
    AlreadyInitialized = 2,
    /// The construction selector does not name a known entry point.
    UnknownSelector = 3,

    // ── Authorisation (10–19) ────────────────────────────────
    NotOwner = 10,
    NoPendingOwner = 12,

    // ── Validation (30–39) ───────────────────────────────────
    /// Zero amounts are rejected by stake, withdraw and withdraw_reward.
    InvalidAmount = 30,
    /// The staking token is unset or the null account.
    InvalidToken = 31,

    // ── Insufficiency (40–49) ────────────────────────────────
    InsufficientBalance = 40,
    /// The stake would push projected reward allocation past the cap.
    StakeLimitReached = 42,

    // ── Contract state (50–59) ───────────────────────────────
    Paused = 50,

    // ── Arithmetic (60–69) ───────────────────────────────────
    ArithmeticOverflow = 60,

    // ── Proxy dispatch (70+) ─────────────────────────────────
    /// The installed implementation does not support this operation.
    UnsupportedOperation = 70,
    /// The implementation trapped or returned an undecodable value.
    ImplementationFault = 71,
    /// The staking token rejected a transfer issued by the proxy.
    TokenTransferFailed = 72,
}

impl From<AccessError> for LedgerError {
    fn from(err: AccessError) -> Self {
        match err {
            AccessError::NotInitialized => LedgerError::NotInitialized,
            AccessError::NotOwner => LedgerError::NotOwner,
            AccessError::NoPendingOwner => LedgerError::NoPendingOwner,
        }
    }
}

impl From<AccessError> for StakingError {
    fn from(err: AccessError) -> Self {
        match err {
            AccessError::NotInitialized => StakingError::NotInitialized,
            AccessError::NotOwner => StakingError::NotOwner,
            AccessError::NoPendingOwner => StakingError::NoPendingOwner,
        }
    }
}
