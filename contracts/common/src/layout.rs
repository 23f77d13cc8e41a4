//! Storage layout of the staking proxy.
//!
//! The proxy owns one storage area that outlives every implementation it
//! installs. Each value lives under its own key, so a later version can only
//! add keys; it never reorders, retypes or reuses an existing one.
//!
//! | #  | Key                  | Type            | Since |
//! |----|----------------------|-----------------|-------|
//! | 0  | `OWNER`              | `Address`       | v1    |
//! | 1  | `PEND_OWN`           | `Address`       | v1    |
//! | 2  | `STK_TOK`            | `Address`       | v1    |
//! | 3  | `PAUSED`             | `bool`          | v1    |
//! | 4  | `(STAKER, addr)`     | `StakerAccount` | v1    |
//! | 5  | `TOT_STK`            | `u128`          | v1    |
//! | 6  | `RWD_RATE`           | `u128`          | v1    |
//! | 7  | `INIT`               | `bool`          | v1    |
//! | 8  | `CODE`               | `Address`       | v1    |
//! | 9  | `CODE_AT`            | `u32`           | v1    |
//! | 10 | `ALLOC`              | `u128`          | v2    |
//! | 11 | `DISTR`              | `u128`          | v2    |
//! | 12 | `RPU`                | `u128`          | v2    |
//! | 13 | `RPU_AT`             | `u32`           | v2    |
//! | 14 | `RPU_BASE`           | `u128`          | v2    |
//! | 15 | `DYN_RATE`           | `u128`          | v2    |
//! | 16 | `(RPU_PAID, addr)`   | `u128`          | v2    |
//! | 17 | `CODE_VER`           | `u32`           | v2    |
//!
//! Slots 0, 1 and 3 are the keys of [`crate::access`] and [`crate::pause`].
//! Per-staker slots live in persistent storage, everything else in instance
//! storage. An absent v2 slot reads as its default, which is how a v2
//! implementation reads storage written only by v1.

use soroban_sdk::{contracttype, symbol_short, Address, Symbol};

// ── v1 slots ─────────────────────────────────────────────────────────────────

pub const STAKING_TOKEN: Symbol = symbol_short!("STK_TOK");
pub const STAKER: Symbol = symbol_short!("STAKER");
pub const TOTAL_STAKED: Symbol = symbol_short!("TOT_STK");
pub const REWARD_RATE: Symbol = symbol_short!("RWD_RATE");
pub const INITIALIZED: Symbol = symbol_short!("INIT");
pub const CODE: Symbol = symbol_short!("CODE");
pub const CODE_AT: Symbol = symbol_short!("CODE_AT");

// ── v2 slots (appended) ──────────────────────────────────────────────────────

pub const ALLOCATED_REWARD: Symbol = symbol_short!("ALLOC");
pub const DISTRIBUTED_REWARD: Symbol = symbol_short!("DISTR");
pub const REWARD_PER_UNIT: Symbol = symbol_short!("RPU");
pub const REWARD_PER_UNIT_AT: Symbol = symbol_short!("RPU_AT");
pub const REWARD_PER_UNIT_BASE: Symbol = symbol_short!("RPU_BASE");
pub const DYNAMIC_RATE: Symbol = symbol_short!("DYN_RATE");
pub const REWARD_PER_UNIT_PAID: Symbol = symbol_short!("RPU_PAID");
/// Layout version of the installed implementation. Written by the proxy.
pub const CODE_VERSION: Symbol = symbol_short!("CODE_VER");

// ── Defaults ─────────────────────────────────────────────────────────────────

/// Reward per staked unit per block written by the initializer.
pub const DEFAULT_REWARD_RATE: u128 = 1;

/// Allocation cap assumed while the `ALLOC` slot has never been written.
pub const DEFAULT_ALLOCATED_REWARD: u128 = 50_000;

/// First four bytes of `keccak256("initializer()")`, the only construction
/// selector the proxy accepts.
pub const INITIALIZER_SELECTOR: [u8; 4] = [0x9c, 0xe1, 0x10, 0xd7];

// ── TTL ──────────────────────────────────────────────────────────────────────

pub const PERSISTENT_TTL_THRESHOLD: u32 = 100_000;
pub const PERSISTENT_TTL_EXTEND_TO: u32 = 500_000;

pub fn staker_key(staker: &Address) -> (Symbol, Address) {
    (STAKER, staker.clone())
}

pub fn reward_paid_key(staker: &Address) -> (Symbol, Address) {
    (REWARD_PER_UNIT_PAID, staker.clone())
}

// ── Snapshot types ───────────────────────────────────────────────────────────

/// Per-staker record (slot 4).
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct StakerAccount {
    /// Amount staked and withdrawable.
    pub principal: u128,
    /// Reward earned and not yet claimed.
    pub accrued_reward: u128,
    /// Block at which `accrued_reward` was last brought up to date.
    pub checkpoint: u32,
}

/// A staker's record together with their appended v2 slot.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct StakerPosition {
    pub account: StakerAccount,
    /// Accumulator value at the staker's last v2 settlement (slot 16).
    pub reward_per_unit_paid: u128,
}

/// Global slots an implementation may read and rewrite.
///
/// Owner, pause flag, staking token, code pointer and the initialised flag
/// stay with the proxy and are never handed to an implementation.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PoolState {
    // v1
    pub total_staked: u128,
    /// Reward per staked unit per block. Flat in v1; the zero-utilisation
    /// ceiling in v2.
    pub reward_rate: u128,
    /// Block at which the current layout version was installed. Reinstalling
    /// the same version keeps it. Maintained by the proxy; implementations
    /// treat it as read-only.
    pub code_since: u32,
    // v2
    pub allocated_reward: u128,
    pub distributed_reward: u128,
    pub reward_per_unit: u128,
    pub reward_per_unit_at: u32,
    pub reward_per_unit_base: u128,
    pub dynamic_rate: u128,
}

/// Outcome of a staker operation, committed by the proxy before it moves any
/// tokens.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Settlement {
    pub pool: PoolState,
    pub position: StakerPosition,
    /// Amount of staking token the proxy must send to the staker.
    pub payout: u128,
}
