//! Shared building blocks for the ledger and staking contracts.
//!
//! This crate provides:
//! - [`LedgerError`] and [`StakingError`]: stable error codes for every contract.
//! - [`access`]: single-owner access control with a two-step transfer.
//! - [`pause`]: the active/paused gate used by every mutating entry point.
//! - [`account`]: the null account that stands in for "no address".
//! - [`layout`]: the append-only storage layout shared by every staking
//!   implementation, and the snapshot types passed across the proxy boundary.
//! - [`behavior`] and [`ledger_client`]: cross-contract interfaces.
//!
//! Error codes follow fixed ranges so new variants never collide:
//!
//! | Range   | Purpose                        |
//! |---------|--------------------------------|
//! | 1 – 9   | Lifecycle / initialisation     |
//! | 10 – 19 | Authorisation                  |
//! | 30 – 39 | Validation / input             |
//! | 40 – 49 | Insufficiency                  |
//! | 50 – 59 | Contract state                 |
//! | 60 – 69 | Arithmetic                     |
//! | 70 +    | Proxy dispatch                 |

#![no_std]

pub mod access;
pub mod account;
pub mod behavior;
pub mod errors;
pub mod layout;
pub mod ledger_client;
pub mod pause;

pub use access::AccessError;
pub use behavior::{StakingBehavior, StakingBehaviorClient};
pub use errors::{LedgerError, StakingError};
pub use layout::{PoolState, Settlement, StakerAccount, StakerPosition};
pub use ledger_client::{LedgerClient, LedgerInterface};
