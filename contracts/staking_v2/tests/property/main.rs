#![allow(clippy::unwrap_used, clippy::expect_used, clippy::arithmetic_side_effects)]
//! Property-based test suite entry point for the dynamic-rate behaviour.
//!
//! ```bash
//! cargo test -p staking_v2 --test property
//! ```
//!
//! To increase the number of generated cases:
//!
//! ```bash
//! PROPTEST_CASES=512 cargo test -p staking_v2 --test property
//! ```

mod emission;
mod rate;
