#![allow(clippy::unwrap_used, clippy::expect_used, clippy::arithmetic_side_effects)]
//! Shape of the utilisation curve, at token scale.
//!
//! Invariants tested:
//! - The rate stays positive for any pool below a hundred million tokens
//! - A stake of at least a tenth of the pool strictly lowers the rate
//! - More stake never raises the rate; a higher base rate never lowers it

use proptest::prelude::*;
use staking_v2::rate::{dynamic_rate, PRECISION};

/// One token at 18 decimals.
const TOKEN: u128 = 1_000_000_000_000_000_000;

proptest! {
    #[test]
    fn prop_rate_positive_for_realistic_pools(
        base in 1u128..1_000,
        total in 0u128..(100_000_000 * TOKEN),
    ) {
        prop_assert!(dynamic_rate(base, total).unwrap() > 0);
    }

    /// Adding stake lowers the rate once the stake is not negligible next
    /// to the pool.
    #[test]
    fn prop_rate_strictly_decreasing_in_total(
        base in 1u128..1_000,
        total in 0u128..(1_000_000 * TOKEN),
        bump in 0u128..(1_000 * TOKEN),
    ) {
        let extra = total / 10 + 1 + bump;
        let before = dynamic_rate(base, total).unwrap();
        let after = dynamic_rate(base, total + extra).unwrap();
        prop_assert!(after < before, "rate {} did not fall to {}", before, after);
    }

    #[test]
    fn prop_rate_non_increasing_in_total(
        base in 0u128..1_000,
        total in 0u128..(1_000_000_000 * TOKEN),
        extra in 0u128..(1_000_000 * TOKEN),
    ) {
        prop_assert!(dynamic_rate(base, total + extra).unwrap() <= dynamic_rate(base, total).unwrap());
    }

    /// The rate never exceeds the zero-utilisation ceiling.
    #[test]
    fn prop_rate_bounded_by_base(base in 0u128..1_000, total in 0u128..(u64::MAX as u128 * TOKEN)) {
        prop_assert!(dynamic_rate(base, total).unwrap() <= base * PRECISION);
    }

    #[test]
    fn prop_rate_monotonic_in_base(base in 0u128..1_000, total in 0u128..(1_000_000_000 * TOKEN)) {
        prop_assert!(dynamic_rate(base + 1, total).unwrap() >= dynamic_rate(base, total).unwrap());
    }
}
