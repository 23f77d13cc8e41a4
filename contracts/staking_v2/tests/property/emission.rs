#![allow(clippy::unwrap_used, clippy::expect_used, clippy::arithmetic_side_effects)]
//! Emission accounting under arbitrary staker activity.
//!
//! Invariants tested:
//! - `distributed_reward` never exceeds `allocated_reward`
//! - Reward credited to stakers (still accrued plus already claimed) never
//!   exceeds `distributed_reward`
//! - `total_staked` always equals the sum of principals
//!
//! Amounts are drawn both in base units and in whole 18-decimal tokens.

use common::{PoolState, StakerPosition};
use proptest::prelude::*;
use soroban_sdk::Env;
use staking_v2::{StakingV2, StakingV2Client};

const STAKERS: usize = 3;
const TOKEN: u128 = 1_000_000_000_000_000_000;

#[derive(Clone, Debug)]
enum Op {
    Stake(usize, u128),
    Withdraw(usize, u128),
    Claim(usize, u128),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..STAKERS, 1u128..500).prop_map(|(who, amount)| Op::Stake(who, amount)),
        (0..STAKERS, 1u128..500).prop_map(|(who, amount)| Op::Withdraw(who, amount)),
        (0..STAKERS, 1u128..200).prop_map(|(who, amount)| Op::Claim(who, amount)),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_emission_within_allocation(
        allocated in 0u128..5_000,
        base_rate in 1u128..5,
        scale in prop::sample::select(vec![1u128, TOKEN]),
        steps in prop::collection::vec((op_strategy(), 0u32..20), 1..40),
    ) {
        let env = Env::default();
        let client = StakingV2Client::new(&env, &env.register(StakingV2, ()));

        let mut pool = client.install(
            &PoolState {
                reward_rate: base_rate,
                allocated_reward: allocated * scale,
                ..PoolState::default()
            },
            &0,
            &0,
        );
        let mut positions: std::vec::Vec<StakerPosition> =
            (0..STAKERS).map(|_| StakerPosition::default()).collect();
        let mut claimed: u128 = 0;
        let mut now: u32 = 0;

        for (op, gap) in steps {
            now += gap;
            let (who, result) = match op {
                Op::Stake(who, amount) => {
                    (who, client.try_stake(&pool, &positions[who], &(amount * scale), &now))
                }
                Op::Withdraw(who, amount) => {
                    (who, client.try_withdraw(&pool, &positions[who], &(amount * scale), &now))
                }
                Op::Claim(who, amount) => {
                    (who, client.try_withdraw_reward(&pool, &positions[who], &amount, &now))
                }
            };

            if let Ok(Ok(settlement)) = result {
                if matches!(op, Op::Claim(..)) {
                    claimed += settlement.payout;
                }
                pool = settlement.pool;
                positions[who] = settlement.position;
            }

            prop_assert!(pool.distributed_reward <= pool.allocated_reward);

            let credited: u128 = positions
                .iter()
                .map(|p| p.account.accrued_reward)
                .sum::<u128>()
                + claimed;
            prop_assert!(
                credited <= pool.distributed_reward,
                "credited {} exceeds distributed {}",
                credited,
                pool.distributed_reward
            );

            let principals: u128 = positions.iter().map(|p| p.account.principal).sum();
            prop_assert_eq!(principals, pool.total_staked);
        }
    }
}
