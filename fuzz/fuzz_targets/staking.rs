#![no_main]

use arbitrary::Arbitrary;
use common::layout::INITIALIZER_SELECTOR;
use ledger::{LedgerContract, LedgerContractClient};
use libfuzzer_sys::fuzz_target;
use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    Address, BytesN, Env, String,
};
use staking_proxy::{StakingProxy, StakingProxyClient};
use staking_v1::StakingV1;
use staking_v2::StakingV2;

const SUPPLY: u128 = 1_000_000;

#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    Stake { amount: u16 },
    Withdraw { amount: u16 },
    WithdrawReward { amount: u16 },
    ChangeRewardRate { rate: u8 },
    SetAllocatedReward { amount: u32 },
    Upgrade { to_v2: bool },
    Advance { blocks: u8 },
}

fuzz_target!(|actions: Vec<FuzzAction>| {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_sequence_number(1);

    let owner = Address::generate(&env);
    let token = LedgerContractClient::new(&env, &env.register(LedgerContract, ()));
    token.initialize(
        &owner,
        &String::from_str(&env, "Stake Token"),
        &String::from_str(&env, "STK"),
        &18,
        &SUPPLY,
    );

    let v1 = env.register(StakingV1, ());
    let v2 = env.register(StakingV2, ());
    let proxy = StakingProxyClient::new(&env, &env.register(StakingProxy, ()));
    proxy.initialize(&owner, &BytesN::from_array(&env, &INITIALIZER_SELECTOR), &v1);
    proxy.set_staking_token(&owner, &token.address);

    let mut users = Vec::new();
    for _ in 0..4 {
        let user = Address::generate(&env);
        token.transfer(&owner, &user, &(SUPPLY / 8));
        token.approve(&user, &proxy.address, &(SUPPLY / 8));
        users.push(user);
    }
    // Everything the users did not get backs reward payouts.
    token.transfer(&owner, &proxy.address, &(SUPPLY / 2));

    // Failures are expected; the point is that none of them traps and the
    // books still balance afterwards.
    for (i, action) in actions.into_iter().enumerate() {
        let caller = &users[i % users.len()];
        match action {
            FuzzAction::Stake { amount } => {
                let _ = proxy.try_stake(caller, &(amount as u128));
            }
            FuzzAction::Withdraw { amount } => {
                let _ = proxy.try_withdraw(caller, &(amount as u128));
            }
            FuzzAction::WithdrawReward { amount } => {
                let _ = proxy.try_withdraw_reward(caller, &(amount as u128));
            }
            FuzzAction::ChangeRewardRate { rate } => {
                let _ = proxy.try_change_reward_rate(&owner, &(rate as u128));
            }
            FuzzAction::SetAllocatedReward { amount } => {
                let _ = proxy.try_set_allocated_reward(&owner, &(amount as u128));
            }
            FuzzAction::Upgrade { to_v2 } => {
                let code = if to_v2 { &v2 } else { &v1 };
                let _ = proxy.try_update_code(&owner, code);
            }
            FuzzAction::Advance { blocks } => {
                let next = env.ledger().sequence() + blocks as u32;
                env.ledger().set_sequence_number(next);
            }
        }

        let principals: u128 = users.iter().map(|u| proxy.balances(u).principal).sum();
        assert_eq!(proxy.total_staked(), principals);

        let held: u128 = users.iter().map(|u| token.balance(u)).sum::<u128>()
            + token.balance(&proxy.address)
            + token.balance(&owner);
        assert_eq!(held, token.total_supply());
    }
});
