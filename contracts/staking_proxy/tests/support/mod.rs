#![allow(dead_code, clippy::unwrap_used, clippy::expect_used)]

extern crate std;

use common::layout::INITIALIZER_SELECTOR;
use ledger::{LedgerContract, LedgerContractClient};
use soroban_sdk::{
    testutils::{Address as _, Events, Ledger as _},
    xdr::{ContractEventBody, ScVal},
    Address, BytesN, Env, IntoVal, String, TryFromVal, Val,
};
use staking_proxy::{StakingProxy, StakingProxyClient};
use staking_v1::StakingV1;
use staking_v2::StakingV2;

pub const INITIAL_SUPPLY: u128 = 1000;
pub const REWARD_FUNDS: u128 = 100_000;

/// Implementation the proxy is constructed with.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Code {
    V1,
    V2,
}

pub struct Ctx {
    pub env: Env,
    pub proxy: StakingProxyClient<'static>,
    pub token: LedgerContractClient<'static>,
    pub owner: Address,
    pub v1: Address,
    pub v2: Address,
}

/// Full deployment at block 1:
/// - a ledger with `INITIAL_SUPPLY` minted to the owner
/// - both implementations
/// - a proxy constructed with `code` and pointed at the ledger
/// - `reward_funds` minted straight into the proxy for reward payouts
pub fn setup_with(code: Code, reward_funds: u128) -> Ctx {
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
        &INITIAL_SUPPLY,
    );

    let v1 = env.register(StakingV1, ());
    let v2 = env.register(StakingV2, ());

    let proxy_id = env.register(StakingProxy, ());
    let proxy = StakingProxyClient::new(&env, &proxy_id);
    let installed = match code {
        Code::V1 => &v1,
        Code::V2 => &v2,
    };
    proxy.initialize(&owner, &initializer_selector(&env), installed);
    proxy.set_staking_token(&owner, &token.address);

    if reward_funds > 0 {
        token.mint(&owner, &proxy_id, &reward_funds);
    }

    Ctx {
        env,
        proxy,
        token,
        owner,
        v1,
        v2,
    }
}

pub fn setup(code: Code) -> Ctx {
    setup_with(code, REWARD_FUNDS)
}

pub fn initializer_selector(env: &Env) -> BytesN<4> {
    BytesN::from_array(env, &INITIALIZER_SELECTOR)
}

impl Ctx {
    /// A fresh account holding `amount` tokens, all approved to the proxy.
    pub fn staker(&self, amount: u128) -> Address {
        let staker = Address::generate(&self.env);
        self.token.transfer(&self.owner, &staker, &amount);
        self.token.approve(&staker, &self.proxy.address, &amount);
        staker
    }

    pub fn block(&self) -> u32 {
        self.env.ledger().sequence()
    }

    pub fn advance(&self, blocks: u32) {
        let next = self.env.ledger().sequence() + blocks;
        self.env.ledger().set_sequence_number(next);
    }
}

/// Asserts the topics and data of the most recent event.
pub fn assert_last_event<T, D>(env: &Env, topics: T, data: D)
where
    T: IntoVal<Env, soroban_sdk::Vec<Val>>,
    D: IntoVal<Env, Val>,
{
    let events = env.events().all();
    let event = events.events().last().unwrap();
    let ContractEventBody::V0(body) = &event.body;

    let expected_topics: soroban_sdk::Vec<Val> = topics.into_val(env);
    let mut expected_scvals = std::vec::Vec::new();
    for topic in expected_topics.iter() {
        expected_scvals.push(ScVal::try_from_val(env, &topic).unwrap());
    }
    assert_eq!(body.topics.as_slice(), expected_scvals.as_slice());

    let expected_val: Val = data.into_val(env);
    assert_eq!(body.data, ScVal::try_from_val(env, &expected_val).unwrap());
}
