#![allow(clippy::unwrap_used, clippy::expect_used, clippy::arithmetic_side_effects)]
//! Supply and allowance invariants of the token ledger.
//!
//! Invariants tested:
//! - Total supply always equals the sum of every balance, whatever sequence
//!   of (possibly failing) operations ran
//! - `transfer_from` lowers the allowance by exactly the amount moved
//! - Minting then burning the same amount restores supply and balance

use common::LedgerError;
use ledger::{LedgerContract, LedgerContractClient};
use proptest::prelude::*;
use proptest_derive::Arbitrary;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env, String};

const INITIAL_SUPPLY: u128 = 1000;
const ACTORS: usize = 3;

// ── Helpers ───────────────────────────────────────────────────────────────────

struct Ctx {
    client: LedgerContractClient<'static>,
    owner: Address,
    actors: std::vec::Vec<Address>,
}

fn setup() -> Ctx {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(LedgerContract, ());
    let client = LedgerContractClient::new(&env, &contract_id);

    let owner = Address::generate(&env);
    client.initialize(
        &owner,
        &String::from_str(&env, "Stake Token"),
        &String::from_str(&env, "STK"),
        &18,
        &INITIAL_SUPPLY,
    );

    let actors = (0..ACTORS).map(|_| Address::generate(&env)).collect();

    Ctx {
        client,
        owner,
        actors,
    }
}

impl Ctx {
    /// Index 0 is the owner, 1..=ACTORS the generated actors.
    fn who(&self, index: usize) -> Address {
        if index == 0 {
            self.owner.clone()
        } else {
            self.actors[(index - 1) % ACTORS].clone()
        }
    }

    fn sum_of_balances(&self) -> u128 {
        (0..=ACTORS).map(|i| self.client.balance(&self.who(i))).sum()
    }
}

#[derive(Arbitrary, Clone, Debug)]
enum Op {
    Mint {
        #[proptest(strategy = "0usize..=ACTORS")]
        to: usize,
        #[proptest(strategy = "0u128..500")]
        amount: u128,
    },
    Burn {
        #[proptest(strategy = "0u128..1500")]
        amount: u128,
    },
    Transfer {
        #[proptest(strategy = "0usize..=ACTORS")]
        from: usize,
        #[proptest(strategy = "0usize..=ACTORS")]
        to: usize,
        #[proptest(strategy = "0u128..800")]
        amount: u128,
    },
    Approve {
        #[proptest(strategy = "0usize..=ACTORS")]
        owner: usize,
        #[proptest(strategy = "0usize..=ACTORS")]
        spender: usize,
        #[proptest(strategy = "0u128..800")]
        amount: u128,
    },
    TransferFrom {
        #[proptest(strategy = "0usize..=ACTORS")]
        spender: usize,
        #[proptest(strategy = "0usize..=ACTORS")]
        from: usize,
        #[proptest(strategy = "0usize..=ACTORS")]
        to: usize,
        #[proptest(strategy = "0u128..800")]
        amount: u128,
    },
}

fn apply(ctx: &Ctx, op: &Op) {
    // Failures are expected for many generated ops; they must leave no trace.
    match *op {
        Op::Mint { to, amount } => {
            let _ = ctx.client.try_mint(&ctx.owner, &ctx.who(to), &amount);
        }
        Op::Burn { amount } => {
            let _ = ctx.client.try_burn(&ctx.owner, &ctx.owner, &amount);
        }
        Op::Transfer { from, to, amount } => {
            let _ = ctx.client.try_transfer(&ctx.who(from), &ctx.who(to), &amount);
        }
        Op::Approve {
            owner,
            spender,
            amount,
        } => {
            let _ = ctx
                .client
                .try_approve(&ctx.who(owner), &ctx.who(spender), &amount);
        }
        Op::TransferFrom {
            spender,
            from,
            to,
            amount,
        } => {
            let _ = ctx.client.try_transfer_from(
                &ctx.who(spender),
                &ctx.who(from),
                &ctx.who(to),
                &amount,
            );
        }
    }
}

// ── proptest! blocks ──────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Supply equals the sum of balances after any operation sequence.
    #[test]
    fn prop_supply_matches_sum_of_balances(ops in prop::collection::vec(any::<Op>(), 1..24)) {
        let ctx = setup();

        for op in &ops {
            apply(&ctx, op);
            prop_assert_eq!(ctx.client.total_supply(), ctx.sum_of_balances());
        }
    }

    /// A successful `transfer_from` lowers the allowance by exactly `amount`;
    /// a rejected one leaves it untouched.
    #[test]
    fn prop_transfer_from_decrements_allowance_exactly(
        approved in 0u128..1000,
        amount in 0u128..1200,
    ) {
        let ctx = setup();
        let spender = ctx.who(1);
        let recipient = ctx.who(2);

        ctx.client.approve(&ctx.owner, &spender, &approved);
        let result = ctx.client.try_transfer_from(&spender, &ctx.owner, &recipient, &amount);

        if amount <= approved {
            prop_assert!(result.is_ok());
            prop_assert_eq!(ctx.client.allowance(&ctx.owner, &spender), approved - amount);
            prop_assert_eq!(ctx.client.balance(&recipient), amount);
        } else {
            match result {
                Err(Ok(e)) => prop_assert_eq!(e, LedgerError::InsufficientAllowance),
                _ => prop_assert!(false, "Expected InsufficientAllowance error"),
            }
            prop_assert_eq!(ctx.client.allowance(&ctx.owner, &spender), approved);
            prop_assert_eq!(ctx.client.balance(&recipient), 0);
        }
    }

    /// Mint followed by burn of the same amount is a no-op on supply and on
    /// the owner's balance.
    #[test]
    fn prop_mint_then_burn_restores_state(amount in 0u128..1_000_000) {
        let ctx = setup();

        ctx.client.mint(&ctx.owner, &ctx.owner, &amount);
        prop_assert_eq!(ctx.client.total_supply(), INITIAL_SUPPLY + amount);

        ctx.client.burn(&ctx.owner, &ctx.owner, &amount);
        prop_assert_eq!(ctx.client.total_supply(), INITIAL_SUPPLY);
        prop_assert_eq!(ctx.client.balance(&ctx.owner), INITIAL_SUPPLY);
    }
}
