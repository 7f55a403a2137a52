//! Property-based tests using `proptest` for pool invariant validation.
//!
//! Covered properties:
//!
//! 1. **Emptiness equivalence** — `reserve_x == 0 ⟺ reserve_y == 0 ⟺
//!    total_shares == 0` after any operation sequence.
//! 2. **Ledger consistency** — `total_shares` always equals the sum of
//!    per-account balances.
//! 3. **No-loss swap** — the reserve product never decreases across a
//!    swap.
//! 4. **First-mint exactness** — the initial mint is the floor root of
//!    the deposit product.
//! 5. **Withdrawal conservation** — removing freshly minted shares
//!    returns at most the amounts deposited.

use proptest::prelude::*;

use super::Pool;
use crate::domain::{AccountId, Amount, Shares, Side};
use crate::math;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn acct(byte: u8) -> AccountId {
    AccountId::from_bytes([byte; 32])
}

/// Seeds a fresh pool with the given deposit from account 1.
fn seeded(x: u128, y: u128) -> Pool {
    let mut pool = Pool::new();
    let Ok(plan) = pool.plan_add_liquidity(&acct(1), Amount::new(x), Amount::new(y)) else {
        panic!("seed deposit must be accepted");
    };
    pool.apply_add_liquidity(&acct(1), &plan);
    pool
}

/// One step of a random operation sequence.
#[derive(Debug, Clone)]
enum Op {
    Add { account: u8, x: u128, y: u128 },
    Remove { account: u8, shares: u128 },
    Swap { side: Side, amount: u128 },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (1u8..4, 1u128..1_000_000, 1u128..1_000_000)
            .prop_map(|(account, x, y)| Op::Add { account, x, y }),
        (1u8..4, 1u128..1_000_000).prop_map(|(account, shares)| Op::Remove {
            account,
            shares
        }),
        (proptest::bool::ANY, 1u128..1_000_000).prop_map(|(x_side, amount)| Op::Swap {
            side: if x_side { Side::X } else { Side::Y },
            amount
        }),
    ]
}

/// Applies one op, ignoring rejections (a rejected op must not mutate).
fn step(pool: &mut Pool, op: &Op) {
    match *op {
        Op::Add { account, x, y } => {
            let who = acct(account);
            if let Ok(plan) = pool.plan_add_liquidity(&who, Amount::new(x), Amount::new(y)) {
                pool.apply_add_liquidity(&who, &plan);
            }
        }
        Op::Remove { account, shares } => {
            let who = acct(account);
            if let Ok(plan) = pool.plan_remove_liquidity(&who, Shares::new(shares)) {
                pool.apply_remove_liquidity(&who, &plan);
            }
        }
        Op::Swap { side, amount } => {
            if let Ok(plan) = pool.plan_swap(side, Amount::new(amount)) {
                pool.apply_swap(&plan);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    /// Invariants hold after every step of any operation sequence.
    #[test]
    fn invariants_hold_across_sequences(ops in proptest::collection::vec(op_strategy(), 1..40)) {
        let mut pool = Pool::new();
        for op in &ops {
            step(&mut pool, op);
            prop_assert!(pool.invariants_hold());
        }
    }

    /// A rejected plan leaves the pool untouched.
    #[test]
    fn rejections_do_not_mutate(
        x in 1u128..1_000_000,
        y in 1u128..1_000_000,
        amount in 1u128..1_000_000,
    ) {
        let pool = seeded(x, y);
        let snapshot = pool.clone();
        // Exercising all plan paths, including ones that reject.
        let _ = pool.plan_add_liquidity(&acct(2), Amount::new(amount), Amount::new(1));
        let _ = pool.plan_remove_liquidity(&acct(2), Shares::new(amount));
        let _ = pool.plan_swap(Side::X, Amount::new(amount));
        prop_assert_eq!(pool, snapshot);
    }

    /// The reserve product never decreases across an accepted swap.
    #[test]
    fn swap_product_never_decreases(
        x in 2u128..10_000_000_000,
        y in 2u128..10_000_000_000,
        amount in 1u128..1_000_000_000,
        x_side in proptest::bool::ANY,
    ) {
        let mut pool = seeded(x, y);
        let before = math::full_mul(pool.reserve_x().get(), pool.reserve_y().get());
        let side = if x_side { Side::X } else { Side::Y };
        if let Ok(plan) = pool.plan_swap(side, Amount::new(amount)) {
            pool.apply_swap(&plan);
            let after = math::full_mul(pool.reserve_x().get(), pool.reserve_y().get());
            prop_assert!(after >= before);
        }
    }

    /// First mint equals the floor root of the deposit product.
    #[test]
    fn first_mint_is_floor_root(x in 1u128..u64::MAX as u128, y in 1u128..u64::MAX as u128) {
        let pool = Pool::new();
        if let Ok(plan) = pool.plan_add_liquidity(&acct(1), Amount::new(x), Amount::new(y)) {
            let root = plan.minted.get();
            prop_assert!(root * root <= x * y);
            prop_assert!((root + 1) * (root + 1) > x * y);
        }
    }

    /// Removing freshly minted shares returns at most the deposit, and
    /// restores the prior total.
    #[test]
    fn add_remove_round_trip_conserves(
        seed_x in 100u128..1_000_000,
        seed_y in 100u128..1_000_000,
        dx in 1u128..1_000_000,
    ) {
        let mut pool = seeded(seed_x, seed_y);
        // Supply exactly the required Y for the chosen X.
        let required_y = math::mul_div(dx, pool.reserve_y().get(), pool.reserve_x().get())
            .unwrap_or(0)
            .max(1);
        let total_before = pool.total_shares();

        if let Ok(add) = pool.plan_add_liquidity(&acct(2), Amount::new(dx), Amount::new(required_y)) {
            pool.apply_add_liquidity(&acct(2), &add);
            if let Ok(remove) = pool.plan_remove_liquidity(&acct(2), add.minted) {
                prop_assert!(remove.amount_x.get() <= dx);
                prop_assert!(remove.amount_y.get() <= required_y);
                pool.apply_remove_liquidity(&acct(2), &remove);
                prop_assert_eq!(pool.total_shares(), total_before);
                prop_assert!(pool.invariants_hold());
            }
        }
    }
}
