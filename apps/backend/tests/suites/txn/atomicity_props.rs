//! Property tests for all-or-nothing execution.
//!
//! Properties tested:
//! - Aborting after any number of successful deductions restores the baseline
//! - A run of deductions commits iff the summed cost is affordable, and then
//!   subtracts exactly that sum

include!("../../common/proptest_prelude.rs");

use mars_backend::domain::{ActionAllowance, Resources};
use mars_backend::{DomainError, TxnContext};
use proptest::prelude::*;

use crate::support::generators::{bundle, costs};
use crate::support::world::WorldBuilder;

fn total(costs: &[Resources]) -> Resources {
    costs.iter().fold(Resources::ZERO, |acc, c| {
        acc.checked_add(c).expect("small bundles never overflow")
    })
}

proptest! {
    #![proptest_config(proptest_prelude_config())]

    /// Property: a forced abort leaves the player exactly as before
    #[test]
    fn prop_forced_abort_restores_baseline(
        start in bundle(60),
        steps in costs(15, 0..6),
        actions in 0u32..4,
    ) {
        let world = WorldBuilder::new()
            .player(start, ActionAllowance::Remaining(actions))
            .build();
        let (g, p) = world.ids();
        let before = world.player();

        let result = world.manager.execute_atomic(
            &TxnContext::background(),
            |txn| -> Result<(), DomainError> {
                for cost in &steps {
                    txn.deduct_resources(g, p, *cost)?;
                    txn.consume_action(g, p)?;
                }
                Err(DomainError::other("forced"))
            },
        );

        let err = result.unwrap_err();
        prop_assert!(err.is_clean_rollback());
        prop_assert_eq!(world.player(), before);
    }

    /// Property: commit subtracts the sum, or nothing changes
    #[test]
    fn prop_commit_subtracts_sum_or_nothing(
        start in bundle(60),
        steps in costs(20, 1..6),
    ) {
        let world = WorldBuilder::new()
            .player(start, ActionAllowance::Remaining(1))
            .build();
        let (g, p) = world.ids();
        let sum = total(&steps);

        let result = world.manager.execute_atomic(&TxnContext::background(), |txn| {
            steps.iter().try_for_each(|cost| txn.process_purchase(g, p, *cost))
        });

        match start.try_deduct(&sum) {
            Ok(expected) => {
                prop_assert!(result.is_ok());
                prop_assert_eq!(world.player().resources, expected);
            }
            Err(_) => {
                prop_assert!(result.is_err());
                prop_assert_eq!(world.player().resources, start);
            }
        }
        prop_assert_eq!(world.player().available_actions, ActionAllowance::Remaining(1));
    }
}
