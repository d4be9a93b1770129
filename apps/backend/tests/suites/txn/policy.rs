//! `RollbackOnOk` dry runs.

use mars_backend::domain::{ActionAllowance, Resources};
use mars_backend::{ErrorCode, TxnContext, TxnPolicy};

use crate::support::recording_op::{journal, RecordingOp};
use crate::support::world::WorldBuilder;

#[test]
fn test_dry_run_reports_outcome_without_keeping_it() {
    let world = WorldBuilder::new()
        .player(Resources::credits(50), ActionAllowance::Remaining(2))
        .policy(TxnPolicy::RollbackOnOk)
        .build();
    let (g, p) = world.ids();

    let after = world
        .manager
        .execute_atomic(&TxnContext::background(), |txn| {
            txn.process_turn_action(g, p, Resources::credits(25))?;
            txn.load_player(g, p)
        })
        .unwrap();

    assert_eq!(after.resources, Resources::credits(25));
    assert_eq!(after.available_actions, ActionAllowance::Remaining(1));

    let now = world.player();
    assert_eq!(now.resources, Resources::credits(50));
    assert_eq!(now.available_actions, ActionAllowance::Remaining(2));
}

#[test]
fn test_dry_run_still_reports_failures() {
    let world = WorldBuilder::new()
        .player(Resources::credits(5), ActionAllowance::Remaining(2))
        .policy(TxnPolicy::RollbackOnOk)
        .build();
    let (g, p) = world.ids();

    let err = world
        .manager
        .execute_atomic(&TxnContext::background(), |txn| {
            txn.process_turn_action(g, p, Resources::credits(25))
        })
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::InsufficientResources);
}

#[test]
fn test_dry_run_undo_failure_has_no_cause() {
    let world = WorldBuilder::new().policy(TxnPolicy::RollbackOnOk).build();
    let log = journal();

    let err = world
        .manager
        .execute_atomic(&TxnContext::background(), |txn| {
            txn.apply(RecordingOp::new("x", &log).failing_undo())
        })
        .unwrap_err();

    assert_eq!(err.code(), ErrorCode::RollbackFailed);
    assert!(err.root_cause().is_none());
    assert!(err.to_string().contains("dry-run rollback"), "{err}");
}

#[test]
fn test_commit_is_the_default() {
    let world = WorldBuilder::new()
        .player(Resources::credits(50), ActionAllowance::Remaining(2))
        .build();
    assert_eq!(world.manager.config().policy, TxnPolicy::CommitOnOk);
}
