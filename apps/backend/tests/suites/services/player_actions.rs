use std::sync::Arc;
use std::thread;

use mars_backend::domain::{
    ActionAllowance, GamePhase, ResourceKind, Resources, StandardProject, CARD_PURCHASE_COST,
};
use mars_backend::{ErrorCode, PlayerActionService, TxnContext};

use crate::support::world::WorldBuilder;

fn rich() -> Resources {
    Resources {
        credits: 100,
        steel: 5,
        titanium: 5,
        plants: 10,
        energy: 5,
        heat: 10,
    }
}

#[test]
fn test_each_standard_project_charges_its_cost() {
    let expected = [
        (StandardProject::PowerPlant, ResourceKind::Credits, 11),
        (StandardProject::Asteroid, ResourceKind::Credits, 14),
        (StandardProject::Aquifer, ResourceKind::Credits, 18),
        (StandardProject::Greenery, ResourceKind::Credits, 23),
        (StandardProject::City, ResourceKind::Credits, 25),
        (StandardProject::ConvertPlantsToGreenery, ResourceKind::Plants, 8),
        (StandardProject::ConvertHeatToTemperature, ResourceKind::Heat, 8),
    ];
    assert_eq!(expected.len(), StandardProject::ALL.len());

    for (project, kind, amount) in expected {
        let world = WorldBuilder::new()
            .player(rich(), ActionAllowance::Remaining(2))
            .build();
        let svc = PlayerActionService::new(Arc::clone(&world.manager));
        let (g, p) = world.ids();

        let player = svc
            .standard_project(&TxnContext::background(), g, p, project)
            .unwrap();

        assert_eq!(
            player.resources,
            rich().with(kind, rich().get(kind) - amount),
            "{project:?}"
        );
        assert_eq!(player.available_actions, ActionAllowance::Remaining(1));
        assert_eq!(world.player(), player);
    }
}

#[test]
fn test_project_outside_action_phase_is_rejected() {
    let world = WorldBuilder::new()
        .phase(GamePhase::Production)
        .player(rich(), ActionAllowance::Remaining(2))
        .build();
    let svc = PlayerActionService::new(Arc::clone(&world.manager));
    let (g, p) = world.ids();

    let err = svc
        .standard_project(&TxnContext::background(), g, p, StandardProject::City)
        .unwrap_err();

    assert_eq!(err.code(), ErrorCode::PhaseMismatch);
    assert_eq!(err.to_string(), "actions not allowed in phase production");
    assert_eq!(world.player().resources, rich());
}

#[test]
fn test_cards_can_be_bought_after_actions_run_out() {
    let world = WorldBuilder::new()
        .player(Resources::credits(40), ActionAllowance::Remaining(1))
        .build();
    let svc = PlayerActionService::new(Arc::clone(&world.manager));
    let (g, p) = world.ids();
    let ctx = TxnContext::background();

    svc.standard_project(&ctx, g, p, StandardProject::Aquifer).unwrap();
    let err = svc
        .standard_project(&ctx, g, p, StandardProject::PowerPlant)
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::NoActionsRemaining);

    let player = svc.buy_cards(&ctx, g, p, 4).unwrap();
    assert_eq!(player.resources, Resources::credits(22 - 4 * CARD_PURCHASE_COST));
    assert_eq!(player.available_actions, ActionAllowance::Remaining(0));
}

#[test]
fn test_buying_zero_cards_is_a_no_op() {
    let world = WorldBuilder::new()
        .player(Resources::credits(2), ActionAllowance::Remaining(1))
        .build();
    let svc = PlayerActionService::new(Arc::clone(&world.manager));
    let (g, p) = world.ids();

    let player = svc.buy_cards(&TxnContext::background(), g, p, 0).unwrap();
    assert_eq!(player.resources, Resources::credits(2));
}

#[test]
fn test_store_failure_leaves_player_untouched() {
    let (world, store) = WorldBuilder::new()
        .player(Resources::credits(30), ActionAllowance::Remaining(2))
        .build_flaky();
    let svc = PlayerActionService::new(Arc::clone(&world.manager));
    let (g, p) = world.ids();

    store.fail_once_after(1);
    let err = svc
        .standard_project(&TxnContext::background(), g, p, StandardProject::Asteroid)
        .unwrap_err();

    assert_eq!(err.code(), ErrorCode::StoreFailure);
    assert!(err.is_clean_rollback());
    let player = world.player();
    assert_eq!(player.resources, Resources::credits(30));
    assert_eq!(player.available_actions, ActionAllowance::Remaining(2));
}

#[test]
fn test_concurrent_card_buyers_share_one_balance() {
    let world = WorldBuilder::new()
        .player(Resources::credits(30), ActionAllowance::Remaining(1))
        .build();
    let svc = PlayerActionService::new(Arc::clone(&world.manager));
    let (g, p) = world.ids();

    let bought = thread::scope(|s| {
        let workers: Vec<_> = (0..6)
            .map(|_| {
                let svc = svc.clone();
                s.spawn(move || svc.buy_cards(&TxnContext::background(), g, p, 2).is_ok())
            })
            .collect();
        workers
            .into_iter()
            .map(|w| w.join().expect("worker panicked"))
            .filter(|ok| *ok)
            .count()
    });

    assert_eq!(bought, 5);
    assert_eq!(world.player().resources, Resources::ZERO);
}
