//! Declarative plans run through `TxnManager::run_plan`.

use mars_backend::domain::{ActionAllowance, Resources};
use mars_backend::txn::PlanStep;
use mars_backend::{ErrorCode, TxnContext, TxnPlan};

use crate::support::world::WorldBuilder;

#[test]
fn test_turn_action_plan_matches_helper() {
    let world = WorldBuilder::new()
        .player(Resources::credits(50), ActionAllowance::Remaining(2))
        .build();
    let plan = TxnPlan::turn_action(
        world.game_id.clone(),
        world.player_id.clone(),
        Resources::credits(23),
    );

    world.manager.run_plan(&TxnContext::background(), &plan).unwrap();

    let player = world.player();
    assert_eq!(player.resources, Resources::credits(27));
    assert_eq!(player.available_actions, ActionAllowance::Remaining(1));
}

#[test]
fn test_failing_step_unwinds_whole_plan() {
    let world = WorldBuilder::new()
        .player(Resources::credits(10), ActionAllowance::Remaining(1))
        .build();
    let plan = TxnPlan::new(world.game_id.clone(), world.player_id.clone())
        .deduct(Resources::credits(5))
        .consume_action()
        .validate_resources(Resources::credits(6));

    let err = world
        .manager
        .run_plan(&TxnContext::background(), &plan)
        .unwrap_err();

    assert_eq!(err.code(), ErrorCode::InsufficientResources);
    assert_eq!(err.to_string(), "insufficient credits: need 6, have 5");
    let player = world.player();
    assert_eq!(player.resources, Resources::credits(10));
    assert_eq!(player.available_actions, ActionAllowance::Remaining(1));
}

#[test]
fn test_plan_from_json() {
    let world = WorldBuilder::new()
        .player(Resources::credits(10), ActionAllowance::Remaining(1))
        .build();
    let plan: TxnPlan = serde_json::from_value(serde_json::json!({
        "game_id": "game-1",
        "player_id": "player-1",
        "steps": [
            { "step": "validate_turn" },
            {
                "step": "deduct",
                "cost": {
                    "credits": 3, "steel": 0, "titanium": 0,
                    "plants": 0, "energy": 0, "heat": 0
                }
            }
        ]
    }))
    .unwrap();
    assert_eq!(plan.steps[0], PlanStep::ValidateTurn);

    world.manager.run_plan(&TxnContext::background(), &plan).unwrap();
    assert_eq!(world.player().resources, Resources::credits(7));
    assert_eq!(world.player().available_actions, ActionAllowance::Remaining(1));
}
