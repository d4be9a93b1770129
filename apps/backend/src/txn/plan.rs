//! Declarative transaction bodies.

use serde::{Deserialize, Serialize};

use super::transaction::Transaction;
use crate::domain::resources::Resources;
use crate::domain::state::{GameId, PlayerId};
use crate::errors::domain::DomainError;

/// One step of a [`TxnPlan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "step", content = "cost", rename_all = "snake_case")]
pub enum PlanStep {
    ValidateTurn,
    ValidateResources(Resources),
    Deduct(Resources),
    ConsumeAction,
}

/// Ordered steps for one player, run atomically by
/// [`TxnManager::run_plan`](super::TxnManager::run_plan).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxnPlan {
    pub game_id: GameId,
    pub player_id: PlayerId,
    pub steps: Vec<PlanStep>,
}

impl TxnPlan {
    pub fn new(game_id: GameId, player_id: PlayerId) -> Self {
        Self {
            game_id,
            player_id,
            steps: Vec::new(),
        }
    }

    /// Same steps as `Transaction::process_turn_action`.
    pub fn turn_action(game_id: GameId, player_id: PlayerId, cost: Resources) -> Self {
        let plan = Self::new(game_id, player_id).validate_turn();
        let plan = if cost.is_zero() { plan } else { plan.deduct(cost) };
        plan.consume_action()
    }

    /// Same steps as `Transaction::process_purchase`.
    pub fn purchase(game_id: GameId, player_id: PlayerId, cost: Resources) -> Self {
        Self::new(game_id, player_id).deduct(cost)
    }

    pub fn validate_turn(self) -> Self {
        self.step(PlanStep::ValidateTurn)
    }

    pub fn validate_resources(self, cost: Resources) -> Self {
        self.step(PlanStep::ValidateResources(cost))
    }

    pub fn deduct(self, cost: Resources) -> Self {
        self.step(PlanStep::Deduct(cost))
    }

    pub fn consume_action(self) -> Self {
        self.step(PlanStep::ConsumeAction)
    }

    pub fn step(mut self, step: PlanStep) -> Self {
        self.steps.push(step);
        self
    }

    /// Apply the steps in order, stopping at the first failure.
    pub fn run(&self, txn: &mut Transaction<'_>) -> Result<(), DomainError> {
        let (g, p) = (&self.game_id, &self.player_id);
        for step in &self.steps {
            match *step {
                PlanStep::ValidateTurn => txn.validate_turn(g, p)?,
                PlanStep::ValidateResources(cost) => txn.validate_resources(g, p, cost)?,
                PlanStep::Deduct(cost) => txn.deduct_resources(g, p, cost)?,
                PlanStep::ConsumeAction => txn.consume_action(g, p)?,
            }
        }
        Ok(())
    }
}
