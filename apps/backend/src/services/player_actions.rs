use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::projects::{card_purchase_cost, StandardProject};
use crate::domain::state::{GameId, PlayerId, PlayerRecord};
use crate::error::TxnError;
use crate::errors::domain::DomainError;
use crate::txn::{TxnContext, TxnManager};

/// Turn actions and purchases a player can make during the action phase.
///
/// Each call is one atomic transaction; on error the player's resources and
/// action counter are as they were before the call.
#[derive(Clone)]
pub struct PlayerActionService {
    manager: Arc<TxnManager>,
}

impl PlayerActionService {
    pub fn new(manager: Arc<TxnManager>) -> Self {
        Self { manager }
    }

    pub fn manager(&self) -> &Arc<TxnManager> {
        &self.manager
    }

    /// Fund a standard project: validate the turn, pay its cost and spend
    /// one action.
    ///
    /// # Returns
    /// * `Ok(PlayerRecord)` - the player as left by the transaction
    /// * `Err(TxnError)` - wrong phase, not their turn, too poor, or out of actions
    pub fn standard_project(
        &self,
        ctx: &TxnContext,
        game_id: &GameId,
        player_id: &PlayerId,
        project: StandardProject,
    ) -> Result<PlayerRecord, TxnError> {
        debug!(%game_id, %player_id, ?project, "Funding standard project");

        let player = self.manager.execute_atomic(ctx, |txn| {
            txn.process_turn_action(game_id, player_id, project.cost())?;
            txn.load_player(game_id, player_id)
        })?;

        info!(%game_id, %player_id, ?project, "Standard project funded");
        Ok(player)
    }

    /// Buy `count` cards at the fixed card price. Does not use an action.
    pub fn buy_cards(
        &self,
        ctx: &TxnContext,
        game_id: &GameId,
        player_id: &PlayerId,
        count: u32,
    ) -> Result<PlayerRecord, TxnError> {
        debug!(%game_id, %player_id, count, "Buying cards");

        let player = self.manager.execute_atomic(ctx, |txn| {
            let cost = card_purchase_cost(count).ok_or_else(|| {
                DomainError::other(format!("cannot price a purchase of {count} cards"))
            })?;
            txn.process_purchase(game_id, player_id, cost)?;
            txn.load_player(game_id, player_id)
        })?;

        info!(%game_id, %player_id, count, "Cards bought");
        Ok(player)
    }
}
