//! Reversible units of work executed by a transaction.
//!
//! Each operation re-reads the record it touches from the store on `apply`
//! and again on `undo`; nothing is cached between the two. Undo is additive
//! (it hands back exactly what `apply` took), which is sound because the
//! transaction holds the player's lease from `apply` until after `undo`.

use tracing::debug;

use crate::domain::actions::ActionAllowance;
use crate::domain::resources::Resources;
use crate::domain::state::{GameId, GamePhase, PlayerId};
use crate::errors::domain::{DomainError, InfraErrorKind};
use crate::repos::Stores;
use crate::txn::locks::EntityKey;

/// Phase in which turn actions are allowed.
pub const ACTIONABLE_PHASE: GamePhase = GamePhase::Action;

/// A reversible unit of state mutation.
///
/// Implementations record whatever they need during `apply` so `undo` can
/// reverse exactly that delta. `undo` is only ever called after a successful
/// `apply`, at most once.
pub trait Operation {
    fn apply(&mut self, stores: &Stores) -> Result<(), DomainError>;

    fn undo(&mut self, stores: &Stores) -> Result<(), DomainError>;

    /// Player record this operation reads or writes, if any. The transaction
    /// takes that player's lease before calling `apply`.
    fn lock_key(&self) -> Option<EntityKey> {
        None
    }

    /// Short human-readable label used in logs and rollback reports.
    fn describe(&self) -> String;
}

/// Read-only check that a player may take a turn action right now.
#[derive(Debug, Clone)]
pub struct ValidateTurn {
    game_id: GameId,
    player_id: PlayerId,
    phase: GamePhase,
}

impl ValidateTurn {
    pub fn new(game_id: GameId, player_id: PlayerId) -> Self {
        Self::in_phase(game_id, player_id, ACTIONABLE_PHASE)
    }

    pub fn in_phase(game_id: GameId, player_id: PlayerId, phase: GamePhase) -> Self {
        Self {
            game_id,
            player_id,
            phase,
        }
    }
}

impl Operation for ValidateTurn {
    fn apply(&mut self, stores: &Stores) -> Result<(), DomainError> {
        let game = stores.games.get_by_id(&self.game_id)?;
        if game.phase != self.phase {
            return Err(DomainError::wrong_phase(game.phase));
        }
        if !game.is_turn_of(&self.player_id) {
            return Err(DomainError::not_your_turn());
        }

        let player = stores.players.get_by_id(&self.game_id, &self.player_id)?;
        if !player.available_actions.can_act() {
            return Err(DomainError::no_actions_remaining());
        }
        Ok(())
    }

    fn undo(&mut self, _stores: &Stores) -> Result<(), DomainError> {
        Ok(())
    }

    fn lock_key(&self) -> Option<EntityKey> {
        Some(EntityKey::player(&self.game_id, &self.player_id))
    }

    fn describe(&self) -> String {
        format!("validate_turn({}/{})", self.game_id, self.player_id)
    }
}

/// Read-only affordability check.
#[derive(Debug, Clone)]
pub struct ValidateResources {
    game_id: GameId,
    player_id: PlayerId,
    cost: Resources,
}

impl ValidateResources {
    pub fn new(game_id: GameId, player_id: PlayerId, cost: Resources) -> Self {
        Self {
            game_id,
            player_id,
            cost,
        }
    }
}

impl Operation for ValidateResources {
    fn apply(&mut self, stores: &Stores) -> Result<(), DomainError> {
        let player = stores.players.get_by_id(&self.game_id, &self.player_id)?;
        match player.resources.shortfall(&self.cost) {
            Some(short) => Err(DomainError::InsufficientResource(short)),
            None => Ok(()),
        }
    }

    fn undo(&mut self, _stores: &Stores) -> Result<(), DomainError> {
        Ok(())
    }

    fn lock_key(&self) -> Option<EntityKey> {
        Some(EntityKey::player(&self.game_id, &self.player_id))
    }

    fn describe(&self) -> String {
        format!("validate_resources({}/{})", self.game_id, self.player_id)
    }
}

/// Subtract a cost bundle from a player's resources, all or nothing.
#[derive(Debug, Clone)]
pub struct DeductResources {
    game_id: GameId,
    player_id: PlayerId,
    cost: Resources,
    /// Bundle actually subtracted; `Some` only between apply and undo.
    deducted: Option<Resources>,
}

impl DeductResources {
    pub fn new(game_id: GameId, player_id: PlayerId, cost: Resources) -> Self {
        Self {
            game_id,
            player_id,
            cost,
            deducted: None,
        }
    }
}

impl Operation for DeductResources {
    fn apply(&mut self, stores: &Stores) -> Result<(), DomainError> {
        let player = stores.players.get_by_id(&self.game_id, &self.player_id)?;
        let remaining = player
            .resources
            .try_deduct(&self.cost)
            .map_err(DomainError::InsufficientResource)?;

        stores
            .players
            .overwrite_resources(&self.game_id, &self.player_id, remaining)?;
        self.deducted = Some(self.cost);
        Ok(())
    }

    fn undo(&mut self, stores: &Stores) -> Result<(), DomainError> {
        let Some(cost) = self.deducted else {
            return Ok(());
        };

        let player = stores.players.get_by_id(&self.game_id, &self.player_id)?;
        let restored = player.resources.checked_add(&cost).map_err(|kind| {
            DomainError::infra(
                InfraErrorKind::DataCorruption,
                format!(
                    "restoring {kind} for {}/{} would overflow",
                    self.game_id, self.player_id
                ),
            )
        })?;

        stores
            .players
            .overwrite_resources(&self.game_id, &self.player_id, restored)?;
        self.deducted = None;
        Ok(())
    }

    fn lock_key(&self) -> Option<EntityKey> {
        Some(EntityKey::player(&self.game_id, &self.player_id))
    }

    fn describe(&self) -> String {
        format!(
            "deduct_resources({}/{}, {:?})",
            self.game_id, self.player_id, self.cost
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Consumed {
    /// Counter went down by one and must come back up on undo.
    Decremented,
    /// Unlimited allowance; nothing was written.
    Unlimited,
}

/// Spend exactly one of the player's turn actions.
#[derive(Debug, Clone)]
pub struct ConsumeAction {
    game_id: GameId,
    player_id: PlayerId,
    consumed: Option<Consumed>,
}

impl ConsumeAction {
    pub fn new(game_id: GameId, player_id: PlayerId) -> Self {
        Self {
            game_id,
            player_id,
            consumed: None,
        }
    }
}

impl Operation for ConsumeAction {
    fn apply(&mut self, stores: &Stores) -> Result<(), DomainError> {
        let player = stores.players.get_by_id(&self.game_id, &self.player_id)?;
        match player.available_actions {
            ActionAllowance::Unlimited => {
                debug!(
                    game_id = %self.game_id,
                    player_id = %self.player_id,
                    "Unlimited actions; nothing consumed"
                );
                self.consumed = Some(Consumed::Unlimited);
            }
            current => {
                let next = current.consumed().ok_or_else(|| {
                    DomainError::actions_exhausted(format!(
                        "player {} has no actions left this turn",
                        self.player_id
                    ))
                })?;
                stores
                    .players
                    .overwrite_action_count(&self.game_id, &self.player_id, next)?;
                self.consumed = Some(Consumed::Decremented);
            }
        }
        Ok(())
    }

    fn undo(&mut self, stores: &Stores) -> Result<(), DomainError> {
        if self.consumed != Some(Consumed::Decremented) {
            self.consumed = None;
            return Ok(());
        }

        let player = stores.players.get_by_id(&self.game_id, &self.player_id)?;
        let restored = player.available_actions.restored().ok_or_else(|| {
            DomainError::infra(
                InfraErrorKind::DataCorruption,
                format!(
                    "restoring action counter for {}/{} would overflow",
                    self.game_id, self.player_id
                ),
            )
        })?;

        stores
            .players
            .overwrite_action_count(&self.game_id, &self.player_id, restored)?;
        self.consumed = None;
        Ok(())
    }

    fn lock_key(&self) -> Option<EntityKey> {
        Some(EntityKey::player(&self.game_id, &self.player_id))
    }

    fn describe(&self) -> String {
        format!("consume_action({}/{})", self.game_id, self.player_id)
    }
}
