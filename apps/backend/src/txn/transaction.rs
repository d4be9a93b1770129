use std::time::Duration;

use tracing::{debug, error};
use uuid::Uuid;

use super::context::TxnContext;
use super::locks::{EntityKey, EntityLease, EntityLocks};
use super::operations::{
    ConsumeAction, DeductResources, Operation, ValidateResources, ValidateTurn,
};
use crate::domain::resources::Resources;
use crate::domain::state::{GameId, PlayerId, PlayerRecord};
use crate::error::UndoFailure;
use crate::errors::domain::DomainError;
use crate::repos::Stores;

/// Ordered log of successfully applied operations for one unit of work.
///
/// Only [`TxnManager::execute_atomic`](super::TxnManager::execute_atomic)
/// creates transactions. Every applied operation is appended to the log;
/// a failed `apply` is returned to the caller and never logged.
pub struct Transaction<'m> {
    id: Uuid,
    stores: &'m Stores,
    locks: &'m EntityLocks,
    lock_timeout: Duration,
    ctx: &'m TxnContext,
    held: Vec<EntityLease>,
    applied: Vec<Box<dyn Operation>>,
}

impl<'m> Transaction<'m> {
    pub(crate) fn new(
        stores: &'m Stores,
        locks: &'m EntityLocks,
        lock_timeout: Duration,
        ctx: &'m TxnContext,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            stores,
            locks,
            lock_timeout,
            ctx,
            held: Vec::new(),
            applied: Vec::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Number of operations in the rollback log.
    pub fn applied_len(&self) -> usize {
        self.applied.len()
    }

    /// Descriptions of the logged operations, in apply order.
    pub fn applied_ops(&self) -> Vec<String> {
        self.applied.iter().map(|op| op.describe()).collect()
    }

    /// Apply `op` and, on success, append it to the rollback log.
    ///
    /// Fails without applying if the context was cancelled or the player
    /// lease for the operation cannot be obtained in time.
    pub fn apply<O>(&mut self, mut op: O) -> Result<(), DomainError>
    where
        O: Operation + 'static,
    {
        let label = op.describe();
        if self.ctx.is_cancelled() {
            debug!(op = %label, "Context cancelled before apply");
            return Err(DomainError::cancelled(format!("cancelled before {label}")));
        }
        if let Some(key) = op.lock_key() {
            self.ensure_locked(key)?;
        }

        match op.apply(self.stores) {
            Ok(()) => {
                debug!(op = %label, "Applied operation");
                self.applied.push(Box::new(op));
                Ok(())
            }
            Err(err) => {
                debug!(op = %label, error = %err, "Operation failed");
                Err(err)
            }
        }
    }

    fn ensure_locked(&mut self, key: EntityKey) -> Result<(), DomainError> {
        if self.held.iter().any(|lease| lease.key() == &key) {
            return Ok(());
        }
        let lease = self.locks.acquire(key, self.lock_timeout)?;
        self.held.push(lease);
        Ok(())
    }

    /// Read a player's record under this transaction's lease on them.
    pub fn load_player(
        &mut self,
        game_id: &GameId,
        player_id: &PlayerId,
    ) -> Result<PlayerRecord, DomainError> {
        self.ensure_locked(EntityKey::player(game_id, player_id))?;
        self.stores.players.get_by_id(game_id, player_id)
    }

    pub fn validate_turn(
        &mut self,
        game_id: &GameId,
        player_id: &PlayerId,
    ) -> Result<(), DomainError> {
        self.apply(ValidateTurn::new(game_id.clone(), player_id.clone()))
    }

    pub fn validate_resources(
        &mut self,
        game_id: &GameId,
        player_id: &PlayerId,
        cost: Resources,
    ) -> Result<(), DomainError> {
        self.apply(ValidateResources::new(
            game_id.clone(),
            player_id.clone(),
            cost,
        ))
    }

    pub fn deduct_resources(
        &mut self,
        game_id: &GameId,
        player_id: &PlayerId,
        cost: Resources,
    ) -> Result<(), DomainError> {
        self.apply(DeductResources::new(
            game_id.clone(),
            player_id.clone(),
            cost,
        ))
    }

    pub fn consume_action(
        &mut self,
        game_id: &GameId,
        player_id: &PlayerId,
    ) -> Result<(), DomainError> {
        self.apply(ConsumeAction::new(game_id.clone(), player_id.clone()))
    }

    /// Validate the turn, pay `cost`, then spend one action.
    ///
    /// A zero `cost` skips the deduction step entirely.
    pub fn process_turn_action(
        &mut self,
        game_id: &GameId,
        player_id: &PlayerId,
        cost: Resources,
    ) -> Result<(), DomainError> {
        self.validate_turn(game_id, player_id)?;
        if !cost.is_zero() {
            self.deduct_resources(game_id, player_id, cost)?;
        }
        self.consume_action(game_id, player_id)
    }

    /// Pay `cost` without touching the action counter.
    pub fn process_purchase(
        &mut self,
        game_id: &GameId,
        player_id: &PlayerId,
        cost: Resources,
    ) -> Result<(), DomainError> {
        self.deduct_resources(game_id, player_id, cost)
    }

    /// Undo every logged operation, most recent first.
    ///
    /// Keeps going past a failed undo so later entries still get their
    /// chance; the failures are returned in the order they happened.
    pub(crate) fn rollback(&mut self) -> Vec<UndoFailure> {
        let mut failures = Vec::new();
        while let Some(mut op) = self.applied.pop() {
            let label = op.describe();
            match op.undo(self.stores) {
                Ok(()) => debug!(op = %label, "Undid operation"),
                Err(err) => {
                    error!(op = %label, error = %err, "Undo failed; record left inconsistent");
                    failures.push(UndoFailure { op: label, error: err });
                }
            }
        }
        failures
    }
}
