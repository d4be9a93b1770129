//! In-memory adapter for the game store.

use std::collections::HashMap;

use parking_lot::RwLock;
use tracing::debug;

use crate::domain::state::{GameId, GamePhase, GameRecord, PlayerId};
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};
use crate::repos::games::GameStore;

/// RwLock-guarded map implementation of GameStore.
#[derive(Debug, Default)]
pub struct InMemoryGameStore {
    games: RwLock<HashMap<GameId, GameRecord>>,
}

impl InMemoryGameStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn not_found(game_id: &GameId) -> DomainError {
        DomainError::not_found(NotFoundKind::Game, format!("game {game_id} not found"))
    }
}

impl GameStore for InMemoryGameStore {
    fn get_by_id(&self, game_id: &GameId) -> Result<GameRecord, DomainError> {
        self.games
            .read()
            .get(game_id)
            .cloned()
            .ok_or_else(|| Self::not_found(game_id))
    }

    fn insert(&self, game: GameRecord) -> Result<(), DomainError> {
        let mut games = self.games.write();
        if games.contains_key(&game.id) {
            return Err(DomainError::conflict(
                ConflictKind::GameExists,
                format!("game {} already exists", game.id),
            ));
        }
        debug!(game_id = %game.id, phase = %game.phase, "Game created");
        games.insert(game.id.clone(), game);
        Ok(())
    }

    fn update_phase(&self, game_id: &GameId, phase: GamePhase) -> Result<(), DomainError> {
        let mut games = self.games.write();
        let game = games
            .get_mut(game_id)
            .ok_or_else(|| Self::not_found(game_id))?;
        debug!(%game_id, from = %game.phase, to = %phase, "Game phase changed");
        game.phase = phase;
        Ok(())
    }

    fn set_current_turn(
        &self,
        game_id: &GameId,
        player_id: Option<PlayerId>,
    ) -> Result<(), DomainError> {
        let mut games = self.games.write();
        let game = games
            .get_mut(game_id)
            .ok_or_else(|| Self::not_found(game_id))?;
        debug!(%game_id, current_turn = ?player_id, "Current turn changed");
        game.current_turn = player_id;
        Ok(())
    }
}
