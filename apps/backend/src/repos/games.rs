//! Game store contract.

use crate::domain::state::{GameId, GamePhase, GameRecord, PlayerId};
use crate::errors::domain::DomainError;

/// Keyed access to game records.
///
/// The transaction core only reads through `get_by_id`; the update entry
/// points belong to the turn/phase flow that drives a game.
pub trait GameStore: Send + Sync {
    fn get_by_id(&self, game_id: &GameId) -> Result<GameRecord, DomainError>;

    fn insert(&self, game: GameRecord) -> Result<(), DomainError>;

    fn update_phase(&self, game_id: &GameId, phase: GamePhase) -> Result<(), DomainError>;

    fn set_current_turn(
        &self,
        game_id: &GameId,
        player_id: Option<PlayerId>,
    ) -> Result<(), DomainError>;
}
