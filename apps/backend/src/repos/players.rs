//! Player store contract.

use crate::domain::actions::ActionAllowance;
use crate::domain::resources::Resources;
use crate::domain::state::{GameId, PlayerId, PlayerRecord};
use crate::errors::domain::DomainError;

/// Keyed access to player records, `(game_id, player_id) -> PlayerRecord`.
///
/// Implementations guard their own state; every read returns an owned copy
/// and every write replaces the stored field wholesale.
pub trait PlayerStore: Send + Sync {
    /// Fetch a copy of the player record.
    ///
    /// # Returns
    /// * `Err(DomainError::NotFound)` - if the game or player is unknown
    fn get_by_id(&self, game_id: &GameId, player_id: &PlayerId)
        -> Result<PlayerRecord, DomainError>;

    /// Overwrite the player's whole resource bundle.
    fn overwrite_resources(
        &self,
        game_id: &GameId,
        player_id: &PlayerId,
        resources: Resources,
    ) -> Result<(), DomainError>;

    /// Overwrite the player's action counter.
    fn overwrite_action_count(
        &self,
        game_id: &GameId,
        player_id: &PlayerId,
        actions: ActionAllowance,
    ) -> Result<(), DomainError>;

    /// Add a new player to a game. Fails with a conflict if the id is taken.
    fn insert(&self, game_id: &GameId, player: PlayerRecord) -> Result<(), DomainError>;

    /// All players of a game, ordered by id.
    fn list_by_game(&self, game_id: &GameId) -> Result<Vec<PlayerRecord>, DomainError>;
}
