//! In-memory adapter for the player store.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::debug;

use crate::domain::actions::ActionAllowance;
use crate::domain::resources::Resources;
use crate::domain::state::{GameId, PlayerId, PlayerRecord};
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};
use crate::repos::players::PlayerStore;

type PlayerKey = (GameId, PlayerId);

/// DashMap-backed implementation of PlayerStore.
///
/// Each record lives in its own shard entry, so point reads and writes lock
/// only that entry for the duration of the call.
#[derive(Debug, Default)]
pub struct InMemoryPlayerStore {
    players: DashMap<PlayerKey, PlayerRecord>,
}

impl InMemoryPlayerStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(game_id: &GameId, player_id: &PlayerId) -> PlayerKey {
        (game_id.clone(), player_id.clone())
    }

    fn not_found(game_id: &GameId, player_id: &PlayerId) -> DomainError {
        DomainError::not_found(
            NotFoundKind::Player,
            format!("player {player_id} not found in game {game_id}"),
        )
    }

    fn update_with(
        &self,
        game_id: &GameId,
        player_id: &PlayerId,
        f: impl FnOnce(&mut PlayerRecord),
    ) -> Result<(), DomainError> {
        let mut entry = self
            .players
            .get_mut(&Self::key(game_id, player_id))
            .ok_or_else(|| Self::not_found(game_id, player_id))?;
        f(entry.value_mut());
        Ok(())
    }
}

impl PlayerStore for InMemoryPlayerStore {
    fn get_by_id(
        &self,
        game_id: &GameId,
        player_id: &PlayerId,
    ) -> Result<PlayerRecord, DomainError> {
        self.players
            .get(&Self::key(game_id, player_id))
            .map(|entry| entry.value().clone())
            .ok_or_else(|| Self::not_found(game_id, player_id))
    }

    fn overwrite_resources(
        &self,
        game_id: &GameId,
        player_id: &PlayerId,
        resources: Resources,
    ) -> Result<(), DomainError> {
        self.update_with(game_id, player_id, |p| p.resources = resources)?;
        debug!(%game_id, %player_id, ?resources, "Player resources overwritten");
        Ok(())
    }

    fn overwrite_action_count(
        &self,
        game_id: &GameId,
        player_id: &PlayerId,
        actions: ActionAllowance,
    ) -> Result<(), DomainError> {
        self.update_with(game_id, player_id, |p| p.available_actions = actions)?;
        debug!(%game_id, %player_id, %actions, "Player action count overwritten");
        Ok(())
    }

    fn insert(&self, game_id: &GameId, player: PlayerRecord) -> Result<(), DomainError> {
        match self.players.entry(Self::key(game_id, &player.id)) {
            Entry::Occupied(_) => Err(DomainError::conflict(
                ConflictKind::PlayerExists,
                format!("player {} already exists in game {game_id}", player.id),
            )),
            Entry::Vacant(slot) => {
                debug!(%game_id, player_id = %player.id, "Player added to game");
                slot.insert(player);
                Ok(())
            }
        }
    }

    fn list_by_game(&self, game_id: &GameId) -> Result<Vec<PlayerRecord>, DomainError> {
        let mut players: Vec<PlayerRecord> = self
            .players
            .iter()
            .filter(|entry| &entry.key().0 == game_id)
            .map(|entry| entry.value().clone())
            .collect();
        players.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(players)
    }
}
