//! Store traits the transaction core and services depend on.

use std::sync::Arc;

use crate::adapters::{InMemoryGameStore, InMemoryPlayerStore};

pub mod games;
pub mod players;

pub use games::GameStore;
pub use players::PlayerStore;

/// Shared handles to both stores, as handed to operations.
#[derive(Clone)]
pub struct Stores {
    pub players: Arc<dyn PlayerStore>,
    pub games: Arc<dyn GameStore>,
}

impl Stores {
    pub fn new(players: Arc<dyn PlayerStore>, games: Arc<dyn GameStore>) -> Self {
        Self { players, games }
    }

    /// Fresh, empty in-memory stores.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryPlayerStore::new()),
            Arc::new(InMemoryGameStore::new()),
        )
    }
}
