//! In-memory adapters for the store traits.

pub mod games_mem;
pub mod players_mem;

pub use games_mem::InMemoryGameStore;
pub use players_mem::InMemoryPlayerStore;
