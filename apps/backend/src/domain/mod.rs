//! Domain layer: game records and resource arithmetic, free of storage.

pub mod actions;
pub mod projects;
pub mod resources;
pub mod state;

// Re-exports for ergonomics
pub use actions::{ActionAllowance, InvalidActionCount, UNLIMITED_ACTIONS};
pub use projects::{card_purchase_cost, StandardProject, CARD_PURCHASE_COST};
pub use resources::{ResourceKind, Resources, Shortfall};
pub use state::{GameId, GamePhase, GameRecord, PlayerId, PlayerRecord};
