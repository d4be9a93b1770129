//! Action handlers built on the transaction core.

pub mod player_actions;

pub use player_actions::PlayerActionService;
