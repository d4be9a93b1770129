#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod repos;
pub mod services;
pub mod telemetry;
pub mod txn;

// Re-exports for public API
pub use config::{ConfigError, TxnConfig};
pub use domain::{
    ActionAllowance, GameId, GamePhase, GameRecord, PlayerId, PlayerRecord, ResourceKind,
    Resources, Shortfall, StandardProject,
};
pub use error::{TxnError, UndoFailure};
pub use errors::{DomainError, ErrorCode};
pub use repos::{GameStore, PlayerStore, Stores};
pub use services::PlayerActionService;
pub use txn::{Operation, Transaction, TxnContext, TxnManager, TxnPlan, TxnPolicy};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::logging::init();
}
