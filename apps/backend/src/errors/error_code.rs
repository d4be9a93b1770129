//! Error codes for the game backend.
//!
//! This module defines all error codes surfaced by the transaction core.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and are what action handlers
//! forward to clients.

use core::fmt;

/// Centralized error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Turn preconditions
    /// Action attempted outside the action phase
    PhaseMismatch,
    /// Action attempted by a player who does not hold the turn
    OutOfTurn,
    /// Turn validation found no actions left
    NoActionsRemaining,

    // Spending
    /// A cost exceeded the player's resources
    InsufficientResources,
    /// An action was consumed with a zero counter
    ActionsExhausted,

    // Resource Not Found
    /// Game not found
    GameNotFound,
    /// Player not found
    PlayerNotFound,

    // Conflicts
    /// Game id already taken
    GameExists,
    /// Player id already taken within the game
    PlayerExists,
    /// Per-player lock not acquired within the configured wait
    LockTimeout,

    // Control flow
    /// Caller context cancelled mid-transaction
    Cancelled,
    /// Caller aborted the transaction body
    Aborted,

    // System Errors
    /// Underlying store write failed
    StoreFailure,
    /// Stored value could not be restored consistently
    DataCorruption,
    /// One or more undo steps failed; state may be inconsistent
    RollbackFailed,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PhaseMismatch => "PHASE_MISMATCH",
            Self::OutOfTurn => "OUT_OF_TURN",
            Self::NoActionsRemaining => "NO_ACTIONS_REMAINING",

            Self::InsufficientResources => "INSUFFICIENT_RESOURCES",
            Self::ActionsExhausted => "ACTIONS_EXHAUSTED",

            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::PlayerNotFound => "PLAYER_NOT_FOUND",

            Self::GameExists => "GAME_EXISTS",
            Self::PlayerExists => "PLAYER_EXISTS",
            Self::LockTimeout => "LOCK_TIMEOUT",

            Self::Cancelled => "CANCELLED",
            Self::Aborted => "ABORTED",

            Self::StoreFailure => "STORE_FAILURE",
            Self::DataCorruption => "DATA_CORRUPTION",
            Self::RollbackFailed => "ROLLBACK_FAILED",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
