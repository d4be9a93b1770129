//! Domain-level error type raised by operations and stores.
//!
//! This error type is transport-agnostic. Every variant maps to a stable
//! [`ErrorCode`] so callers can branch on the failure kind as well as show
//! the message.

use thiserror::Error;

use crate::domain::resources::{ResourceKind, Shortfall};
use crate::domain::state::GamePhase;
use crate::errors::ErrorCode;

/// Turn preconditions checked before an action is allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PreconditionKind {
    WrongPhase { actual: GamePhase },
    NotYourTurn,
    NoActionsRemaining,
}

/// Domain-level not found entities
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Game,
    Player,
}

/// Domain-level conflict kinds
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConflictKind {
    GameExists,
    PlayerExists,
    /// A per-player lock could not be acquired in time.
    LockTimeout,
}

/// Infra error kinds to distinguish operational failures
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InfraErrorKind {
    /// The store refused or failed a write.
    StoreWrite,
    /// A stored value could not be restored without overflowing.
    DataCorruption,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Wrong phase, not the caller's turn, or no actions left
    #[error("{1}")]
    Precondition(PreconditionKind, String),
    /// A cost could not be covered; names the first short resource
    #[error("{0}")]
    InsufficientResource(Shortfall),
    /// Tried to spend an action with a zero counter
    #[error("no actions remaining: {0}")]
    ActionsExhausted(String),
    /// Missing record in domain terms
    #[error("not found {0:?}: {1}")]
    NotFound(NotFoundKind, String),
    /// Semantic conflict
    #[error("conflict {0:?}: {1}")]
    Conflict(ConflictKind, String),
    /// Infrastructure/operational failures
    #[error("infra {0:?}: {1}")]
    Infra(InfraErrorKind, String),
    /// The caller's context was cancelled before the next operation
    #[error("cancelled: {0}")]
    Cancelled(String),
    /// Caller-defined abort reason
    #[error("aborted: {0}")]
    Other(String),
}

impl DomainError {
    pub fn precondition(kind: PreconditionKind, detail: impl Into<String>) -> Self {
        Self::Precondition(kind, detail.into())
    }
    pub fn wrong_phase(actual: GamePhase) -> Self {
        Self::Precondition(
            PreconditionKind::WrongPhase { actual },
            format!("actions not allowed in phase {actual}"),
        )
    }
    pub fn not_your_turn() -> Self {
        Self::Precondition(PreconditionKind::NotYourTurn, "not your turn".to_string())
    }
    pub fn no_actions_remaining() -> Self {
        Self::Precondition(
            PreconditionKind::NoActionsRemaining,
            "no actions remaining".to_string(),
        )
    }
    pub fn insufficient(kind: ResourceKind, need: u32, have: u32) -> Self {
        Self::InsufficientResource(Shortfall { kind, need, have })
    }
    pub fn actions_exhausted(detail: impl Into<String>) -> Self {
        Self::ActionsExhausted(detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }
    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }
    pub fn cancelled(detail: impl Into<String>) -> Self {
        Self::Cancelled(detail.into())
    }
    pub fn other(detail: impl Into<String>) -> Self {
        Self::Other(detail.into())
    }

    /// The first resource found short, if this is a shortfall.
    pub fn shortfall(&self) -> Option<&Shortfall> {
        match self {
            DomainError::InsufficientResource(s) => Some(s),
            _ => None,
        }
    }

    /// Whether the failure came from the store rather than game rules.
    pub fn is_store_failure(&self) -> bool {
        matches!(self, DomainError::Infra(..))
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::Precondition(kind, _) => match kind {
                PreconditionKind::WrongPhase { .. } => ErrorCode::PhaseMismatch,
                PreconditionKind::NotYourTurn => ErrorCode::OutOfTurn,
                PreconditionKind::NoActionsRemaining => ErrorCode::NoActionsRemaining,
            },
            DomainError::InsufficientResource(_) => ErrorCode::InsufficientResources,
            DomainError::ActionsExhausted(_) => ErrorCode::ActionsExhausted,
            DomainError::NotFound(kind, _) => match kind {
                NotFoundKind::Game => ErrorCode::GameNotFound,
                NotFoundKind::Player => ErrorCode::PlayerNotFound,
            },
            DomainError::Conflict(kind, _) => match kind {
                ConflictKind::GameExists => ErrorCode::GameExists,
                ConflictKind::PlayerExists => ErrorCode::PlayerExists,
                ConflictKind::LockTimeout => ErrorCode::LockTimeout,
            },
            DomainError::Infra(kind, _) => match kind {
                InfraErrorKind::DataCorruption => ErrorCode::DataCorruption,
                InfraErrorKind::StoreWrite | InfraErrorKind::Other(_) => ErrorCode::StoreFailure,
            },
            DomainError::Cancelled(_) => ErrorCode::Cancelled,
            DomainError::Other(_) => ErrorCode::Aborted,
        }
    }
}
