use std::fmt;

use thiserror::Error;

use crate::errors::{DomainError, ErrorCode};

/// One `undo` that failed while unwinding a transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoFailure {
    /// Description of the operation that could not be undone.
    pub op: String,
    pub error: DomainError,
}

impl fmt::Display for UndoFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.op, self.error)
    }
}

/// Outcome of a failed `execute_atomic` call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TxnError {
    /// The body failed and every applied operation was undone; touched
    /// records are back to their state before the call.
    #[error(transparent)]
    Aborted(#[from] DomainError),
    /// At least one undo failed. Records may be inconsistent and need
    /// operator attention.
    #[error("rollback failed ({}) after: {}", join_failures(.failures), describe_cause(.cause))]
    RollbackFailed {
        /// The error that triggered the rollback; `None` when a dry-run
        /// rollback of a successful body failed.
        cause: Option<DomainError>,
        failures: Vec<UndoFailure>,
    },
}

fn join_failures(failures: &[UndoFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

fn describe_cause(cause: &Option<DomainError>) -> String {
    cause
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_else(|| "dry-run rollback".to_string())
}

impl TxnError {
    /// The error that made the transaction abort, if any.
    pub fn root_cause(&self) -> Option<&DomainError> {
        match self {
            TxnError::Aborted(err) => Some(err),
            TxnError::RollbackFailed { cause, .. } => cause.as_ref(),
        }
    }

    /// Whether state is guaranteed unchanged after this error.
    pub fn is_clean_rollback(&self) -> bool {
        matches!(self, TxnError::Aborted(_))
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            TxnError::Aborted(err) => err.code(),
            TxnError::RollbackFailed { .. } => ErrorCode::RollbackFailed,
        }
    }

    pub fn rollback_failures(&self) -> &[UndoFailure] {
        match self {
            TxnError::Aborted(_) => &[],
            TxnError::RollbackFailed { failures, .. } => failures,
        }
    }
}
