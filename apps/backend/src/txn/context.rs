//! Per-call context handed to `execute_atomic`.

use tokio_util::sync::CancellationToken;

/// Carries the caller's cancellation signal into a transaction.
///
/// The transaction checks it before every operation; once cancelled, the
/// next operation fails and the transaction rolls back.
#[derive(Debug, Clone, Default)]
pub struct TxnContext {
    cancel: CancellationToken,
}

impl TxnContext {
    /// A context that is never cancelled.
    pub fn background() -> Self {
        Self::default()
    }

    /// Observe an existing token, e.g. one tied to a client connection.
    pub fn with_cancellation(cancel: CancellationToken) -> Self {
        Self { cancel }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn token(&self) -> &CancellationToken {
        &self.cancel
    }
}
