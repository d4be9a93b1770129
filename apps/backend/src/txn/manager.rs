use std::sync::Arc;

use tracing::{debug, error, info_span, warn};

use super::context::TxnContext;
use super::locks::EntityLocks;
use super::plan::TxnPlan;
use super::policy::TxnPolicy;
use super::transaction::Transaction;
use crate::config::TxnConfig;
use crate::error::TxnError;
use crate::errors::domain::DomainError;
use crate::repos::{GameStore, PlayerStore, Stores};

/// Runs caller-supplied bodies as all-or-nothing units of work.
///
/// One manager is shared by every caller touching the same stores; it owns
/// the per-player lock table, so two managers over the same stores would not
/// serialize against each other.
pub struct TxnManager {
    stores: Stores,
    locks: EntityLocks,
    config: TxnConfig,
}

impl TxnManager {
    pub fn new(players: Arc<dyn PlayerStore>, games: Arc<dyn GameStore>) -> Self {
        Self::with_config(Stores::new(players, games), TxnConfig::default())
    }

    pub fn with_config(stores: Stores, config: TxnConfig) -> Self {
        Self {
            stores,
            locks: EntityLocks::new(),
            config,
        }
    }

    pub fn stores(&self) -> &Stores {
        &self.stores
    }

    pub fn player_store(&self) -> &Arc<dyn PlayerStore> {
        &self.stores.players
    }

    pub fn game_store(&self) -> &Arc<dyn GameStore> {
        &self.stores.games
    }

    pub fn config(&self) -> &TxnConfig {
        &self.config
    }

    /// Execute `f` within a fresh transaction.
    ///
    /// 1) `f` returns `Ok` → keep its mutations (or unwind them under
    ///    `RollbackOnOk`) and return the value
    /// 2) `f` returns `Err` → undo every applied operation, most recent first,
    ///    and return the original error as `TxnError::Aborted`
    /// 3) some undo fails → `TxnError::RollbackFailed` carrying both the cause
    ///    and every failed undo
    ///
    /// Player leases taken by the body are held until after commit or rollback.
    /// They are not re-entrant: a body that calls `execute_atomic` again on
    /// this manager for a player it already touched waits out `lock_timeout`
    /// and the inner call fails with `Conflict(LockTimeout)`.
    pub fn execute_atomic<R, F>(&self, ctx: &TxnContext, f: F) -> Result<R, TxnError>
    where
        F: FnOnce(&mut Transaction<'_>) -> Result<R, DomainError>,
    {
        let mut txn = Transaction::new(&self.stores, &self.locks, self.config.lock_timeout, ctx);
        let span = info_span!("txn", txn_id = %txn.id());
        let _enter = span.enter();

        match f(&mut txn) {
            Ok(val) => match self.config.policy {
                TxnPolicy::CommitOnOk => {
                    debug!(ops = txn.applied_len(), "Transaction committed");
                    Ok(val)
                }
                TxnPolicy::RollbackOnOk => {
                    debug!(ops = txn.applied_len(), "Dry run; rolling back successful transaction");
                    let failures = txn.rollback();
                    if failures.is_empty() {
                        Ok(val)
                    } else {
                        error!(failed = failures.len(), "Dry-run rollback incomplete");
                        Err(TxnError::RollbackFailed {
                            cause: None,
                            failures,
                        })
                    }
                }
            },
            Err(err) => {
                warn!(
                    error = %err,
                    code = %err.code(),
                    ops = txn.applied_len(),
                    "Transaction failed; rolling back"
                );
                let failures = txn.rollback();
                if failures.is_empty() {
                    Err(TxnError::Aborted(err))
                } else {
                    error!(error = %err, failed = failures.len(), "Rollback incomplete");
                    Err(TxnError::RollbackFailed {
                        cause: Some(err),
                        failures,
                    })
                }
            }
        }
    }

    /// Run every step of `plan` in one transaction.
    pub fn run_plan(&self, ctx: &TxnContext, plan: &TxnPlan) -> Result<(), TxnError> {
        self.execute_atomic(ctx, |txn| plan.run(txn))
    }
}
