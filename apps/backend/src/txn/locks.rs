//! Per-player exclusive locks held for the lifetime of a transaction.
//!
//! Store calls only lock for a single read or write. A transaction that
//! validates, then deducts, then consumes would otherwise race with a
//! concurrent transaction on the same player between those steps. Each
//! transaction therefore takes a lease on every player it touches, from the
//! manager's lock table, and only releases it when dropped, after commit or
//! rollback.

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use parking_lot::{Condvar, Mutex};
use tracing::{debug, warn};

use crate::domain::state::{GameId, PlayerId};
use crate::errors::domain::{ConflictKind, DomainError};

/// Lock granularity: one player record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityKey {
    pub game_id: GameId,
    pub player_id: PlayerId,
}

impl EntityKey {
    pub fn player(game_id: &GameId, player_id: &PlayerId) -> Self {
        Self {
            game_id: game_id.clone(),
            player_id: player_id.clone(),
        }
    }
}

impl fmt::Display for EntityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.game_id, self.player_id)
    }
}

#[derive(Debug, Default)]
struct Slot {
    held: Mutex<bool>,
    released: Condvar,
}

type SlotTable = DashMap<EntityKey, Arc<Slot>>;

/// Table of lock slots, created on first use per key and pruned when the
/// last lease or waiter on a key lets go.
#[derive(Debug, Default)]
pub struct EntityLocks {
    slots: Arc<SlotTable>,
}

impl EntityLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Block until `key` is free or `timeout` elapses.
    ///
    /// # Returns
    /// * `Ok(EntityLease)` - exclusive until dropped
    /// * `Err(DomainError::Conflict(LockTimeout))` - still held by another transaction
    pub fn acquire(&self, key: EntityKey, timeout: Duration) -> Result<EntityLease, DomainError> {
        let slot = self.slots.entry(key.clone()).or_default().value().clone();
        let deadline = Instant::now() + timeout;

        let mut held = slot.held.lock();
        while *held {
            if slot.released.wait_until(&mut held, deadline).timed_out() && *held {
                warn!(
                    entity = %key,
                    timeout_ms = timeout.as_millis() as u64,
                    "Entity lock wait timed out"
                );
                drop(held);
                drop(slot);
                prune(&self.slots, &key);
                return Err(DomainError::conflict(
                    ConflictKind::LockTimeout,
                    format!("player {key} is locked by another transaction"),
                ));
            }
        }
        *held = true;
        drop(held);

        debug!(entity = %key, "Entity lock acquired");
        Ok(EntityLease {
            key,
            slot: Some(slot),
            table: Arc::clone(&self.slots),
        })
    }

    /// Whether some lease on `key` is currently outstanding.
    pub fn is_locked(&self, key: &EntityKey) -> bool {
        self.slots
            .get(key)
            .map(|slot| *slot.held.lock())
            .unwrap_or(false)
    }

    /// Number of keys with a live slot.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }
}

/// Drop `key`'s slot once the table holds the only reference to it.
///
/// Callers release their own clone first. Acquirers clone under the shard
/// lock, so whoever lets go last sees a count of one.
fn prune(table: &SlotTable, key: &EntityKey) {
    table.remove_if(key, |_, slot| Arc::strong_count(slot) == 1 && !*slot.held.lock());
}

/// Exclusive hold on one entity; released on drop.
pub struct EntityLease {
    key: EntityKey,
    slot: Option<Arc<Slot>>,
    table: Arc<SlotTable>,
}

impl EntityLease {
    pub fn key(&self) -> &EntityKey {
        &self.key
    }
}

impl fmt::Debug for EntityLease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityLease").field("key", &self.key).finish()
    }
}

impl Drop for EntityLease {
    fn drop(&mut self) {
        if let Some(slot) = self.slot.take() {
            *slot.held.lock() = false;
            slot.released.notify_one();
        }
        prune(&self.table, &self.key);
        debug!(entity = %self.key, "Entity lock released");
    }
}
