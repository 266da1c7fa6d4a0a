//! Per-key async mutual exclusion.
//!
//! Locks are process-local: every engine process serving the same store must
//! be the only one, or the guarantees below do not hold across processes.

use std::hash::Hash;
use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

type LockMap<K> = DashMap<K, Arc<Mutex<()>>>;

/// A lazily populated map of one async mutex per key.
///
/// Used keyed by `UserId` to serialize writes to a player record and keyed by
/// `GameDay` to serialize the boss read-modify-write. When both are needed the
/// player lock is always taken first.
///
/// An entry lives only while some caller holds or waits on it, so the map is
/// bounded by the number of keys in flight.
pub struct KeyedLocks<K> {
    locks: Arc<LockMap<K>>,
}

impl<K> KeyedLocks<K>
where
    K: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self {
            locks: Arc::new(DashMap::new()),
        }
    }

    /// Wait for exclusive access to `key`. Released when the guard drops.
    pub async fn lock(&self, key: &K) -> KeyGuard<K> {
        // Clone the Arc out so the shard lock is released before awaiting
        let mutex = self.locks.entry(key.clone()).or_default().clone();
        let guard = mutex.lock_owned().await;
        KeyGuard {
            key: key.clone(),
            locks: self.locks.clone(),
            guard: Some(guard),
        }
    }
}

impl<K> Default for KeyedLocks<K>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Exclusive access to one key of a [`KeyedLocks`].
pub struct KeyGuard<K: Eq + Hash> {
    key: K,
    locks: Arc<LockMap<K>>,
    guard: Option<OwnedMutexGuard<()>>,
}

impl<K: Eq + Hash> Drop for KeyGuard<K> {
    fn drop(&mut self) {
        drop(self.guard.take());
        // Only the map's own reference left means nobody holds or awaits it.
        // New callers clone under the same shard lock, so this cannot race.
        self.locks
            .remove_if(&self.key, |_, mutex| Arc::strong_count(mutex) == 1);
    }
}
