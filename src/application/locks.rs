//! Per-restaurant serialization for reservation creation.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

/// Keyed async mutexes, one per restaurant.
///
/// The availability check is a read followed by a later insert, so two
/// concurrent create requests for the same restaurant could both observe a
/// table as free. Holding the restaurant's lock across the
/// conflict-check-and-insert sequence serializes them; requests for other
/// restaurants proceed untouched. The store's exclusion constraint on
/// `(table, window)` remains the backstop for anything outside this
/// process.
#[derive(Default)]
pub struct RestaurantLocks {
    locks: Mutex<HashMap<i64, Arc<AsyncMutex<()>>>>,
}

impl RestaurantLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquires the lock for one restaurant, creating it on first use.
    pub async fn acquire(&self, restaurant_id: i64) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().expect("restaurant lock registry poisoned");
            Arc::clone(
                locks
                    .entry(restaurant_id)
                    .or_insert_with(|| Arc::new(AsyncMutex::new(()))),
            )
        };

        lock.lock_owned().await
    }
}
