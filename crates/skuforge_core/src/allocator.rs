//! Per-combination sequence allocation.
//!
//! This is the one place in the system where a violated contract produces
//! a user-visible defect: a lost update here means a duplicate SKU.
//! Allocation is therefore pessimistically serialized per combination key,
//! never optimistically retried, and never guarded by one global lock
//! across unrelated keys.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Mutex as AsyncMutex;
use tracing::{debug, warn};

use crate::error::{CoreError, CoreResult};
use crate::key::CombinationKey;

/// Atomic reservation of per-combination sequence numbers.
///
/// Counters are created lazily, only ever increase, and are never
/// recycled: a reserved number that was never consumed into a stored code
/// stays burned. That keeps historical uniqueness unconditional.
#[async_trait]
pub trait SequenceAllocator: Send + Sync {
    /// Reserve the next unused sequence for `key`.
    ///
    /// Concurrent calls for the same key are strictly serialized; calls
    /// for different keys do not block each other.
    async fn allocate_next(&self, key: &CombinationKey) -> CoreResult<u16>;

    /// Raise the counter for `key` to at least `floor`.
    ///
    /// Used when products with out-of-band sequence numbers are imported:
    /// seeding from the highest existing sequence prevents future
    /// collisions. Seeding below the current counter is a no-op.
    async fn seed(&self, key: &CombinationKey, floor: u16) -> CoreResult<()>;

    /// The highest sequence issued so far for `key`, if any.
    async fn current(&self, key: &CombinationKey) -> Option<u16>;
}

/// In-process allocator backed by one counter cell per combination key.
///
/// The outer map lock is held only long enough to fetch or create a key's
/// cell; the increment itself happens under that cell's own async mutex,
/// so contention is confined to requests racing for the identical
/// combination.
pub struct InMemorySequenceAllocator {
    max_sequence: u16,
    counters: Mutex<HashMap<CombinationKey, Arc<AsyncMutex<u16>>>>,
}

impl InMemorySequenceAllocator {
    pub fn new(max_sequence: u16) -> Self {
        Self {
            max_sequence,
            counters: Mutex::new(HashMap::new()),
        }
    }

    fn cell(&self, key: &CombinationKey) -> Arc<AsyncMutex<u16>> {
        let mut counters = self.counters.lock().expect("allocator map lock poisoned");
        counters
            .entry(key.clone())
            .or_insert_with(|| Arc::new(AsyncMutex::new(0)))
            .clone()
    }
}

#[async_trait]
impl SequenceAllocator for InMemorySequenceAllocator {
    async fn allocate_next(&self, key: &CombinationKey) -> CoreResult<u16> {
        let cell = self.cell(key);
        let mut counter = cell.lock().await;
        if *counter >= self.max_sequence {
            warn!("Sequence space exhausted for combination {}", key);
            return Err(CoreError::SequenceExhausted {
                key: key.clone(),
                max: self.max_sequence,
            });
        }
        *counter += 1;
        debug!("Allocated sequence {} for combination {}", *counter, key);
        Ok(*counter)
    }

    async fn seed(&self, key: &CombinationKey, floor: u16) -> CoreResult<()> {
        let cell = self.cell(key);
        let mut counter = cell.lock().await;
        if floor > *counter {
            debug!("Seeding combination {} to sequence {}", key, floor);
            *counter = floor;
        }
        Ok(())
    }

    async fn current(&self, key: &CombinationKey) -> Option<u16> {
        let cell = {
            let counters = self.counters.lock().expect("allocator map lock poisoned");
            counters.get(key).cloned()
        }?;
        let counter = cell.lock().await;
        Some(*counter)
    }
}
