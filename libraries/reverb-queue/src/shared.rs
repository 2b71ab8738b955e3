//! Thread-safe queue shared across request handlers

use crate::error::{QueueError, Result};
use crate::queue::Queue;
use crate::types::{QueueConfig, QueueEntry};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::error;

/// Mutex-guarded playback queue shared across request handlers
///
/// Handlers share one instance behind an `Arc`; every method takes `&self`
/// and acquires the internal lock for the full call, so each operation is
/// atomic with respect to the queue structure. Ordering between concurrent
/// callers is whichever acquires the lock first, and a completed call is
/// visible to the next acquirer. Calls block until the lock is free; there
/// is no timeout. Callers touching several queues must lock them in a
/// consistent order.
///
/// Reads copy the entry out under the lock, so no reference to queue
/// internals ever escapes a critical section. Entries returned by
/// [`remove`](SharedQueue::remove) and [`pop_front`](SharedQueue::pop_front)
/// are exclusively owned by the caller.
#[derive(Debug, Default)]
pub struct SharedQueue {
    inner: Mutex<Queue>,
}

impl SharedQueue {
    /// Create an empty, unbounded queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty queue with the given configuration
    pub fn with_config(config: QueueConfig) -> Self {
        Self {
            inner: Mutex::new(Queue::with_config(config)),
        }
    }

    /// Append an entry as the new last element
    pub fn push_back(&self, entry: QueueEntry) -> Result<()> {
        self.lock()?.push_back(entry)
    }

    /// Insert an entry so it becomes the element at `index`
    ///
    /// An index at or past the end appends.
    pub fn insert(&self, index: usize, entry: QueueEntry) -> Result<()> {
        self.lock()?.insert(index, entry)
    }

    /// Remove and return the entry at `index`
    ///
    /// Reports [`QueueError::IndexOutOfBounds`] when the index is out of
    /// range; the queue is left unchanged.
    pub fn remove(&self, index: usize) -> Result<QueueEntry> {
        self.lock()?
            .remove(index)
            .ok_or(QueueError::IndexOutOfBounds(index))
    }

    /// Remove and return the next entry to play, if any
    pub fn pop_front(&self) -> Result<Option<QueueEntry>> {
        Ok(self.lock()?.pop_front())
    }

    /// Copy out the entry at `index`
    ///
    /// Reports [`QueueError::IndexOutOfBounds`] when the index is out of
    /// range.
    pub fn get(&self, index: usize) -> Result<QueueEntry> {
        self.lock()?
            .get(index)
            .cloned()
            .ok_or(QueueError::IndexOutOfBounds(index))
    }

    /// Number of entries in the queue
    pub fn len(&self) -> Result<usize> {
        Ok(self.lock()?.len())
    }

    /// Check if the queue is empty
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.lock()?.is_empty())
    }

    /// Copy out every entry, in playback order
    ///
    /// A consistent point-in-time snapshot for listing handlers: later
    /// mutations do not affect the returned entries.
    pub fn snapshot(&self) -> Result<Vec<QueueEntry>> {
        Ok(self.lock()?.iter().cloned().collect())
    }

    /// Drop every entry, best-effort
    ///
    /// Idempotent, and still clears when the lock is poisoned: teardown must
    /// not fail.
    pub fn clear(&self) {
        let mut queue = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        queue.clear();
    }

    /// Acquire the queue lock, mapping poisoning to an error
    ///
    /// A poisoned lock means a thread panicked mid-mutation; nothing is
    /// mutated through this path afterwards.
    pub(crate) fn lock(&self) -> Result<MutexGuard<'_, Queue>> {
        self.inner.lock().map_err(|_| {
            error!("Playback queue lock poisoned, aborting operation");
            QueueError::LockPoisoned
        })
    }
}
