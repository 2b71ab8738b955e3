//! Ordered playback queue core
//!
//! Index-addressable FIFO storage for queue entries. This core does no
//! locking of its own: [`SharedQueue`](crate::SharedQueue) guards it behind a
//! mutex, and bulk operations drive it while holding that lock once.

use crate::error::{QueueError, Result};
use crate::types::{QueueConfig, QueueEntry};
use std::collections::VecDeque;

/// Ordered queue of media files awaiting playback
///
/// Positions are 0-based; index 0 is the next entry to play. Entries live in
/// contiguous storage, so the entry count always equals the number of
/// reachable entries and teardown walks no pointer chain.
#[derive(Debug, Clone, Default)]
pub struct Queue {
    /// Entries in playback order (front = next to play)
    entries: VecDeque<QueueEntry>,

    /// Capacity bound, if configured
    config: QueueConfig,
}

impl Queue {
    /// Create an empty, unbounded queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty queue with the given configuration
    pub fn with_config(config: QueueConfig) -> Self {
        Self {
            entries: VecDeque::new(),
            config,
        }
    }

    /// Append an entry as the new last element
    ///
    /// Reports [`QueueError::CapacityExceeded`] when a configured bound is
    /// full; the queue is left unchanged.
    pub fn push_back(&mut self, entry: QueueEntry) -> Result<()> {
        self.ensure_capacity()?;
        self.entries.push_back(entry);
        Ok(())
    }

    /// Insert an entry so it becomes the element at `index`
    ///
    /// Later elements shift one position towards the back. An index at or
    /// past the end appends, so the call is total for any index.
    pub fn insert(&mut self, index: usize, entry: QueueEntry) -> Result<()> {
        self.ensure_capacity()?;
        let index = index.min(self.entries.len());
        self.entries.insert(index, entry);
        Ok(())
    }

    /// Remove and return the entry at `index`
    ///
    /// Returns `None` when the index is out of range. The caller takes
    /// exclusive ownership of the returned entry.
    pub fn remove(&mut self, index: usize) -> Option<QueueEntry> {
        self.entries.remove(index)
    }

    /// Remove and return the next entry to play
    pub fn pop_front(&mut self) -> Option<QueueEntry> {
        self.entries.pop_front()
    }

    /// Get the entry at `index` without removing it
    pub fn get(&self, index: usize) -> Option<&QueueEntry> {
        self.entries.get(index)
    }

    /// Number of entries in the queue
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in playback order
    pub fn iter(&self) -> impl Iterator<Item = &QueueEntry> {
        self.entries.iter()
    }

    /// Drop every entry
    ///
    /// Idempotent: clearing an empty queue is a no-op.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// The configuration this queue was created with
    pub fn config(&self) -> &QueueConfig {
        &self.config
    }

    fn ensure_capacity(&self) -> Result<()> {
        if let Some(limit) = self.config.max_entries {
            if self.entries.len() >= limit {
                return Err(QueueError::CapacityExceeded { limit });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, id: i64) -> QueueEntry {
        QueueEntry::new(format!("/music/{}.mp3", name), Some(id))
    }

    fn paths(queue: &Queue) -> Vec<String> {
        queue
            .iter()
            .map(|e| e.path.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn starts_empty() {
        let queue = Queue::new();
        assert_eq!(queue.len(), 0);
        assert!(queue.is_empty());
        assert!(queue.get(0).is_none());
    }

    #[test]
    fn push_back_is_fifo() {
        let mut queue = Queue::new();
        queue.push_back(entry("a", 1)).unwrap();
        queue.push_back(entry("b", 2)).unwrap();
        queue.push_back(entry("c", 3)).unwrap();

        assert_eq!(queue.len(), 3);
        assert_eq!(
            paths(&queue),
            vec!["/music/a.mp3", "/music/b.mp3", "/music/c.mp3"]
        );
    }

    #[test]
    fn insert_at_front_shifts_rest() {
        let mut queue = Queue::new();
        queue.push_back(entry("a", 1)).unwrap();
        queue.push_back(entry("b", 2)).unwrap();

        queue.insert(0, entry("x", 9)).unwrap();

        assert_eq!(queue.get(0).unwrap().source_id, Some(9));
        assert_eq!(queue.get(1).unwrap().source_id, Some(1));
        assert_eq!(queue.get(2).unwrap().source_id, Some(2));
    }

    #[test]
    fn insert_in_middle() {
        let mut queue = Queue::new();
        queue.push_back(entry("a", 1)).unwrap();
        queue.push_back(entry("b", 2)).unwrap();

        queue.insert(1, entry("x", 9)).unwrap();

        assert_eq!(
            paths(&queue),
            vec!["/music/a.mp3", "/music/x.mp3", "/music/b.mp3"]
        );
        assert_eq!(queue.len(), 3);
    }

    #[test]
    fn insert_past_end_appends() {
        let mut queue = Queue::new();
        queue.push_back(entry("a", 1)).unwrap();

        queue.insert(100, entry("b", 2)).unwrap();

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.get(1).unwrap().source_id, Some(2));
    }

    #[test]
    fn insert_at_len_equals_push_back() {
        let mut inserted = Queue::new();
        inserted.push_back(entry("a", 1)).unwrap();
        inserted.insert(1, entry("b", 2)).unwrap();

        let mut pushed = Queue::new();
        pushed.push_back(entry("a", 1)).unwrap();
        pushed.push_back(entry("b", 2)).unwrap();

        assert_eq!(paths(&inserted), paths(&pushed));
    }

    #[test]
    fn insert_into_empty_queue() {
        let mut queue = Queue::new();
        queue.insert(5, entry("a", 1)).unwrap();

        assert_eq!(queue.len(), 1);
        assert_eq!(queue.get(0).unwrap().source_id, Some(1));
    }

    #[test]
    fn remove_head() {
        let mut queue = Queue::new();
        queue.push_back(entry("a", 1)).unwrap();
        queue.push_back(entry("b", 2)).unwrap();

        let removed = queue.remove(0).unwrap();
        assert_eq!(removed.source_id, Some(1));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.get(0).unwrap().source_id, Some(2));
    }

    #[test]
    fn remove_middle_and_last() {
        let mut queue = Queue::new();
        queue.push_back(entry("a", 1)).unwrap();
        queue.push_back(entry("b", 2)).unwrap();
        queue.push_back(entry("c", 3)).unwrap();

        let removed = queue.remove(1).unwrap();
        assert_eq!(removed.source_id, Some(2));
        assert_eq!(paths(&queue), vec!["/music/a.mp3", "/music/c.mp3"]);

        let removed = queue.remove(1).unwrap();
        assert_eq!(removed.source_id, Some(3));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn remove_out_of_range_is_none() {
        let mut queue = Queue::new();
        assert!(queue.remove(0).is_none());

        queue.push_back(entry("a", 1)).unwrap();
        assert!(queue.remove(1).is_none());
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn remove_last_entry_empties_queue() {
        let mut queue = Queue::new();
        queue.push_back(entry("a", 1)).unwrap();

        queue.remove(0).unwrap();
        assert!(queue.is_empty());

        // Append works again after the queue drained
        queue.push_back(entry("b", 2)).unwrap();
        assert_eq!(queue.get(0).unwrap().source_id, Some(2));
    }

    #[test]
    fn pop_front_drains_in_order() {
        let mut queue = Queue::new();
        queue.push_back(entry("a", 1)).unwrap();
        queue.push_back(entry("b", 2)).unwrap();

        assert_eq!(queue.pop_front().unwrap().source_id, Some(1));
        assert_eq!(queue.pop_front().unwrap().source_id, Some(2));
        assert!(queue.pop_front().is_none());
    }

    #[test]
    fn clear_is_idempotent() {
        let mut queue = Queue::new();
        queue.clear();
        assert!(queue.is_empty());

        queue.push_back(entry("a", 1)).unwrap();
        queue.clear();
        queue.clear();
        assert!(queue.is_empty());
    }

    #[test]
    fn capacity_bound_rejects_append() {
        let mut queue = Queue::with_config(QueueConfig {
            max_entries: Some(2),
        });
        queue.push_back(entry("a", 1)).unwrap();
        queue.push_back(entry("b", 2)).unwrap();

        let err = queue.push_back(entry("c", 3)).unwrap_err();
        assert!(matches!(err, QueueError::CapacityExceeded { limit: 2 }));
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn capacity_bound_rejects_insert() {
        let mut queue = Queue::with_config(QueueConfig {
            max_entries: Some(1),
        });
        queue.push_back(entry("a", 1)).unwrap();

        let err = queue.insert(0, entry("b", 2)).unwrap_err();
        assert!(matches!(err, QueueError::CapacityExceeded { limit: 1 }));
        assert_eq!(queue.get(0).unwrap().source_id, Some(1));
    }

    #[test]
    fn capacity_frees_up_after_removal() {
        let mut queue = Queue::with_config(QueueConfig {
            max_entries: Some(1),
        });
        queue.push_back(entry("a", 1)).unwrap();
        queue.pop_front().unwrap();

        queue.push_back(entry("b", 2)).unwrap();
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn config_accessor_reports_bound() {
        let queue = Queue::with_config(QueueConfig {
            max_entries: Some(5),
        });
        assert_eq!(queue.config().max_entries, Some(5));
        assert_eq!(Queue::new().config().max_entries, None);
    }

    #[test]
    fn len_matches_iteration() {
        let mut queue = Queue::new();
        for i in 0..10 {
            queue.push_back(entry(&i.to_string(), i)).unwrap();
            assert_eq!(queue.len(), queue.iter().count());
        }
        queue.remove(3).unwrap();
        assert_eq!(queue.len(), queue.iter().count());
    }
}
