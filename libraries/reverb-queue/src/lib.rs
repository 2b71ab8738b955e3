//! Reverb Media Server - Playback File Queue
//!
//! Thread-safe, ordered, index-addressable queue of media files shared
//! across the server's request handlers.
//!
//! This crate provides:
//! - FIFO append and 0-based positional insert/remove/get
//! - Bulk construction from media metadata records
//! - Consistent snapshots for listing handlers
//! - An optional capacity bound for backpressure
//!
//! # Architecture
//!
//! - **[`Queue`]**: the ordered core, no locking of its own
//! - **[`SharedQueue`]**: the mutex-guarded wrapper handlers share; every
//!   public operation acquires the lock exactly once
//! - **[`load_records`]**: bulk adapter from metadata records, holding the
//!   lock once for the whole batch
//!
//! The queue is purely in-memory: it is rebuilt from the metadata
//! repository on demand and knows nothing about media formats. Entries are
//! an opaque path plus the identifier of the record they came from.
//!
//! # Example
//!
//! ```rust
//! use reverb_queue::{QueueEntry, SharedQueue};
//! use std::sync::Arc;
//!
//! let queue = Arc::new(SharedQueue::new());
//!
//! queue.push_back(QueueEntry::new("/music/a.mp3", Some(1)))?;
//! queue.push_back(QueueEntry::new("/music/b.mp3", Some(2)))?;
//! queue.insert(1, QueueEntry::new("/music/x.mp3", None))?;
//!
//! assert_eq!(queue.len()?, 3);
//!
//! // Handlers dequeue the next file to stream
//! let next = queue.pop_front()?.unwrap();
//! assert_eq!(next.path.to_str(), Some("/music/a.mp3"));
//! # Ok::<(), reverb_queue::QueueError>(())
//! ```
//!
//! # Example: Bulk loading from the metadata repository
//!
//! ```rust
//! use reverb_queue::{load_records, MediaRecord, SharedQueue};
//!
//! let queue = SharedQueue::new();
//!
//! let records: Vec<MediaRecord> = serde_json::from_str(
//!     r#"[
//!         {"data_source_path": "/srv/music", "path": "a.mp3", "id": 1},
//!         {"data_source_path": "/srv/music", "path": "b.mp3", "id": 2}
//!     ]"#,
//! )
//! .unwrap();
//!
//! let loaded = load_records(&queue, &records)?;
//! assert_eq!(loaded, 2);
//! # Ok::<(), reverb_queue::QueueError>(())
//! ```

mod error;
mod loader;
mod queue;
mod shared;
pub mod types;

// Public exports
pub use error::{QueueError, Result};
pub use loader::load_records;
pub use queue::Queue;
pub use shared::SharedQueue;
pub use types::{MediaRecord, QueueConfig, QueueEntry};
