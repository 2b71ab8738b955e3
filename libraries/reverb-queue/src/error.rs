//! Error types for queue operations

use thiserror::Error;

/// Queue errors
#[derive(Debug, Error)]
pub enum QueueError {
    /// The queue lock was poisoned by a thread that panicked while holding it
    #[error("Queue lock poisoned")]
    LockPoisoned,

    /// Index out of bounds
    #[error("Index out of bounds: {0}")]
    IndexOutOfBounds(usize),

    /// A metadata record could not be turned into a queue entry
    #[error("Invalid media record: {0}")]
    InvalidRecord(String),

    /// The configured entry limit is reached
    #[error("Queue capacity exceeded: limit is {limit} entries")]
    CapacityExceeded {
        /// The configured limit
        limit: usize,
    },
}

/// Result type for queue operations
pub type Result<T> = std::result::Result<T, QueueError>;
