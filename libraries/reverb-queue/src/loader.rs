//! Bulk construction of queue entries from media metadata records
//!
//! Thin adapter between the metadata repository and the playback queue:
//! each record is resolved to an on-disk path and appended in order.

use crate::error::Result;
use crate::shared::SharedQueue;
use crate::types::{MediaRecord, QueueEntry};
use tracing::{debug, warn};

/// Append one entry per metadata record, in order
///
/// The queue lock is held for the whole batch, so the records become visible
/// to concurrent readers all at once. The first record that cannot be
/// resolved or appended aborts the batch and its error is returned; entries
/// appended before it are kept (partial application, no rollback). On
/// success, returns the number of entries appended.
pub fn load_records(queue: &SharedQueue, records: &[MediaRecord]) -> Result<usize> {
    let mut entries = queue.lock()?;

    for (index, record) in records.iter().enumerate() {
        let appended = QueueEntry::from_record(record).and_then(|entry| entries.push_back(entry));
        if let Err(err) = appended {
            warn!(
                "Aborting bulk load at record {} of {} (id {}): {}",
                index,
                records.len(),
                record.id,
                err
            );
            return Err(err);
        }
    }

    debug!("Loaded {} media records into playback queue", records.len());
    Ok(records.len())
}
