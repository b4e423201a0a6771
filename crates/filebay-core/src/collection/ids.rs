//! Time-based id allocation

use crate::types::FileId;

/// Largest id the allocator hands out or accepts from a seed
///
/// Ids mirror millisecond timestamps, which are signed 64-bit.
pub const MAX_ID: u64 = i64::MAX as u64;

/// Hands out record ids as millisecond timestamps plus a per-batch offset.
///
/// A batch starts at the current millisecond, or one past the last issued
/// id if the clock has not moved on (or went backwards). Ids therefore
/// never repeat within a collection's lifetime.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    last_issued: Option<u64>,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure future ids stay above an id that already exists
    pub fn observe(&mut self, id: FileId) {
        self.last_issued = Some(self.last_issued.map_or(id.0, |last| last.max(id.0)));
    }

    /// Reserve `count` consecutive ids for a batch ingested at `now_ms`.
    ///
    /// Returns `None` (reserving nothing) when the batch would run past
    /// [`MAX_ID`].
    pub fn allocate(&mut self, now_ms: u64, count: usize) -> Option<Vec<FileId>> {
        if count == 0 {
            return Some(Vec::new());
        }
        let start = match self.last_issued {
            Some(last) => now_ms.max(last.checked_add(1)?),
            None => now_ms,
        };
        let last = start.checked_add(u64::try_from(count - 1).ok()?)?;
        if last > MAX_ID {
            log::warn!("IdAllocator: id space exhausted at {}", start);
            return None;
        }
        self.last_issued = Some(last);
        Some((start..=last).map(FileId).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_offsets() {
        let mut ids = IdAllocator::new();
        let batch = ids.allocate(1_000, 3).unwrap();
        assert_eq!(batch, vec![FileId(1_000), FileId(1_001), FileId(1_002)]);
    }

    #[test]
    fn test_same_millisecond_batches_do_not_collide() {
        let mut ids = IdAllocator::new();
        let first = ids.allocate(1_000, 2).unwrap();
        let second = ids.allocate(1_000, 2).unwrap();
        assert_eq!(first, vec![FileId(1_000), FileId(1_001)]);
        assert_eq!(second, vec![FileId(1_002), FileId(1_003)]);
    }

    #[test]
    fn test_clock_going_backwards() {
        let mut ids = IdAllocator::new();
        ids.allocate(5_000, 1).unwrap();
        assert_eq!(ids.allocate(4_000, 1), Some(vec![FileId(5_001)]));
    }

    #[test]
    fn test_observed_ids_are_skipped() {
        let mut ids = IdAllocator::new();
        ids.observe(FileId(9_000));
        ids.observe(FileId(2));
        assert_eq!(ids.allocate(100, 1), Some(vec![FileId(9_001)]));
    }

    #[test]
    fn test_empty_batch_reserves_nothing() {
        let mut ids = IdAllocator::new();
        assert_eq!(ids.allocate(100, 0), Some(Vec::new()));
        assert_eq!(ids.allocate(100, 1), Some(vec![FileId(100)]));
    }

    #[test]
    fn test_exhausted_id_space_does_not_wrap() {
        let mut ids = IdAllocator::new();
        ids.observe(FileId(u64::MAX));
        assert_eq!(ids.allocate(1, 1), None);

        let mut ids = IdAllocator::new();
        ids.observe(FileId(MAX_ID - 1));
        assert_eq!(ids.allocate(1, 2), None);
        // a failed batch reserves nothing
        assert_eq!(ids.allocate(1, 1), Some(vec![FileId(MAX_ID)]));
        assert_eq!(ids.allocate(1, 1), None);
    }
}
