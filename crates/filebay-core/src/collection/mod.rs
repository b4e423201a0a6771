//! Collection engine
//!
//! Owns the authoritative list of [`FileRecord`]s. The list is only changed
//! by prepending an ingested batch or removing records by id; every ordering
//! the user sees is re-derived by [`crate::view`].

mod ids;

pub use ids::{IdAllocator, MAX_ID};

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::error::{FileOpError, FileOpResult};
use crate::record::{FileBlob, FileRecord};
use crate::types::FileId;

/// The live set of records, most recently ingested first
#[derive(Debug, Default)]
pub struct Collection {
    records: Vec<FileRecord>,
    ids: IdAllocator,
}

impl Collection {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a collection holding pre-existing records.
    ///
    /// Records with an id already present, or above [`MAX_ID`], are dropped
    /// so ids stay unique and new batches always have room.
    pub fn with_seed(seed: Vec<FileRecord>) -> Self {
        let mut ids = IdAllocator::new();
        let mut seen = HashSet::new();
        let mut records = Vec::with_capacity(seed.len());
        for record in seed {
            if record.id.get() > MAX_ID {
                log::warn!("Collection: dropping seed record with out-of-range id {}", record.id);
                continue;
            }
            if !seen.insert(record.id) {
                log::warn!("Collection: dropping seed record with duplicate id {}", record.id);
                continue;
            }
            ids.observe(record.id);
            records.push(record);
        }
        Self { records, ids }
    }

    /// Ingest a batch of blobs, newest first.
    ///
    /// Every blob becomes a record stamped with `now`. The new records are
    /// placed in front of the existing ones, in the order given, and returned
    /// as a slice. An empty batch, or one the id space cannot hold, changes
    /// nothing.
    pub fn add_batch(
        &mut self,
        blobs: Vec<FileBlob>,
        now: DateTime<Utc>,
    ) -> FileOpResult<&[FileRecord]> {
        if blobs.is_empty() {
            return Err(FileOpError::EmptyBatch);
        }
        let now_ms = u64::try_from(now.timestamp_millis()).unwrap_or(0);
        let ids = self
            .ids
            .allocate(now_ms, blobs.len())
            .ok_or(FileOpError::IdsExhausted)?;
        let count = blobs.len();

        let mut batch: Vec<FileRecord> = ids
            .into_iter()
            .zip(blobs)
            .map(|(id, blob)| FileRecord::from_blob(id, blob, now))
            .collect();
        batch.append(&mut self.records);
        self.records = batch;

        log::debug!(
            "Collection: added {} record(s), {} total",
            count,
            self.records.len()
        );
        Ok(&self.records[..count])
    }

    /// Remove one record, handing it back to the caller.
    ///
    /// Returns `None` (and changes nothing) when the id is unknown.
    pub fn remove_one(&mut self, id: FileId) -> Option<FileRecord> {
        let index = self.records.iter().position(|r| r.id == id)?;
        Some(self.records.remove(index))
    }

    /// Remove every record whose id is in `ids`, returning how many went.
    ///
    /// Unknown ids are ignored. The removal happens in one pass, so callers
    /// never see a partially applied set.
    pub fn remove_many(&mut self, ids: &HashSet<FileId>) -> usize {
        if ids.is_empty() {
            return 0;
        }
        let before = self.records.len();
        self.records.retain(|r| !ids.contains(&r.id));
        before - self.records.len()
    }

    /// Look a record up by id
    pub fn get(&self, id: FileId) -> Option<&FileRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Check whether an id belongs to a live record
    pub fn contains(&self, id: FileId) -> bool {
        self.records.iter().any(|r| r.id == id)
    }

    /// All records in storage order (most recent batch first)
    pub fn records(&self) -> &[FileRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &FileRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct MIME types across the whole collection, in first-seen order.
    ///
    /// Feeds the type filter options, so it ignores the current view.
    pub fn distinct_types(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .map(|r| r.mime.as_str())
            .filter(|mime| seen.insert(*mime))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OCTET_STREAM;
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap()
    }

    fn seeded() -> Collection {
        Collection::with_seed(vec![
            FileRecord::seed(FileId(1), "Document.pdf", 234_567, "application/pdf", t0()),
            FileRecord::seed(
                FileId(2),
                "Photo.jpg",
                1_456_789,
                "image/jpeg",
                t0() - Duration::days(1),
            ),
        ])
    }

    fn blob(name: &str, size: usize, mime: &str) -> FileBlob {
        FileBlob::new(name, mime, vec![0; size])
    }

    #[test]
    fn test_add_single_blob_to_seeded_collection() {
        let mut collection = seeded();
        let added = collection.add_batch(vec![blob("a.txt", 10, "")], t0()).unwrap();
        assert_eq!(added.len(), 1);
        let new_id = added[0].id;

        assert_eq!(collection.len(), 3);
        let first = &collection.records()[0];
        assert_eq!(first.id, new_id);
        assert_eq!(first.name, "a.txt");
        assert_eq!(first.size, 10);
        assert_eq!(first.mime, OCTET_STREAM);
        assert_eq!(first.created_at, t0());
    }

    #[test]
    fn test_batch_ids_are_distinct() {
        let mut collection = seeded();
        let blobs: Vec<FileBlob> = (0..500).map(|i| blob(&format!("f{i}"), i, "")).collect();
        collection.add_batch(blobs, t0()).unwrap();
        // same millisecond again
        collection.add_batch(vec![blob("late", 1, "")], t0()).unwrap();

        let ids: HashSet<FileId> = collection.iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), collection.len());
        assert_eq!(collection.len(), 503);
    }

    #[test]
    fn test_batch_keeps_given_order_in_front() {
        let mut collection = seeded();
        collection
            .add_batch(vec![blob("x", 1, ""), blob("y", 1, "")], t0())
            .unwrap();
        let names: Vec<&str> = collection.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["x", "y", "Document.pdf", "Photo.jpg"]);
    }

    #[test]
    fn test_empty_batch_is_noop() {
        let mut collection = seeded();
        assert!(matches!(
            collection.add_batch(Vec::new(), t0()),
            Err(FileOpError::EmptyBatch)
        ));
        assert_eq!(collection.len(), 2);

        // no id churn: the next id is still the clock value
        let added = collection.add_batch(vec![blob("a", 1, "")], t0()).unwrap();
        assert_eq!(added[0].id.get(), t0().timestamp_millis() as u64);
    }

    #[test]
    fn test_remove_one() {
        let mut collection = seeded();
        let removed = collection.remove_one(FileId(1));
        assert_eq!(removed.map(|r| r.name), Some("Document.pdf".to_string()));
        assert!(collection.remove_one(FileId(1)).is_none());
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn test_remove_many() {
        let mut collection = seeded();
        collection.add_batch(vec![blob("a", 1, "")], t0()).unwrap();

        assert_eq!(collection.remove_many(&HashSet::new()), 0);
        assert_eq!(collection.len(), 3);

        let ids: HashSet<FileId> = [FileId(1), FileId(2), FileId(77)].into_iter().collect();
        assert_eq!(collection.remove_many(&ids), 2);
        assert_eq!(collection.len(), 1);
        assert!(!collection.contains(FileId(1)));
    }

    #[test]
    fn test_distinct_types_first_seen_order() {
        let mut collection = seeded();
        collection.add_batch(
            vec![blob("b.png", 1, "image/png"), blob("c.pdf", 1, "application/pdf")],
            t0(),
        )
        .unwrap();
        assert_eq!(
            collection.distinct_types(),
            vec!["image/png", "application/pdf", "image/jpeg"]
        );
    }

    #[test]
    fn test_seed_duplicate_ids_dropped() {
        let collection = Collection::with_seed(vec![
            FileRecord::seed(FileId(1), "a", 1, "", t0()),
            FileRecord::seed(FileId(1), "b", 1, "", t0()),
        ]);
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.records()[0].name, "a");
    }

    #[test]
    fn test_seed_ids_out_of_range_dropped() {
        let mut collection = Collection::with_seed(vec![
            FileRecord::seed(FileId(u64::MAX), "huge", 1, "", t0()),
            FileRecord::seed(FileId(3), "small", 1, "", t0()),
        ]);
        assert_eq!(collection.len(), 1);

        let added = collection.add_batch(vec![blob("next", 1, "")], t0()).unwrap();
        assert_eq!(added[0].id.get(), t0().timestamp_millis() as u64);
    }

    #[test]
    fn test_exhausted_ids_reject_batch() {
        let mut collection = Collection::with_seed(vec![FileRecord::seed(
            FileId(MAX_ID),
            "last",
            1,
            "",
            t0(),
        )]);
        assert!(matches!(
            collection.add_batch(vec![blob("a", 1, "")], t0()),
            Err(FileOpError::IdsExhausted)
        ));
        assert_eq!(collection.len(), 1);
    }
}
