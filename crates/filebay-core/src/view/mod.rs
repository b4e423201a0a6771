//! View projection
//!
//! A pure function from the collection plus the user's filter/sort settings
//! to the ordered list of records on screen. Card and table presentations
//! both render the same projection.

mod stats;

pub use stats::ViewStats;

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::record::FileRecord;
use crate::types::{SortDirection, SortKey};

/// Filter and sort settings that define a view
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewQuery {
    /// Free-text search, matched case-insensitively against names
    pub search: String,
    /// Exact MIME type to keep, or `None` for all types
    pub type_filter: Option<String>,
    pub sort_by: SortKey,
    pub sort_dir: SortDirection,
}

impl ViewQuery {
    /// Check whether a record passes the search and type filters
    pub fn matches(&self, record: &FileRecord) -> bool {
        let needle = self.search.trim().to_lowercase();
        matches_search(record, &needle) && self.matches_type(record)
    }

    fn matches_type(&self, record: &FileRecord) -> bool {
        match self.type_filter.as_deref() {
            None | Some("") => true,
            Some(mime) => record.mime == mime,
        }
    }

    /// Project records into the visible, ordered view.
    ///
    /// Filtering keeps the input order; the sort is stable, so records with
    /// equal keys keep their relative order in both directions.
    pub fn project<'a, I>(&self, records: I) -> Vec<&'a FileRecord>
    where
        I: IntoIterator<Item = &'a FileRecord>,
    {
        let needle = self.search.trim().to_lowercase();
        let mut view: Vec<&FileRecord> = records
            .into_iter()
            .filter(|r| matches_search(r, &needle) && self.matches_type(r))
            .collect();
        view.sort_by(|a, b| self.sort_dir.apply(compare_records(a, b, self.sort_by)));
        view
    }
}

fn matches_search(record: &FileRecord, needle: &str) -> bool {
    needle.is_empty() || record.name.to_lowercase().contains(needle)
}

/// Ascending comparison of two records by a sort key
///
/// Names compare as raw strings (no case folding), sizes numerically and
/// timestamps by instant.
pub fn compare_records(a: &FileRecord, b: &FileRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => a.name.cmp(&b.name),
        SortKey::Size => a.size.cmp(&b.size),
        SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
    }
}
