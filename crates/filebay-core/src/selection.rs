//! Selection tracker
//!
//! The set of ids the user has ticked. The tracker performs no existence
//! check: toggling an unknown id selects it. Keeping the set free of stale
//! ids is the caller's job, via [`SelectionSet::remove`] or
//! [`SelectionSet::clear`] after deletions.

use std::collections::HashSet;

use crate::types::FileId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    selected: HashSet<FileId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle selection of a record.
    ///
    /// Returns `true` if the id is selected afterwards.
    pub fn toggle(&mut self, id: FileId) -> bool {
        if self.selected.remove(&id) {
            false
        } else {
            self.selected.insert(id);
            true
        }
    }

    /// Drop a single id (no-op if it was not selected)
    pub fn remove(&mut self, id: FileId) -> bool {
        self.selected.remove(&id)
    }

    /// Clear all selections
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Check if a record is selected
    pub fn is_selected(&self, id: FileId) -> bool {
        self.selected.contains(&id)
    }

    /// Check if anything is selected
    pub fn has_selection(&self) -> bool {
        !self.selected.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Get all selected ids
    pub fn ids(&self) -> &HashSet<FileId> {
        &self.selected
    }

    /// Get selected ids in ascending order (stable for display and logs)
    pub fn sorted_ids(&self) -> Vec<FileId> {
        let mut ids: Vec<FileId> = self.selected.iter().copied().collect();
        ids.sort_unstable();
        ids
    }
}
