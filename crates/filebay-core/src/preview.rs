//! Preview target and its derived display handle
//!
//! Opening a preview on an image that has a payload mints a display handle
//! (think object URL) from a [`HandleTable`]. The handle must be revoked
//! when the preview closes, moves to another record, or its record is
//! deleted, otherwise the table keeps the entry alive.

use std::collections::HashMap;

use crate::record::FileRecord;
use crate::types::FileId;

/// Opaque reference to a minted display resource
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DisplayHandle(String);

impl DisplayHandle {
    /// URL-like string the presentation layer can render from
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Registry of live display handles
#[derive(Debug, Default)]
pub struct HandleTable {
    next: u64,
    live: HashMap<DisplayHandle, FileId>,
}

impl HandleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint a handle for a record's content
    pub fn mint(&mut self, id: FileId) -> DisplayHandle {
        self.next += 1;
        let handle = DisplayHandle(format!("blob:filebay/{}", self.next));
        self.live.insert(handle.clone(), id);
        log::trace!("HandleTable: minted {} for {}", handle.0, id);
        handle
    }

    /// Release a handle; returns `false` if it was already revoked
    pub fn revoke(&mut self, handle: &DisplayHandle) -> bool {
        let removed = self.live.remove(handle).is_some();
        if removed {
            log::trace!("HandleTable: revoked {}", handle.0);
        }
        removed
    }

    /// Number of handles not yet revoked
    pub fn live_count(&self) -> usize {
        self.live.len()
    }
}

/// Which record (at most one) is open for preview
#[derive(Debug, Default)]
pub struct PreviewState {
    target: Option<FileId>,
    handle: Option<DisplayHandle>,
}

impl PreviewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn target(&self) -> Option<FileId> {
        self.target
    }

    /// Display handle for image previews, if one was minted
    pub fn handle(&self) -> Option<&DisplayHandle> {
        self.handle.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.target.is_some()
    }

    /// Point the preview at `record`, releasing any previous handle.
    ///
    /// A new handle is only minted for images that carry a payload; seed
    /// records and other types preview their metadata only.
    pub fn open(&mut self, record: &FileRecord, handles: &mut HandleTable) {
        self.close(handles);
        self.target = Some(record.id);
        if record.is_image() && record.payload.is_some() {
            self.handle = Some(handles.mint(record.id));
        }
    }

    /// Close the preview and release its handle
    pub fn close(&mut self, handles: &mut HandleTable) {
        if let Some(handle) = self.handle.take() {
            handles.revoke(&handle);
        }
        self.target = None;
    }

    /// Close the preview if it targets `id`; returns `true` if it did
    pub fn close_if_target(&mut self, id: FileId, handles: &mut HandleTable) -> bool {
        if self.target == Some(id) {
            self.close(handles);
            true
        } else {
            false
        }
    }
}
