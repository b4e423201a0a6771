//! Inbound messages for the file manager
//!
//! Every command the presentation layer can issue, plus raw drag events.
//! Dispatched by [`crate::domain::FileManagerDomain::update`].

use filebay_core::{DragEvent, FileBlob, FileId, SortKey, ViewMode};

/// Messages that can be sent to the file manager
#[derive(Debug, Clone)]
pub enum Message {
    // Collection
    /// Ingest blobs from the file picker
    AddFiles(Vec<FileBlob>),
    /// Delete one record (after confirmation)
    Delete(FileId),
    /// Delete every selected record (after confirmation)
    DeleteSelected,
    /// Simulated download of a record
    Download(FileId),

    // Selection
    /// Tick or untick a record
    ToggleSelect(FileId),

    // View
    /// Search text changed
    SetSearch(String),
    /// Type filter changed (`None` or empty shows every type)
    SetTypeFilter(Option<String>),
    /// Sort key changed
    SetSortBy(SortKey),
    /// Flip ascending/descending
    ToggleSortDirection,
    /// Cards or table
    SetViewMode(ViewMode),

    // Preview
    /// Open the preview for a record
    OpenPreview(FileId),
    /// Close the preview
    ClosePreview,

    // Drag and drop
    /// Raw window-level drag event
    Drag(DragEvent),
    /// Click on the drop overlay
    CancelDrag,

    // Notices
    /// Notice dismissed or timed out
    DismissNotice(u64),
}
