//! File records and the raw blobs they are created from
//!
//! A [`FileRecord`] is immutable once built. "Editing" a record means
//! removing it and ingesting a new one.

mod format;
mod mime;

pub use format::{format_date, human_size};
pub use mime::{is_image, is_pdf, normalize_mime, FileKind};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::types::FileId;

/// Name given to blobs that arrive without one
pub const UNNAMED_FILE: &str = "unnamed";

/// Raw file content handed over by the picker or a drop
#[derive(Clone, PartialEq, Eq)]
pub struct FileBlob {
    /// File name as reported by the platform
    pub name: String,
    /// Declared MIME type, possibly empty
    pub mime: String,
    /// File content
    pub data: Vec<u8>,
}

impl FileBlob {
    /// Create a new blob
    pub fn new(name: impl Into<String>, mime: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            data,
        }
    }

    /// Size of the content in bytes
    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }
}

impl std::fmt::Debug for FileBlob {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileBlob")
            .field("name", &self.name)
            .field("mime", &self.mime)
            .field("size", &self.data.len())
            .finish()
    }
}

/// Binary content owned by exactly one record.
///
/// Not `Clone`: dropping the record (or the collection entry) releases it.
pub struct Payload(Box<[u8]>);

impl Payload {
    /// Borrow the content
    pub fn bytes(&self) -> &[u8] {
        &self.0
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check whether the payload holds no bytes
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for Payload {
    fn from(data: Vec<u8>) -> Self {
        Self(data.into_boxed_slice())
    }
}

impl std::fmt::Debug for Payload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Payload({} bytes)", self.0.len())
    }
}

/// One tracked file
#[derive(Debug, Serialize)]
pub struct FileRecord {
    pub id: FileId,
    /// Display name, never empty, not necessarily unique
    pub name: String,
    /// Size in bytes
    pub size: u64,
    /// Ingestion instant
    pub created_at: DateTime<Utc>,
    /// Normalized MIME type, never empty
    #[serde(rename = "type")]
    pub mime: String,
    /// Content for records ingested this session; `None` for seed entries
    #[serde(skip)]
    pub payload: Option<Payload>,
}

impl FileRecord {
    /// Build a record from an ingested blob, taking ownership of its content
    pub fn from_blob(id: FileId, blob: FileBlob, created_at: DateTime<Utc>) -> Self {
        let name = if blob.name.trim().is_empty() {
            UNNAMED_FILE.to_string()
        } else {
            blob.name
        };
        Self {
            id,
            name,
            size: blob.data.len() as u64,
            created_at,
            mime: normalize_mime(&blob.mime),
            payload: Some(Payload::from(blob.data)),
        }
    }

    /// Build a metadata-only record (no payload), e.g. a demo entry
    pub fn seed(
        id: FileId,
        name: impl Into<String>,
        size: u64,
        mime: &str,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            size,
            created_at,
            mime: normalize_mime(mime),
            payload: None,
        }
    }

    /// Category of this record
    pub fn kind(&self) -> FileKind {
        FileKind::from_mime(&self.mime)
    }

    pub fn is_image(&self) -> bool {
        is_image(&self.mime)
    }

    pub fn is_pdf(&self) -> bool {
        is_pdf(&self.mime)
    }

    /// Human readable size (e.g. `1.4 MB`)
    pub fn display_size(&self) -> String {
        human_size(self.size as f64)
    }

    /// Local creation date (e.g. `15.03.2024`)
    pub fn display_date(&self) -> String {
        format_date(&self.created_at)
    }
}
