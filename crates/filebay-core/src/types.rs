//! Common types for filebay
//!
//! Identifiers and the small enums shared by the collection engine,
//! the view projection and the presentation layer.

use serde::{Deserialize, Serialize};

/// MIME type assigned to records whose blob declared no (or a blank) type
pub const OCTET_STREAM: &str = "application/octet-stream";

/// MIME type counted by the PDF statistics bucket
pub const PDF_MIME: &str = "application/pdf";

/// Unique identifier for a record in the collection.
///
/// Ids are millisecond timestamps plus a per-batch offset, so they also
/// roughly encode when a record was ingested. Seed records use small ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileId(pub u64);

impl FileId {
    /// Get the raw integer value
    pub fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for FileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Key the view is sorted by
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Raw lexicographic comparison of the display name
    #[default]
    Name,
    /// Size in bytes
    Size,
    /// Ingestion instant
    CreatedAt,
}

impl SortKey {
    /// Get all sort keys in display order
    pub const ALL: [SortKey; 3] = [SortKey::Name, SortKey::Size, SortKey::CreatedAt];

    /// Get the display label for this key
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Size => "Size",
            Self::CreatedAt => "Date",
        }
    }

    /// Parse a command-line style key name (`name`, `size`, `created`)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Some(Self::Name),
            "size" => Some(Self::Size),
            "created" | "created_at" | "createdat" | "date" => Some(Self::CreatedAt),
            _ => None,
        }
    }
}

/// Sort direction of the view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Apply this direction to an ascending comparison result
    pub fn apply(self, ordering: std::cmp::Ordering) -> std::cmp::Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// How the presentation layer lays the view out.
///
/// Never affects filtering or sorting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    Cards,
    Table,
}
