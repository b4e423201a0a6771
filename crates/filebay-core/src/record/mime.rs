//! MIME type normalization and classification

use crate::types::{OCTET_STREAM, PDF_MIME};

/// Replace an empty or whitespace-only type with `application/octet-stream`.
///
/// Non-blank types are kept verbatim (no trimming, no case folding) so the
/// type filter matches exactly what the blob declared.
pub fn normalize_mime(mime: &str) -> String {
    if mime.trim().is_empty() {
        OCTET_STREAM.to_string()
    } else {
        mime.to_string()
    }
}

/// Check whether a type counts as an image
pub fn is_image(mime: &str) -> bool {
    mime.starts_with("image/")
}

/// Check whether a type is exactly `application/pdf`
pub fn is_pdf(mime: &str) -> bool {
    mime == PDF_MIME
}

/// Coarse file category used for icons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    /// No type at all
    Unknown,
    Image,
    Pdf,
    Video,
    Audio,
    Other,
}

impl FileKind {
    /// Classify a MIME type string
    pub fn from_mime(mime: &str) -> Self {
        if mime.is_empty() {
            Self::Unknown
        } else if is_image(mime) {
            Self::Image
        } else if is_pdf(mime) {
            Self::Pdf
        } else if mime.starts_with("video/") {
            Self::Video
        } else if mime.starts_with("audio/") {
            Self::Audio
        } else {
            Self::Other
        }
    }

    /// Glyph shown next to the file name
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Unknown => "📁",
            Self::Image => "🖼️",
            Self::Pdf => "📄",
            Self::Video => "🎞️",
            Self::Audio => "🎧",
            Self::Other => "📦",
        }
    }
}
