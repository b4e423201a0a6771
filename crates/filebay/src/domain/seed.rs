//! Demo records shown on first start

use chrono::{DateTime, Duration, Utc};
use filebay_core::{FileId, FileRecord, PDF_MIME};

/// Two payload-less entries: a PDF created now and a JPEG from a day earlier
pub fn demo_records(now: DateTime<Utc>) -> Vec<FileRecord> {
    vec![
        FileRecord::seed(FileId(1), "Документ.pdf", 234_567, PDF_MIME, now),
        FileRecord::seed(
            FileId(2),
            "Фото.jpg",
            1_456_789,
            "image/jpeg",
            now - Duration::days(1),
        ),
    ]
}
