//! Aggregate statistics over a projected view

use serde::Serialize;

use crate::record::{human_size, FileRecord};

/// Footer statistics computed from the filtered, sorted view.
///
/// `largest`, `newest` and `oldest` are folded left with strict comparisons,
/// so among equal candidates the first one in view order wins.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct ViewStats<'a> {
    pub total_files: usize,
    pub total_size: u64,
    /// `total_size / total_files`, or 0 for an empty view
    pub average_size: f64,
    pub image_count: usize,
    pub pdf_count: usize,
    /// Everything that is neither an image nor a PDF
    pub other_count: usize,
    pub largest: Option<&'a FileRecord>,
    pub newest: Option<&'a FileRecord>,
    pub oldest: Option<&'a FileRecord>,
}

impl<'a> ViewStats<'a> {
    /// Compute statistics for a view
    pub fn from_view(view: &[&'a FileRecord]) -> Self {
        let total_files = view.len();
        let total_size: u64 = view.iter().map(|r| r.size).sum();
        let average_size = if total_files == 0 {
            0.0
        } else {
            total_size as f64 / total_files as f64
        };
        let image_count = view.iter().filter(|r| r.is_image()).count();
        let pdf_count = view.iter().filter(|r| r.is_pdf()).count();

        Self {
            total_files,
            total_size,
            average_size,
            image_count,
            pdf_count,
            other_count: total_files - image_count - pdf_count,
            largest: pick_first(view, |candidate, best| candidate.size > best.size),
            newest: pick_first(view, |candidate, best| candidate.created_at > best.created_at),
            oldest: pick_first(view, |candidate, best| candidate.created_at < best.created_at),
        }
    }

    /// Human readable total size
    pub fn display_total_size(&self) -> String {
        human_size(self.total_size as f64)
    }

    /// Human readable average size
    pub fn display_average_size(&self) -> String {
        human_size(self.average_size)
    }
}

/// Keep the current best unless `beats(candidate, best)` holds strictly
fn pick_first<'a>(
    view: &[&'a FileRecord],
    beats: impl Fn(&FileRecord, &FileRecord) -> bool,
) -> Option<&'a FileRecord> {
    let (first, rest) = view.split_first()?;
    Some(rest.iter().fold(*first, |best, candidate| {
        if beats(*candidate, best) {
            *candidate
        } else {
            best
        }
    }))
}
