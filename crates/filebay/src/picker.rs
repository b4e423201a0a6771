//! Filesystem file picker
//!
//! Turns paths chosen by the user into [`FileBlob`]s, the same input the
//! drag-and-drop path produces.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use filebay_core::FileBlob;

/// Guess a MIME type from the file name's extension.
///
/// Unknown extensions yield an empty string, which ingestion normalizes to
/// `application/octet-stream`.
pub fn guess_mime(filename: &str) -> &'static str {
    let Some((_, ext)) = filename.rsplit_once('.') else {
        return "";
    };
    match ext.to_lowercase().as_str() {
        "txt" => "text/plain",
        "md" | "markdown" => "text/markdown",
        "csv" => "text/csv",
        "json" => "application/json",
        "xml" => "application/xml",
        "html" | "htm" => "text/html",
        "pdf" => "application/pdf",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "ogg" => "audio/ogg",
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        "mov" => "video/quicktime",
        "zip" => "application/zip",
        "tar" => "application/x-tar",
        "gz" => "application/gzip",
        _ => "",
    }
}

/// Read one file into a blob
pub fn read_blob(path: &Path, max_bytes: u64) -> Result<FileBlob> {
    let metadata =
        std::fs::metadata(path).with_context(|| format!("Failed to stat {:?}", path))?;
    if !metadata.is_file() {
        bail!("{:?} is not a regular file", path);
    }
    if metadata.len() > max_bytes {
        bail!(
            "{:?} is {} bytes, above the {} byte limit",
            path,
            metadata.len(),
            max_bytes
        );
    }

    let data = std::fs::read(path).with_context(|| format!("Failed to read {:?}", path))?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mime = guess_mime(&name);
    Ok(FileBlob::new(name, mime, data))
}

/// Read every path that can be read, skipping (and logging) the rest
pub fn pick_files(paths: &[PathBuf], max_bytes: u64) -> Vec<FileBlob> {
    paths
        .iter()
        .filter_map(|path| match read_blob(path, max_bytes) {
            Ok(blob) => Some(blob),
            Err(e) => {
                log::warn!("pick_files: skipping: {:#}", e);
                None
            }
        })
        .collect()
}
