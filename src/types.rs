use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The content of a single walked file.
#[derive(Debug, Serialize, Deserialize)]
pub enum FileContent {
    /// The file's full content, as the exact bytes read from disk.
    ///
    /// Text files are carried as raw bytes so the output document reproduces
    /// them byte for byte, with no encoding conversion.
    Text(Vec<u8>),
    /// The file was classified as binary; its content is omitted.
    Binary,
}

/// One non-excluded file encountered during the walk.
#[derive(Debug, Serialize, Deserialize)]
pub struct FileEntry {
    /// The file's path relative to the walk root, as used for display
    /// and exclusion matching.
    pub rel_path: PathBuf,
    /// The file's content, or a binary marker.
    pub content: FileContent,
}

/// The complete result of walking a directory tree.
#[derive(Debug, Serialize, Deserialize)]
pub struct Snapshot {
    /// A visual tree representation of the directory structure.
    ///
    /// Lines appear in filesystem listing order; the last surviving entry of
    /// each directory carries the corner glyph, earlier siblings the tee.
    pub tree: String,
    /// All included files, in the order they were visited.
    pub files: Vec<FileEntry>,
}

impl FileEntry {
    /// Whether this entry was classified as binary.
    pub fn is_binary(&self) -> bool {
        matches!(self.content, FileContent::Binary)
    }
}
