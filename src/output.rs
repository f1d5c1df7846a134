//! Document assembly for walk results.
//!
//! Renders a [`Snapshot`] into the flat output document (tree, blank line,
//! then one content block per file) and writes it, guarded by a non-clobber
//! check on the output path.

use crate::error::RepocatError;
use crate::types::{FileContent, FileEntry, Snapshot};
use std::fs;
use std::path::Path;

/// Marker emitted in place of a binary file's content.
pub const BINARY_MARKER: &str = "(Binary file)\n";

/// Errors if `path` already exists.
///
/// Pre-flight check only; the later write does not re-check, and the race
/// between check and write is acceptable for this tool.
pub fn ensure_absent(path: impl AsRef<Path>) -> Result<(), RepocatError> {
    let path = path.as_ref();
    if path.exists() {
        return Err(RepocatError::OutputExists(path.to_path_buf()));
    }
    Ok(())
}

/// Renders the snapshot into the final document.
///
/// Layout: tree lines, one blank-line separator, then each file's block. A
/// block is a `// <rel-path>` header followed by the file's content and a
/// trailing newline, or by the binary marker. The document is assembled as
/// bytes so text content passes through byte for byte, with no encoding
/// conversion.
pub fn render_document(snapshot: &Snapshot) -> Vec<u8> {
    let mut out = Vec::with_capacity(snapshot.tree.len() + 1024);
    out.extend_from_slice(snapshot.tree.as_bytes());
    out.push(b'\n');
    for file in &snapshot.files {
        render_file_block(file, &mut out);
    }
    out
}

/// Renders the document and writes it to `path`.
pub fn write_document(path: impl AsRef<Path>, snapshot: &Snapshot) -> Result<(), RepocatError> {
    let content = render_document(snapshot);
    fs::write(&path, content).map_err(|e| RepocatError::io(path.as_ref(), e))?;
    Ok(())
}

fn render_file_block(file: &FileEntry, out: &mut Vec<u8>) {
    out.extend_from_slice(b"\n// ");
    out.extend_from_slice(file.rel_path.to_string_lossy().as_bytes());
    out.push(b'\n');
    match &file.content {
        FileContent::Text(bytes) => {
            out.extend_from_slice(bytes);
            out.push(b'\n');
        }
        FileContent::Binary => out.extend_from_slice(BINARY_MARKER.as_bytes()),
    }
}
