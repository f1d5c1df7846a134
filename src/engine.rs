use crate::detect::is_binary;
use crate::error::RepocatError;
use crate::filter::should_exclude;
use crate::options::RepocatOptions;
use crate::types::{FileContent, FileEntry, Snapshot};
use std::fs;
use std::path::Path;
#[cfg(feature = "logging")]
use tracing;

/// Indent token appended for each directory level below the root.
const INDENT_STEP: &str = "│   ";
const GLYPH_LAST: &str = "└── ";
const GLYPH_MID: &str = "├── ";

/// Walks the tree rooted at `options.root` and returns the rendered structure
/// together with the content of every non-excluded file.
///
/// The walk is depth-first and fully synchronous. Entries are visited in
/// filesystem listing order. Any directory listing or file read error aborts
/// the whole walk.
pub fn repocat(options: RepocatOptions) -> Result<Snapshot, RepocatError> {
    #[cfg(feature = "logging")]
    tracing::debug!("Starting walk at root: {}", options.root.display());
    let mut tree = String::new();
    let mut files = Vec::new();
    explore_directory(
        &options.root,
        "",
        true,
        Path::new(""),
        &options.exclude,
        &mut tree,
        &mut files,
    )?;
    Ok(Snapshot { tree, files })
}

/// Recursive renderer. The two sinks are owned by [`repocat`] only; each call
/// appends its directory line, its children's lines, and its files' entries.
fn explore_directory(
    dir_path: &Path,
    indent: &str,
    is_root: bool,
    rel_path: &Path,
    exclude: &[String],
    tree: &mut String,
    files: &mut Vec<FileEntry>,
) -> Result<(), RepocatError> {
    let entries = fs::read_dir(dir_path)
        .map_err(|e| RepocatError::io(dir_path, e))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| RepocatError::io(dir_path, e))?;

    let mut child_indent = indent.to_string();
    if !is_root {
        let name = dir_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| dir_path.display().to_string());
        tree.push_str(indent);
        tree.push_str(&name);
        tree.push('\n');
        child_indent.push_str(INDENT_STEP);
    }

    // Exclusion must happen before last-entry detection, so an excluded
    // trailing entry does not mis-mark the new last visible entry.
    let survivors: Vec<fs::DirEntry> = entries
        .into_iter()
        .filter(|entry| !should_exclude(&rel_path.join(entry.file_name()), exclude))
        .collect();

    for (i, entry) in survivors.iter().enumerate() {
        let path = entry.path();
        let entry_rel = rel_path.join(entry.file_name());
        let is_last = i == survivors.len() - 1;
        let file_type = entry.file_type().map_err(|e| RepocatError::io(&path, e))?;
        if file_type.is_dir() {
            explore_directory(&path, &child_indent, false, &entry_rel, exclude, tree, files)?;
        } else {
            tree.push_str(&child_indent);
            tree.push_str(if is_last { GLYPH_LAST } else { GLYPH_MID });
            tree.push_str(&entry.file_name().to_string_lossy());
            tree.push('\n');
            files.push(FileEntry {
                content: read_entry(&path)?,
                rel_path: entry_rel,
            });
        }
    }
    Ok(())
}

fn read_entry(path: &Path) -> Result<FileContent, RepocatError> {
    if is_binary(path) {
        #[cfg(feature = "logging")]
        tracing::debug!("Binary file detected: {}", path.display());
        return Ok(FileContent::Binary);
    }
    let bytes = fs::read(path).map_err(|e| RepocatError::io(path, e))?;
    Ok(FileContent::Text(bytes))
}
