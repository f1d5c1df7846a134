//! Exclusion filtering for walked paths.

use std::path::Path;

/// Decides whether `path` (a path relative to the walk root) is excluded.
///
/// A path is excluded when its final segment exactly equals an exclusion
/// entry, or when the entry occurs anywhere as a substring of the relative
/// path string. The substring rule is deliberately broad: excluding `log`
/// also excludes `catalog.txt`. Empty entries are ignored.
pub(crate) fn should_exclude(path: &Path, exclude: &[String]) -> bool {
    let path_str = path.to_string_lossy();
    let base = path.file_name().map(|n| n.to_string_lossy());
    for entry in exclude {
        if entry.is_empty() {
            continue;
        }
        if base.as_deref() == Some(entry.as_str()) {
            return true;
        }
        if path_str.contains(entry.as_str()) {
            return true;
        }
    }
    false
}
