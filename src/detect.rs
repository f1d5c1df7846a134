//! Binary detection by sniffing a file's leading bytes.

use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Number of leading bytes sampled for classification.
const SNIFF_LEN: u64 = 512;

/// Classifies the file at `path` as binary or text from its first 512 bytes.
///
/// Fails open: any open or read error yields `false`, so the caller's full
/// read surfaces the real error. The handle is released on every exit path.
pub(crate) fn is_binary(path: &Path) -> bool {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(_) => return false,
    };
    let mut prefix = Vec::with_capacity(SNIFF_LEN as usize);
    if file.take(SNIFF_LEN).read_to_end(&mut prefix).is_err() {
        return false;
    }
    content_inspector::inspect(&prefix).is_binary()
}
