//! Decide which paths get scanned, and how their bytes become text.

pub mod encoding;

use crate::error::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// How many leading bytes are inspected for a NUL when sniffing binaries.
pub const BINARY_SNIFF_LEN: u64 = 1024;

/// True when the final path component starts with `.` and is not `.` or `..`.
pub fn is_hidden(path: &Path) -> bool {
    // Compare raw bytes so names that are not valid UTF-8 are still classified.
    match path.file_name().map(|n| n.as_encoded_bytes()) {
        Some(name) => name.first() == Some(&b'.') && name != b"." && name != b"..",
        // `Path::file_name` is None for paths ending in `..`
        None => false,
    }
}

/// False when a NUL byte appears in the first [`BINARY_SNIFF_LEN`] bytes.
pub fn is_text_file(path: &Path) -> Result<bool> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let mut head = Vec::with_capacity(BINARY_SNIFF_LEN as usize);
    file.take(BINARY_SNIFF_LEN)
        .read_to_end(&mut head)
        .map_err(|e| Error::io(path, e))?;

    Ok(!head.contains(&0))
}
