// src/sources/mod.rs
pub mod delimited;
pub mod document;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Returns the sorted list of files in `dir` whose extension matches
/// `extension` (case-insensitive, without the dot).
pub fn find_source_files(dir: &Path, extension: &str) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let matches = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case(extension))
            .unwrap_or(false);
        if matches {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
