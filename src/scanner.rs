//! Candidate file enumeration.
//!
//! Recursively walks the scan root and yields every file whose name ends with
//! one of the configured suffixes. Entries are sorted by name within each
//! directory so report output is stable between runs. Directories that cannot
//! be listed, including a root that does not exist or is not a directory,
//! contribute nothing. Dangling symlinks are still yielded so the failure to
//! open them gets reported.

use crate::config::Config;
use std::path::PathBuf;
use walkdir::{DirEntry, WalkDir};

/// Lazily yields candidate files under `config.root`.
pub fn candidate_files(config: &Config) -> impl Iterator<Item = PathBuf> + '_ {
    WalkDir::new(&config.root)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(is_file_like)
        .filter(|entry| config.is_candidate_name(&entry.file_name().to_string_lossy()))
        .map(DirEntry::into_path)
}

/// Collects all candidate files under `config.root`.
pub fn collect_candidate_files(config: &Config) -> Vec<PathBuf> {
    candidate_files(config).collect()
}

/// Everything except directories and symlinks that resolve to one. Symlinked
/// directories are never descended into.
fn is_file_like(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    if file_type.is_symlink() {
        return !entry.path().is_dir();
    }
    !file_type.is_dir()
}
