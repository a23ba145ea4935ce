//! Filesystem operations
//!
//! Handles file and directory operations.

use std::path::{Path, PathBuf};

use crate::error::FilesystemError;

/// Read content from a file
pub fn read_file(path: &Path) -> Result<String, FilesystemError> {
    std::fs::read_to_string(path).map_err(|e| FilesystemError::ReadFile {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

/// Resolve a path to its absolute, symlink-free form
pub fn canonicalize(path: &Path) -> Result<PathBuf, FilesystemError> {
    std::fs::canonicalize(path).map_err(|e| FilesystemError::Canonicalize {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}
