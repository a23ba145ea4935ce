//! Build order document persistence
//!
//! Writes are atomic: the YAML is written to a temporary file next to the
//! target and renamed over it, so a failed write never leaves a partial
//! document behind.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::core::model::BuildOrder;
use crate::error::BuildOrderError;

/// Serialize a build order to its YAML document form
pub fn to_yaml(order: &BuildOrder) -> Result<String, BuildOrderError> {
    serde_yaml::to_string(order).map_err(|source| BuildOrderError::SerializationFailure { source })
}

/// Write a build order to `path`, creating missing parent directories
pub fn write_build_order(order: &BuildOrder, path: &Path) -> Result<(), BuildOrderError> {
    let content = to_yaml(order)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let write_failure = |target: &Path, source: io::Error| BuildOrderError::WriteFailure {
        path: target.to_path_buf(),
        source,
    };

    fs::create_dir_all(dir).map_err(|e| write_failure(dir, e))?;

    let mut builder = tempfile::Builder::new();
    builder.prefix(".buildorder").suffix(".tmp");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o644));
    }

    // Dropping the temporary file on any error path removes it
    let mut temp = builder.tempfile_in(dir).map_err(|e| write_failure(path, e))?;
    temp.write_all(content.as_bytes())
        .and_then(|()| temp.as_file().sync_all())
        .map_err(|e| write_failure(path, e))?;
    temp.persist(path)
        .map_err(|e| write_failure(path, e.error))?;

    tracing::info!("Wrote build order to: {}", path.display());
    Ok(())
}

/// Read a build order document written by [`write_build_order`]
pub fn read_build_order(path: &Path) -> Result<BuildOrder, BuildOrderError> {
    let content = fs::read_to_string(path).map_err(|source| BuildOrderError::ReadFailure {
        path: path.to_path_buf(),
        source,
    })?;

    serde_yaml::from_str(&content).map_err(|source| BuildOrderError::ParseFailure {
        path: PathBuf::from(path),
        source,
    })
}
