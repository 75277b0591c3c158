//! Filesystem helpers used around toolchain invocations.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{BuildError, Result};

/// Remove a file or a whole directory tree. Missing paths are ignored.
pub fn remove(path: &Path) -> Result<()> {
  let meta = match fs::symlink_metadata(path) {
    Ok(meta) => meta,
    Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
    Err(source) => {
      return Err(BuildError::Io {
        action: "inspect",
        path: path.to_path_buf(),
        source,
      });
    }
  };

  debug!(path = %path.display(), "removing");
  let removed = if meta.is_dir() {
    fs::remove_dir_all(path)
  } else {
    fs::remove_file(path)
  };
  removed.map_err(|source| BuildError::Io {
    action: "remove",
    path: path.to_path_buf(),
    source,
  })
}

pub fn makedirs(path: &Path) -> Result<()> {
  fs::create_dir_all(path).map_err(|source| BuildError::Io {
    action: "create directory",
    path: path.to_path_buf(),
    source,
  })
}

/// Fail with [`BuildError::MissingArtifact`] unless `path` exists.
pub fn ensure_file_exists(path: &Path) -> Result<()> {
  if path.exists() {
    Ok(())
  } else {
    Err(BuildError::MissingArtifact {
      path: path.to_path_buf(),
    })
  }
}
