//! Project environment discovery.
//!
//! Locates the root of the source tree and inspects it once for optional
//! protocol plugins.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::consts::ROOT_ENV;
use crate::error::{BuildError, Result};

/// Relative path whose presence marks a project root.
const ROOT_MARKER: &str = "server/tp_core";

/// Optional sub-projects present in the source tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Features {
  pub with_rdp: bool,
  pub with_telnet: bool,
}

impl Features {
  pub fn detect(root: &Path) -> Self {
    let protocols = root.join("server").join("tp_core").join("protocol");
    Self {
      with_rdp: protocols.join("rdp").exists(),
      with_telnet: protocols.join("telnet").exists(),
    }
  }
}

#[derive(Debug, Clone)]
pub struct Env {
  pub root: PathBuf,
  pub features: Features,
}

impl Env {
  /// Resolve the project root and detect features.
  ///
  /// The root is taken from `explicit_root`, then `TPBUILD_ROOT`, then the nearest
  /// ancestor of the current directory that contains `server/tp_core`.
  pub fn init(explicit_root: Option<&Path>) -> Result<Self> {
    let root = match explicit_root {
      Some(path) => path.to_path_buf(),
      None => match std::env::var_os(ROOT_ENV) {
        Some(path) => PathBuf::from(path),
        None => {
          let cwd = std::env::current_dir()
            .map_err(|e| BuildError::EnvironmentInit(format!("cannot read current directory: {e}")))?;
          find_root(&cwd).ok_or_else(|| {
            BuildError::EnvironmentInit(format!(
              "no {ROOT_MARKER} directory above {} (set {ROOT_ENV} or pass --root)",
              cwd.display()
            ))
          })?
        }
      },
    };

    if !root.is_dir() {
      return Err(BuildError::EnvironmentInit(format!(
        "{} is not a directory",
        root.display()
      )));
    }
    let root = dunce::canonicalize(&root)
      .map_err(|e| BuildError::EnvironmentInit(format!("cannot canonicalize {}: {e}", root.display())))?;

    Ok(Self::with_root(root))
  }

  /// Build an environment for an already known root.
  pub fn with_root(root: PathBuf) -> Self {
    let features = Features::detect(&root);
    debug!(root = %root.display(), ?features, "environment ready");
    Self { root, features }
  }
}

fn find_root(start: &Path) -> Option<PathBuf> {
  start
    .ancestors()
    .find(|dir| dir.join(ROOT_MARKER).is_dir())
    .map(Path::to_path_buf)
}
