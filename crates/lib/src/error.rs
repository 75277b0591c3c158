//! Error types returned by the build orchestration.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::platform::Os;
use crate::toolchain::ToolchainError;

/// Operational failures of a build run.
///
/// Every variant aborts the run; none of them are recovered locally.
#[derive(Debug, Error)]
pub enum BuildError {
  #[error("unsupported platform: {0}")]
  UnsupportedPlatform(String),

  #[error("no target platform selected")]
  NoPlatformSelected,

  #[error("platform already selected as {current}, cannot switch to {requested}")]
  PlatformAlreadySelected { current: Os, requested: Os },

  #[error("missing build artifact: {}", path.display())]
  MissingArtifact { path: PathBuf },

  #[error(transparent)]
  Toolchain(#[from] ToolchainError),

  #[error("cannot locate project root: {0}")]
  EnvironmentInit(String),

  #[error("failed to {action} {}: {source}", path.display())]
  Io {
    action: &'static str,
    path: PathBuf,
    #[source]
    source: io::Error,
  },
}

pub type Result<T, E = BuildError> = std::result::Result<T, E>;
