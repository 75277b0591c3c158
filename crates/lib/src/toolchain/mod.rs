//! External build drivers.
//!
//! The builders talk to toolchains through the [`Toolchain`] trait so a run can be
//! driven by the real MSBuild/CMake executables or by a recording stand-in.

mod cmake;
mod msvc;

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;
use tracing::{debug, info};

use crate::consts::{CMAKE_ENV, DEFAULT_CMAKE, DEFAULT_MSBUILD, MSBUILD_ENV};
use crate::context::{Bits, Target};

pub use cmake::{cmake_build_args, cmake_configure_args};
pub use msvc::msbuild_args;

#[derive(Debug, Error)]
pub enum ToolchainError {
  #[error("failed to launch {}: {source}", program.display())]
  Spawn {
    program: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("{} {}: {command}", program.display(), describe_exit(*code))]
  Failed {
    program: PathBuf,
    command: String,
    code: Option<i32>,
  },

  #[error("failed to prepare {}: {source}", path.display())]
  WorkDir {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
}

fn describe_exit(code: Option<i32>) -> String {
  match code {
    Some(code) => format!("exited with code {code}"),
    None => "terminated by signal".to_string(),
  }
}

/// One project inside a Visual Studio solution.
#[derive(Debug, Clone, Copy)]
pub struct SolutionBuild<'a> {
  pub solution: &'a Path,
  pub project: &'a str,
  pub target: Target,
  pub bits: Bits,
}

pub trait Toolchain {
  /// Build a single project of a solution file. Blocks until the build finishes.
  fn solution_build(&mut self, build: &SolutionBuild<'_>) -> Result<(), ToolchainError>;

  /// Generate and build the CMake tree rooted one level above `work_dir`.
  fn cmake_build(&mut self, work_dir: &Path, target: Target) -> Result<(), ToolchainError>;
}

/// Runs the real tools found on `PATH` or named by environment variables.
#[derive(Debug, Clone)]
pub struct SystemToolchain {
  pub msbuild: PathBuf,
  pub cmake: PathBuf,
}

impl SystemToolchain {
  pub fn from_env() -> Self {
    let tool = |var: &str, default: &str| {
      std::env::var_os(var)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(default))
    };
    Self {
      msbuild: tool(MSBUILD_ENV, DEFAULT_MSBUILD),
      cmake: tool(CMAKE_ENV, DEFAULT_CMAKE),
    }
  }
}

impl Toolchain for SystemToolchain {
  fn solution_build(&mut self, build: &SolutionBuild<'_>) -> Result<(), ToolchainError> {
    run_tool(&self.msbuild, &msbuild_args(build), None)
  }

  fn cmake_build(&mut self, work_dir: &Path, target: Target) -> Result<(), ToolchainError> {
    std::fs::create_dir_all(work_dir).map_err(|source| ToolchainError::WorkDir {
      path: work_dir.to_path_buf(),
      source,
    })?;
    run_tool(&self.cmake, &cmake_configure_args(target), Some(work_dir))?;
    run_tool(&self.cmake, &cmake_build_args(target), Some(work_dir))
  }
}

/// Run `program` to completion with inherited stdio.
pub(crate) fn run_tool(program: &Path, args: &[OsString], cwd: Option<&Path>) -> Result<(), ToolchainError> {
  let command = std::iter::once(program.as_os_str())
    .chain(args.iter().map(OsString::as_os_str))
    .map(|s| s.to_string_lossy())
    .collect::<Vec<_>>()
    .join(" ");
  info!(cmd = %command, "running toolchain");
  let mut cmd = Command::new(program);
  cmd.args(args);
  if let Some(dir) = cwd {
    debug!(cwd = %dir.display(), "toolchain working directory");
    cmd.current_dir(dir);
  }

  let status = cmd
    .status()
    .map_err(|source| ToolchainError::Spawn {
      program: program.to_path_buf(),
      source,
    })?;

  if !status.success() {
    return Err(ToolchainError::Failed {
      program: program.to_path_buf(),
      command,
      code: status.code(),
    });
  }
  Ok(())
}
