//! Test utilities for tpbuild-lib.
//!
//! Provides a throwaway project tree and a toolchain that records invocations
//! instead of spawning MSBuild or CMake.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::context::{Bits, Target};
use crate::env::Env;
use crate::toolchain::{SolutionBuild, Toolchain, ToolchainError};

/// Create a source tree with the mandatory protocol directory and, optionally, rdp.
pub fn project_root(with_rdp: bool) -> (TempDir, Env) {
  let temp = TempDir::new().unwrap();
  let protocols = temp.path().join("server/tp_core/protocol");
  std::fs::create_dir_all(protocols.join("ssh")).unwrap();
  if with_rdp {
    std::fs::create_dir_all(protocols.join("rdp")).unwrap();
  }
  let env = Env::with_root(temp.path().to_path_buf());
  (temp, env)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
  Solution {
    solution: PathBuf,
    project: String,
    target: Target,
    bits: Bits,
  },
  Cmake {
    work_dir: PathBuf,
    target: Target,
  },
}

/// Records every call and writes `fresh` to the artifacts it was told to produce.
///
/// Solution builds produce the artifact registered for their project; a CMake build
/// produces all registered artifacts.
#[derive(Debug, Default)]
pub struct FakeToolchain {
  pub calls: Vec<Call>,
  outputs: HashMap<String, PathBuf>,
  failing: HashSet<String>,
}

impl FakeToolchain {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn produces(mut self, project: &str, artifact: PathBuf) -> Self {
    self.outputs.insert(project.to_string(), artifact);
    self
  }

  pub fn failing(mut self, project: &str) -> Self {
    self.failing.insert(project.to_string());
    self
  }

  pub fn solution_projects(&self) -> Vec<&str> {
    self
      .calls
      .iter()
      .filter_map(|c| match c {
        Call::Solution { project, .. } => Some(project.as_str()),
        Call::Cmake { .. } => None,
      })
      .collect()
  }

  fn write(path: &Path) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, "fresh").unwrap();
  }
}

impl Toolchain for FakeToolchain {
  fn solution_build(&mut self, build: &SolutionBuild<'_>) -> Result<(), ToolchainError> {
    self.calls.push(Call::Solution {
      solution: build.solution.to_path_buf(),
      project: build.project.to_string(),
      target: build.target,
      bits: build.bits,
    });
    if self.failing.contains(build.project) {
      return Err(ToolchainError::Failed {
        program: PathBuf::from("msbuild"),
        command: format!("msbuild /t:{}", build.project),
        code: Some(1),
      });
    }
    if let Some(artifact) = self.outputs.get(build.project) {
      Self::write(artifact);
    }
    Ok(())
  }

  fn cmake_build(&mut self, work_dir: &Path, target: Target) -> Result<(), ToolchainError> {
    self.calls.push(Call::Cmake {
      work_dir: work_dir.to_path_buf(),
      target,
    });
    if !self.failing.is_empty() {
      return Err(ToolchainError::Failed {
        program: PathBuf::from("cmake"),
        command: "cmake --build .".to_string(),
        code: Some(2),
      });
    }
    for artifact in self.outputs.values() {
      Self::write(artifact);
    }
    Ok(())
  }
}
