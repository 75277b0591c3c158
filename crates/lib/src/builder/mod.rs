//! Platform builders.
//!
//! A [`Builder`] owns the finished [`BuildContext`] and the project [`Env`] and
//! knows which artifacts a full server build must produce on its platform.
//! Windows builds each sub-project through its own solution; Linux and macOS run a
//! single CMake build that covers every sub-project.

mod unix;
mod windows;

use std::path::PathBuf;

use serde::Serialize;
use tracing::debug;

use crate::context::{Bits, BuildContext, Target};
use crate::env::{Env, Features};
use crate::error::{BuildError, Result};
use crate::platform::Os;
use crate::toolchain::Toolchain;

/// Independently buildable parts of the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubProject {
  Web,
  Core,
  Ssh,
  Rdp,
}

impl SubProject {
  /// Project name inside its solution.
  pub fn name(&self) -> &'static str {
    match self {
      SubProject::Web => "tp_web",
      SubProject::Core => "tp_core",
      SubProject::Ssh => "tpssh",
      SubProject::Rdp => "tprdp",
    }
  }

  pub fn label(&self) -> &'static str {
    match self {
      SubProject::Web => "web server",
      SubProject::Core => "core server",
      SubProject::Ssh => "SSH protocol",
      SubProject::Rdp => "RDP protocol",
    }
  }

  /// Solution file relative to the project root.
  pub fn solution(&self) -> PathBuf {
    let (dir, file): (&[&str], &str) = match self {
      SubProject::Web => (&["server", "tp_web", "src"], "tp_web.vs2015.sln"),
      SubProject::Core => (&["server", "tp_core", "core"], "tp_core.vs2015.sln"),
      SubProject::Ssh => (&["server", "tp_core", "protocol", "ssh"], "tpssh.vs2015.sln"),
      SubProject::Rdp => (&["server", "tp_core", "protocol", "rdp"], "tprdp.vs2015.sln"),
    };
    dir.iter().collect::<PathBuf>().join(file)
  }

  /// File name of the built artifact on `dist`.
  pub fn artifact_name(&self, dist: Os) -> &'static str {
    match (dist, self) {
      (Os::Windows, SubProject::Web) => "tp_web.exe",
      (Os::Windows, SubProject::Core) => "tp_core.exe",
      (Os::Windows, SubProject::Ssh) => "tpssh.dll",
      (Os::Windows, SubProject::Rdp) => "tprdp.dll",
      (_, SubProject::Web) => "tp_web",
      (_, SubProject::Core) => "tp_core",
      (_, SubProject::Ssh) => "libtpssh.so",
      (_, SubProject::Rdp) => "libtprdp.so",
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
  Built,
  Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepReport {
  pub sub_project: SubProject,
  pub artifact: PathBuf,
  pub status: StepStatus,
}

/// Outcome of a successful `build_server` run.
#[derive(Debug, Clone, Serialize)]
pub struct BuildReport {
  pub dist: Os,
  pub target: Target,
  pub bits: Bits,
  pub root: PathBuf,
  pub features: Features,
  pub steps: Vec<StepReport>,
}

impl BuildReport {
  pub fn built(&self) -> usize {
    self.steps.iter().filter(|s| s.status == StepStatus::Built).count()
  }

  pub fn skipped(&self) -> usize {
    self.steps.len() - self.built()
  }
}

#[derive(Debug, Clone)]
pub struct Builder {
  dist: Os,
  ctx: BuildContext,
  env: Env,
}

impl Builder {
  /// Create the builder for the platform selected in `ctx`.
  pub fn new(ctx: BuildContext, env: Env) -> Result<Self> {
    let dist = ctx.dist().ok_or(BuildError::NoPlatformSelected)?;
    Ok(Self { dist, ctx, env })
  }

  pub fn dist(&self) -> Os {
    self.dist
  }

  pub fn context(&self) -> &BuildContext {
    &self.ctx
  }

  pub fn env(&self) -> &Env {
    &self.env
  }

  /// Sub-projects of a server build, in build order.
  pub fn server_projects(&self) -> Vec<SubProject> {
    let mut projects = match self.dist {
      Os::Windows => vec![SubProject::Web, SubProject::Core, SubProject::Ssh],
      Os::Linux | Os::MacOs => vec![SubProject::Core, SubProject::Web, SubProject::Ssh],
    };
    if self.env.features.with_rdp {
      projects.push(SubProject::Rdp);
    }
    projects
  }

  /// Directory the toolchains write server binaries to.
  pub fn out_dir(&self) -> PathBuf {
    let base = self
      .env
      .root
      .join("out")
      .join("server")
      .join(self.ctx.bits_path());
    match self.dist {
      Os::Windows => base.join(self.ctx.target_path()),
      Os::Linux | Os::MacOs => base.join("bin"),
    }
  }

  pub fn artifact_path(&self, project: SubProject) -> PathBuf {
    self.out_dir().join(project.artifact_name(self.dist))
  }

  /// Remove stale artifacts, run the toolchain, and verify every fresh artifact.
  pub fn build_server(&self, toolchain: &mut dyn Toolchain) -> Result<BuildReport> {
    debug!(
      dist = %self.dist,
      target = %self.ctx.target(),
      bits = %self.ctx.bits(),
      out_dir = %self.out_dir().display(),
      "building server"
    );
    if self.env.features.with_telnet {
      debug!("telnet protocol sources present but not part of the server build");
    }

    let steps = match self.dist {
      Os::Windows => windows::build_server(self, toolchain)?,
      Os::Linux | Os::MacOs => unix::build_server(self, toolchain)?,
    };

    Ok(BuildReport {
      dist: self.dist,
      target: self.ctx.target(),
      bits: self.ctx.bits(),
      root: self.env.root.clone(),
      features: self.env.features,
      steps,
    })
  }
}
