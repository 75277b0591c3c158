use tracing::{debug, info};

use super::{Builder, StepReport, StepStatus};
use crate::error::Result;
use crate::fsutil;
use crate::toolchain::Toolchain;

/// Build all sub-projects with one CMake run, then verify the whole artifact list.
pub(super) fn build_server(builder: &Builder, toolchain: &mut dyn Toolchain) -> Result<Vec<StepReport>> {
  let projects = builder.server_projects();
  let names: Vec<_> = projects.iter().map(|p| p.name()).collect();
  info!("build server app ({}) ...", names.join("/"));

  let out_dir = builder.out_dir();
  let artifacts: Vec<_> = projects
    .into_iter()
    .map(|p| (p, builder.artifact_path(p)))
    .collect();

  for (_, path) in &artifacts {
    fsutil::remove(path)?;
  }
  fsutil::makedirs(&out_dir)?;

  let work_dir = builder.env().root.join("server").join("cmake-build");
  toolchain.cmake_build(&work_dir, builder.context().target())?;

  artifacts
    .into_iter()
    .map(|(project, artifact)| -> Result<StepReport> {
      fsutil::ensure_file_exists(&artifact)?;
      debug!(artifact = %artifact.display(), "verified");
      Ok(StepReport {
        sub_project: project,
        artifact,
        status: StepStatus::Built,
      })
    })
    .collect()
}
