use tracing::{info, warn};

use super::{Builder, StepReport, StepStatus, SubProject};
use crate::context::Target;
use crate::error::Result;
use crate::fsutil;
use crate::toolchain::{SolutionBuild, Toolchain};

/// Build each sub-project through its own solution, verifying after every step.
pub(super) fn build_server(builder: &Builder, toolchain: &mut dyn Toolchain) -> Result<Vec<StepReport>> {
  builder
    .server_projects()
    .into_iter()
    .map(|project| build_project(builder, project, &mut *toolchain))
    .collect()
}

fn build_project(builder: &Builder, project: SubProject, toolchain: &mut dyn Toolchain) -> Result<StepReport> {
  let ctx = builder.context();
  let artifact = builder.artifact_path(project);

  info!("build {} ...", project.label());

  // tp_web has no debug configuration
  if project == SubProject::Web && ctx.target() == Target::Debug {
    warn!("cannot build debug version of {}, skip.", project.name());
    return Ok(StepReport {
      sub_project: project,
      artifact,
      status: StepStatus::Skipped,
    });
  }

  let solution = builder.env().root.join(project.solution());
  fsutil::remove(&artifact)?;
  toolchain.solution_build(&SolutionBuild {
    solution: &solution,
    project: project.name(),
    target: ctx.target(),
    bits: ctx.bits(),
  })?;
  fsutil::ensure_file_exists(&artifact)?;

  Ok(StepReport {
    sub_project: project,
    artifact,
    status: StepStatus::Built,
  })
}
