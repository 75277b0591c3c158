use std::ffi::OsString;

use super::SolutionBuild;

/// Arguments for building one project of a solution.
pub fn msbuild_args(build: &SolutionBuild<'_>) -> Vec<OsString> {
  vec![
    build.solution.as_os_str().to_owned(),
    "/m".into(),
    "/nologo".into(),
    format!("/t:{}", build.project).into(),
    format!("/p:Configuration={}", build.target.config_name()).into(),
    format!("/p:Platform={}", build.bits.as_str()).into(),
  ]
}
