use std::ffi::OsString;

use crate::context::Target;

/// Configure the source tree in the parent of the working directory.
pub fn cmake_configure_args(target: Target) -> Vec<OsString> {
  vec![format!("-DCMAKE_BUILD_TYPE={}", target.config_name()).into(), "..".into()]
}

pub fn cmake_build_args(target: Target) -> Vec<OsString> {
  vec![
    "--build".into(),
    ".".into(),
    "--config".into(),
    target.config_name().into(),
  ]
}
