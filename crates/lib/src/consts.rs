//! Names and environment variables shared across the crate.

/// Overrides project root discovery.
pub const ROOT_ENV: &str = "TPBUILD_ROOT";

/// Path or name of the MSBuild executable used for solution builds.
pub const MSBUILD_ENV: &str = "TPBUILD_MSBUILD";

/// Path or name of the CMake executable.
pub const CMAKE_ENV: &str = "TPBUILD_CMAKE";

pub const DEFAULT_MSBUILD: &str = "msbuild";
pub const DEFAULT_CMAKE: &str = "cmake";
