//! tpbuild-lib: build orchestration for the teleport server.
//!
//! This crate drives the native toolchains that build the server components:
//! - `BuildContext`: platform, configuration and bitness of one run
//! - `Builder`: per-platform sequence of remove, build, verify steps
//! - `dispatch`: command line tokens to a configured builder
//! - `Toolchain`: the seam to MSBuild and CMake

pub mod builder;
pub mod consts;
pub mod context;
pub mod dispatch;
pub mod env;
pub mod error;
pub mod fsutil;
pub mod platform;
pub mod toolchain;
pub mod util;

pub use builder::{BuildReport, Builder, StepReport, StepStatus, SubProject};
pub use context::{Bits, BuildContext, Target};
pub use dispatch::{Invocation, dispatch, parse_tokens};
pub use env::{Env, Features};
pub use error::BuildError;
pub use platform::Os;
pub use toolchain::{SystemToolchain, Toolchain, ToolchainError};
