//! Per-run build configuration.

use std::fmt;

use serde::Serialize;

use crate::error::{BuildError, Result};
use crate::platform::{Os, host_bits};

/// Build configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
  Debug,
  #[default]
  Release,
}

impl Target {
  /// Lowercase form used in output paths.
  pub fn as_str(&self) -> &'static str {
    match self {
      Target::Debug => "debug",
      Target::Release => "release",
    }
  }

  /// Configuration name as spelled by MSBuild and CMake.
  pub fn config_name(&self) -> &'static str {
    match self {
      Target::Debug => "Debug",
      Target::Release => "Release",
    }
  }
}

impl fmt::Display for Target {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Bits {
  #[serde(rename = "x86")]
  X86,
  #[serde(rename = "x64")]
  X64,
}

impl Bits {
  pub fn as_str(&self) -> &'static str {
    match self {
      Bits::X86 => "x86",
      Bits::X64 => "x64",
    }
  }
}

impl fmt::Display for Bits {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// Settings collected while parsing the command line.
///
/// Built once by the dispatcher, then moved into the [`Builder`](crate::builder::Builder)
/// which only reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildContext {
  dist: Option<Os>,
  target: Target,
  bits: Bits,
}

impl Default for BuildContext {
  fn default() -> Self {
    Self::new()
  }
}

impl BuildContext {
  pub fn new() -> Self {
    Self {
      dist: None,
      target: Target::default(),
      bits: host_bits(),
    }
  }

  /// Select the target platform by its identifier.
  ///
  /// Selecting the same platform twice is accepted; switching to a different one is not.
  pub fn set_dist(&mut self, name: &str) -> Result<Os> {
    let requested: Os = name.parse()?;
    match self.dist {
      Some(current) if current != requested => Err(BuildError::PlatformAlreadySelected { current, requested }),
      _ => {
        self.dist = Some(requested);
        Ok(requested)
      }
    }
  }

  pub fn set_target(&mut self, target: Target) {
    self.target = target;
  }

  pub fn set_bits(&mut self, bits: Bits) {
    self.bits = bits;
  }

  pub fn dist(&self) -> Option<Os> {
    self.dist
  }

  pub fn target(&self) -> Target {
    self.target
  }

  pub fn bits(&self) -> Bits {
    self.bits
  }

  pub fn bits_path(&self) -> &'static str {
    self.bits.as_str()
  }

  pub fn target_path(&self) -> &'static str {
    self.target.as_str()
  }
}
