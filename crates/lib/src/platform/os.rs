use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::BuildError;

/// Target platforms the server can be built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Os {
  Windows,
  Linux,
  MacOs,
}

impl Os {
  pub const ALL: [Os; 3] = [Os::Windows, Os::Linux, Os::MacOs];

  /// Returns the lowercase identifier accepted on the command line
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Windows => "windows",
      Self::Linux => "linux",
      Self::MacOs => "macos",
    }
  }
}

impl FromStr for Os {
  type Err = BuildError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Os::ALL
      .into_iter()
      .find(|os| os.as_str() == s)
      .ok_or_else(|| BuildError::UnsupportedPlatform(s.to_string()))
  }
}

impl fmt::Display for Os {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}
