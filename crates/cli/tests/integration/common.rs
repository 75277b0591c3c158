//! Shared test helpers for CLI integration tests.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

/// Isolated project tree.
///
/// Each test gets its own temporary directory laid out like the server sources.
pub struct TestEnv {
  pub temp: TempDir,
}

impl TestEnv {
  /// Create a tree with the SSH plugin and, when `with_rdp` is set, the RDP plugin.
  pub fn new(with_rdp: bool) -> Self {
    let temp = TempDir::new().unwrap();
    let protocols = temp.path().join("server").join("tp_core").join("protocol");
    std::fs::create_dir_all(protocols.join("ssh")).unwrap();
    if with_rdp {
      std::fs::create_dir_all(protocols.join("rdp")).unwrap();
    }
    Self { temp }
  }

  /// Canonical project root, as the binary resolves it.
  pub fn root(&self) -> PathBuf {
    dunce::canonicalize(self.temp.path()).unwrap()
  }

  pub fn out_dir(&self, relative: &str) -> PathBuf {
    self.root().join("out").join("server").join(relative)
  }

  /// Write an executable shell script standing in for a toolchain.
  ///
  /// Every invocation appends its arguments to `tools/<name>.log`.
  #[cfg(unix)]
  pub fn fake_tool(&self, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let dir = self.temp.path().join("tools");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    let log = dir.join(format!("{name}.log"));
    std::fs::write(&path, format!("#!/bin/sh\necho \"$@\" >> '{}'\n{body}\n", log.display())).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
  }

  /// Argument lines recorded by a fake tool.
  pub fn tool_log(&self, name: &str) -> Vec<String> {
    let path = self.temp.path().join("tools").join(format!("{name}.log"));
    std::fs::read_to_string(path)
      .unwrap_or_default()
      .lines()
      .map(str::to_string)
      .collect()
  }

  /// Get a pre-configured Command for the tpbuild binary.
  ///
  /// Points `TPBUILD_ROOT` at the project tree and both toolchain variables at a
  /// path that does not exist unless a test overrides them.
  pub fn tpbuild_cmd(&self) -> Command {
    let mut cmd: Command = cargo_bin_cmd!("tpbuild");
    cmd.env("TPBUILD_ROOT", self.temp.path());
    cmd.env("TPBUILD_CMAKE", missing_tool(self.temp.path()));
    cmd.env("TPBUILD_MSBUILD", missing_tool(self.temp.path()));
    cmd.env_remove("RUST_LOG");
    cmd
  }
}

fn missing_tool(root: &Path) -> PathBuf {
  root.join("no-such-tool")
}
