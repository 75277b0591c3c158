//! Implementation of the build run.
//!
//! Resolves the project environment, hands the tokens to the dispatcher and
//! prints a summary of what was built.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use owo_colors::{OwoColorize, Stream};
use tracing::debug;

use tpbuild_lib::platform::host_os_name;
use tpbuild_lib::{BuildReport, Env, StepStatus, SystemToolchain, dispatch};

use crate::output::{OutputFormat, format_duration, print_info, print_json, print_stat, print_success, symbols};

/// Execute the build described by `tokens`.
///
/// # Errors
///
/// Returns the [`tpbuild_lib::BuildError`] of the first failing step.
pub fn cmd_build(tokens: &[String], root: Option<&Path>, output: OutputFormat) -> Result<()> {
  let start = Instant::now();

  let env = Env::init(root)?;
  debug!(?tokens, root = %env.root.display(), "dispatching");
  let mut toolchain = SystemToolchain::from_env();
  let report = dispatch(tokens, host_os_name(), env, &mut toolchain)?;

  if output.is_json() {
    return print_json(&report);
  }

  match report {
    Some(report) => print_report(&report, start),
    None => print_info("Nothing to build. Add `server` to build the server."),
  }

  Ok(())
}

fn print_report(report: &BuildReport, start: Instant) {
  println!();
  print_success("Server build complete!");
  for step in &report.steps {
    let name = step.sub_project.name();
    match step.status {
      StepStatus::Built => println!(
        "  {} {:<8} {}",
        symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
        name,
        step.artifact.display()
      ),
      StepStatus::Skipped => println!(
        "  {} {:<8} {}",
        symbols::WARNING.if_supports_color(Stream::Stdout, |s| s.yellow()),
        name,
        "skipped".if_supports_color(Stream::Stdout, |s| s.dimmed())
      ),
    }
  }
  println!();
  print_stat("Platform", report.dist.as_str());
  print_stat("Configuration", report.target.as_str());
  print_stat("Bits", report.bits.as_str());
  print_stat("Built", &report.built().to_string());
  print_stat("Skipped", &report.skipped().to_string());
  print_stat("Duration", &format_duration(start.elapsed()));
}
