use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use tpbuild_lib::BuildError;

mod cmd;
mod output;

use output::{OutputFormat, print_error, print_fatal};

/// tpbuild - build the teleport server with the native toolchains
#[derive(Parser)]
#[command(name = "tpbuild")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Build tokens in any order: a platform (windows, linux, macos), `debug`,
  /// `x86` or `x64`, and `server` to build the server
  tokens: Vec<String>,

  /// Project root (defaults to TPBUILD_ROOT, then the nearest directory containing server/tp_core)
  #[arg(long)]
  root: Option<PathBuf>,

  /// Enable verbose output
  #[arg(short, long)]
  verbose: bool,

  /// Output format for the build summary
  #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
  output: OutputFormat,
}

fn main() -> ExitCode {
  let cli = Cli::parse();

  let default_level = if cli.verbose { "debug" } else { "info" };
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
    .with_writer(std::io::stderr)
    .without_time()
    .with_target(false)
    .init();

  match cmd::cmd_build(&cli.tokens, cli.root.as_deref(), cli.output) {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => match err.downcast_ref::<BuildError>() {
      // Without a project root there is nothing to build.
      Some(BuildError::EnvironmentInit(reason)) => {
        debug!(%reason, "environment not ready, nothing built");
        ExitCode::SUCCESS
      }
      Some(build_err) => {
        print_error(&build_err.to_string());
        ExitCode::FAILURE
      }
      None => {
        print_fatal(&format!("got unexpected error: {err:#}"));
        ExitCode::FAILURE
      }
    },
  }
}
