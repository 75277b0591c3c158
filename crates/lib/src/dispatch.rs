//! Command line token dispatch.
//!
//! Tokens are bare words in any order: `debug`, `x86`, `x64`, a platform name, and
//! the build target `server`. Anything else is ignored.

use tracing::{debug, info};

use crate::builder::{BuildReport, Builder};
use crate::context::{Bits, BuildContext, Target};
use crate::env::Env;
use crate::error::Result;
use crate::platform::Os;
use crate::toolchain::Toolchain;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
  Debug,
  Bits(Bits),
  Platform(&'a str),
  Server,
  Unknown(&'a str),
}

impl<'a> Token<'a> {
  fn parse(word: &'a str) -> Self {
    match word {
      "debug" => Token::Debug,
      "x86" => Token::Bits(Bits::X86),
      "x64" => Token::Bits(Bits::X64),
      "server" => Token::Server,
      w if Os::ALL.iter().any(|os| os.as_str() == w) => Token::Platform(w),
      w => Token::Unknown(w),
    }
  }
}

/// Settings and targets requested on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
  pub ctx: BuildContext,
  pub build_server: bool,
}

/// Turn tokens into a configured context.
///
/// Falls back to `host_os` when no platform token is given, which fails for hosts
/// that are not a supported platform.
pub fn parse_tokens<S: AsRef<str>>(tokens: &[S], host_os: &str) -> Result<Invocation> {
  let mut ctx = BuildContext::new();
  let mut build_server = false;

  for word in tokens {
    match Token::parse(word.as_ref()) {
      Token::Debug => ctx.set_target(Target::Debug),
      Token::Bits(bits) => ctx.set_bits(bits),
      Token::Platform(name) => {
        ctx.set_dist(name)?;
      }
      Token::Server => build_server = true,
      Token::Unknown(w) => debug!(token = w, "ignoring unknown token"),
    }
  }

  if ctx.dist().is_none() {
    ctx.set_dist(host_os)?;
  }

  Ok(Invocation { ctx, build_server })
}

/// Parse `tokens`, construct the builder, and run the requested targets.
///
/// Returns `None` when no build target was requested.
pub fn dispatch<S: AsRef<str>>(
  tokens: &[S],
  host_os: &str,
  env: Env,
  toolchain: &mut dyn Toolchain,
) -> Result<Option<BuildReport>> {
  let invocation = parse_tokens(tokens, host_os)?;
  let builder = Builder::new(invocation.ctx, env)?;

  if !invocation.build_server {
    info!("no build target given, nothing to do");
    return Ok(None);
  }

  builder.build_server(toolchain).map(Some)
}
