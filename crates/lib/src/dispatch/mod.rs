//! Build and test script dispatch.
//!
//! A dispatch resolves a profile's script for the given platform, runs it
//! once, and writes a status report. The caller owns process termination:
//! the returned [`BuildOutcome`] carries the exit code to propagate.

pub mod profile;
pub mod report;
pub mod runner;
pub mod types;

use std::io::{self, Write};
use std::path::Path;

use tracing::{info, warn};

pub use profile::{ArtifactReport, DIST_BUILD, DispatchProfile, TESTKIT_BUILD, WASM_TEST};
pub use runner::{ScriptRunner, ShellRunner};
pub use types::{BuildOutcome, DispatchError, ScriptTarget};

use crate::platform::PlatformKind;

/// Run `profile`'s script and report the result to `out`.
///
/// `root` is the invocation directory: the script is resolved against it and
/// runs with it as working directory. The script runs exactly once even when
/// `out` is unwritable; report failures are logged and never replace the
/// script's exit code.
pub fn dispatch<R, W>(
  profile: &DispatchProfile,
  platform: PlatformKind,
  root: &Path,
  runner: &mut R,
  out: &mut W,
) -> BuildOutcome
where
  R: ScriptRunner + ?Sized,
  W: Write,
{
  let target = ScriptTarget::resolve(profile, platform, root);

  info!(
    profile = profile.name,
    platform = %platform,
    script = %target.absolute.display(),
    "dispatching script"
  );

  let banner = report::write_banner(out, profile, &target).and_then(|()| out.flush());
  log_write_failure(profile, "banner", banner);

  let outcome = runner.run(platform, &target, root);

  let summary = if outcome.succeeded() {
    info!(profile = profile.name, "script succeeded");
    report::write_success(out, profile)
  } else {
    info!(profile = profile.name, exit_code = outcome.exit_code(), "script failed");
    report::write_failure(out, profile, outcome.exit_code())
  };
  log_write_failure(profile, "summary", summary.and_then(|()| out.flush()));

  outcome
}

fn log_write_failure(profile: &DispatchProfile, section: &str, result: io::Result<()>) {
  if let Err(e) = result {
    warn!(profile = profile.name, section, error = %e, "failed to write dispatch report");
  }
}
