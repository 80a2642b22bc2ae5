//! Script execution.

use std::path::Path;

use tracing::{debug, error};

use super::types::{BuildOutcome, ScriptTarget};
use crate::consts::SPAWN_FAILURE_CODE;
use crate::platform::PlatformKind;

/// Runs a resolved script to completion and reports its exit status.
pub trait ScriptRunner {
  fn run(&mut self, platform: PlatformKind, target: &ScriptTarget, cwd: &Path) -> BuildOutcome;
}

/// Runs scripts through the platform shell, blocking until they exit.
///
/// Only the exit status is captured. The child inherits stdout, stderr and
/// the environment, so long builds stream their output directly.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellRunner;

impl ScriptRunner for ShellRunner {
  fn run(&mut self, platform: PlatformKind, target: &ScriptTarget, cwd: &Path) -> BuildOutcome {
    let mut command = platform.shell_command(&target.absolute);
    command.current_dir(cwd);

    debug!(
      program = ?command.get_program(),
      script = %target.absolute.display(),
      cwd = %cwd.display(),
      "spawning script"
    );

    match command.status() {
      Ok(status) => BuildOutcome::from_status(status),
      Err(e) => {
        error!(script = %target.absolute.display(), error = %e, "failed to start shell");
        BuildOutcome::new(SPAWN_FAILURE_CODE)
      }
    }
  }
}
