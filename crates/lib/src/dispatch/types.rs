//! Types produced while dispatching a script.

use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use thiserror::Error;

use super::profile::DispatchProfile;
use crate::platform::PlatformKind;
use crate::platform::paths::resolve;

/// A dispatcher failure. Every failure, including a missing script, is the
/// child's non-zero exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DispatchError {
  #[error("script exited with code {code}")]
  ChildProcessFailure { code: i32 },
}

/// The script a dispatcher will run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptTarget {
  /// `/`-separated path relative to the invocation root.
  pub relative: String,
  pub absolute: PathBuf,
}

impl ScriptTarget {
  /// Resolve the profile's script for `platform` against `root`.
  pub fn resolve(profile: &DispatchProfile, platform: PlatformKind, root: &Path) -> Self {
    let relative = profile.script_path(platform);
    let absolute = resolve(&relative, root);
    Self { relative, absolute }
  }

  /// The relative path as shown to the user.
  pub fn display_relative(&self) -> String {
    format!("./{}", self.relative)
  }
}

/// Exit status of an invoked script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildOutcome {
  exit_code: i32,
}

impl BuildOutcome {
  pub fn new(exit_code: i32) -> Self {
    Self { exit_code }
  }

  /// Convert a child's exit status.
  ///
  /// A child killed by a signal has no exit code; it is reported the way
  /// POSIX shells do, as `128 + signal`.
  pub fn from_status(status: ExitStatus) -> Self {
    if let Some(code) = status.code() {
      return Self::new(code);
    }

    #[cfg(unix)]
    {
      use std::os::unix::process::ExitStatusExt;
      if let Some(signal) = status.signal() {
        return Self::new(128 + signal);
      }
    }

    Self::new(1)
  }

  pub fn exit_code(&self) -> i32 {
    self.exit_code
  }

  pub fn succeeded(&self) -> bool {
    self.exit_code == 0
  }

  pub fn into_result(self) -> Result<(), DispatchError> {
    if self.succeeded() {
      Ok(())
    } else {
      Err(DispatchError::ChildProcessFailure { code: self.exit_code })
    }
  }
}
