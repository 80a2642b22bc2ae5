//! Implementation of the `vplc build`, `vplc dist` and `vplc test` commands.
//!
//! Each command runs one platform-specific script and reports its result.
//! The outcome is handed back to `main`, which exits with the script's code.

use std::io;

use anyhow::{Context, Result};
use tracing::debug;

use vovkplc_lib::dispatch::{DispatchError, DispatchProfile, ShellRunner, dispatch};
use vovkplc_lib::platform::PlatformKind;
use vovkplc_lib::platform::paths::invocation_root;

/// Execute a dispatcher command.
///
/// Detects the platform, resolves the profile's script against the
/// invocation root and runs it once through the platform shell. The outer
/// error covers failures to inspect the host; a failing script is the inner
/// [`DispatchError`].
pub fn cmd_dispatch(profile: &DispatchProfile) -> Result<Result<(), DispatchError>> {
  let platform = PlatformKind::detect().context("Failed to determine host platform")?;
  let root = invocation_root().context("Failed to determine invocation directory")?;

  debug!(platform = %platform, root = %root.display(), "resolved host");

  let stdout = io::stdout();
  let mut out = stdout.lock();
  Ok(dispatch(profile, platform, &root, &mut ShellRunner, &mut out).into_result())
}

/// Process exit status for a finished dispatch.
pub fn exit_status(result: Result<(), DispatchError>) -> i32 {
  match result {
    Ok(()) => 0,
    Err(DispatchError::ChildProcessFailure { code }) => code,
  }
}
