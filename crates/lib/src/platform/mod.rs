pub mod paths;

use std::fmt;
use std::path::Path;
use std::process::Command;
use std::str::FromStr;

use thiserror::Error;

use crate::consts::PLATFORM_ENV;

/// Errors raised while inspecting the host.
#[derive(Debug, Error)]
pub enum PlatformError {
  #[error("unknown platform '{0}' (expected 'windows' or 'posix')")]
  UnknownPlatform(String),

  #[error("{var} is not valid unicode")]
  NotUnicode { var: &'static str },

  #[error("failed to read the current directory: {0}")]
  CurrentDir(#[source] std::io::Error),
}

/// Host classification used to select a script filename and the shell that runs it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformKind {
  Windows,
  PosixLike,
}

impl PlatformKind {
  /// Classify an `std::env::consts::OS` value
  pub fn from_os(os: &str) -> Self {
    match os {
      "windows" => Self::Windows,
      _ => Self::PosixLike,
    }
  }

  /// Classify the host this binary was built for
  pub fn current() -> Self {
    Self::from_os(std::env::consts::OS)
  }

  /// Detect the platform, honouring the `VOVKPLC_PLATFORM` override
  pub fn detect() -> Result<Self, PlatformError> {
    match std::env::var(PLATFORM_ENV) {
      Ok(value) => value.parse(),
      Err(std::env::VarError::NotPresent) => Ok(Self::current()),
      Err(std::env::VarError::NotUnicode(_)) => Err(PlatformError::NotUnicode { var: PLATFORM_ENV }),
    }
  }

  /// Returns the lowercase string identifier for this platform
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Windows => "windows",
      Self::PosixLike => "posix",
    }
  }

  /// Pick between the Windows and POSIX spelling of a script name
  pub fn select<'a>(&self, windows: &'a str, posix: &'a str) -> &'a str {
    match self {
      Self::Windows => windows,
      Self::PosixLike => posix,
    }
  }

  /// Build a shell-level invocation of `script`.
  ///
  /// Windows goes through `cmd.exe /C`. POSIX hosts use `/bin/sh -c` with the
  /// script passed as `$0`, so paths containing spaces are never re-split.
  /// Standard streams, environment and working directory are inherited.
  pub fn shell_command(&self, script: &Path) -> Command {
    let (program, args): (&str, &[&str]) = match self {
      Self::Windows => ("cmd.exe", &["/C"][..]),
      Self::PosixLike => ("/bin/sh", &["-c", "\"$0\""][..]),
    };

    let mut command = Command::new(program);
    command.args(args).arg(script);
    command
  }
}

impl FromStr for PlatformKind {
  type Err = PlatformError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "windows" | "win32" => Ok(Self::Windows),
      "posix" | "linux" | "macos" | "darwin" | "unix" => Ok(Self::PosixLike),
      other => Err(PlatformError::UnknownPlatform(other.to_string())),
    }
  }
}

impl fmt::Display for PlatformKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}
