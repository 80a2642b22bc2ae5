//! Resolution of script locations against the invocation directory

use std::path::{Component, Path, PathBuf};

use crate::consts::ROOT_ENV;
use crate::platform::PlatformError;

/// Returns the directory relative script paths are resolved against.
///
/// This is the process working directory unless `VOVKPLC_ROOT` is set, in
/// which case that directory (itself relative to the working directory when
/// not absolute) is used instead.
pub fn invocation_root() -> Result<PathBuf, PlatformError> {
  let cwd = std::env::current_dir().map_err(PlatformError::CurrentDir)?;

  match std::env::var_os(ROOT_ENV) {
    Some(root) if !root.is_empty() => {
      let root = normalize_path(&cwd.join(root));
      Ok(dunce::canonicalize(&root).unwrap_or(root))
    }
    _ => Ok(cwd),
  }
}

/// Resolve `relative` against `root` without touching the filesystem.
///
/// Absolute inputs are returned as-is; `.` and `..` components are folded
/// lexically so the target does not need to exist.
pub fn resolve<P: AsRef<Path>, B: AsRef<Path>>(relative: P, root: B) -> PathBuf {
  let relative = relative.as_ref();
  if relative.is_absolute() {
    return relative.to_path_buf();
  }
  normalize_path(&root.as_ref().join(relative))
}

fn normalize_path(path: &Path) -> PathBuf {
  let mut components = Vec::new();

  for component in path.components() {
    match component {
      Component::ParentDir => {
        if matches!(components.last(), Some(Component::Normal(_))) {
          components.pop();
        }
      }
      Component::CurDir => {}
      other => components.push(other),
    }
  }

  components.iter().collect()
}
