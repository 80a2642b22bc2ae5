//! A filesystem-backed middleware registry.
//!
//! Lets the source filter be exercised outside the native build system by
//! walking a source directory and presenting each file as a node.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, trace};
use walkdir::WalkDir;

use super::{BuildMiddleware, BuildMiddlewareRegistry, FilterDecision, SourceNode, register_source_filter};

#[derive(Debug, Error)]
pub enum FilterError {
  #[error("source directory not found: {path}")]
  NotADirectory { path: String },

  #[error("failed to traverse {path}: {source}")]
  Walk {
    path: String,
    #[source]
    source: walkdir::Error,
  },
}

/// A regular file found under a source directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNode {
  name: String,
  path: PathBuf,
}

impl FileNode {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    let path = path.into();
    let name = path
      .file_name()
      .map(|n| n.to_string_lossy().into_owned())
      .unwrap_or_default();
    Self { name, path }
  }
}

impl SourceNode for FileNode {
  fn name(&self) -> &str {
    &self.name
  }

  fn path(&self) -> &Path {
    &self.path
  }
}

/// A file together with the verdict the registered middlewares reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedSource {
  pub node: FileNode,
  pub decision: FilterDecision,
}

/// Registered middlewares, applied in registration order.
#[derive(Default)]
pub struct SourceTree {
  middlewares: Vec<(String, BuildMiddleware)>,
}

impl BuildMiddlewareRegistry for SourceTree {
  fn add_build_middleware(&mut self, pattern: &str, middleware: BuildMiddleware) {
    debug!(pattern, "registering build middleware");
    self.middlewares.push((pattern.to_string(), middleware));
  }
}

impl SourceTree {
  pub fn new() -> Self {
    Self::default()
  }

  /// A tree with the native-build source filter registered.
  pub fn with_source_filter() -> Self {
    let mut tree = Self::new();
    register_source_filter(&mut tree);
    tree
  }

  pub fn middleware_count(&self) -> usize {
    self.middlewares.len()
  }

  /// Any matching middleware that excludes the node excludes it.
  pub fn evaluate(&self, node: &dyn SourceNode) -> FilterDecision {
    let excluded = self
      .middlewares
      .iter()
      .filter(|(pattern, _)| matches_pattern(pattern, node.name()))
      .any(|(_, middleware)| middleware(node) == FilterDecision::Exclude);

    if excluded {
      FilterDecision::Exclude
    } else {
      FilterDecision::Include
    }
  }

  /// Walk `dir` and evaluate every regular file, sorted by path.
  pub fn scan(&self, dir: &Path) -> Result<Vec<ScannedSource>, FilterError> {
    if !dir.is_dir() {
      return Err(FilterError::NotADirectory {
        path: dir.display().to_string(),
      });
    }

    let mut sources = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
      let entry = entry.map_err(|e| FilterError::Walk {
        path: dir.display().to_string(),
        source: e,
      })?;

      if !entry.file_type().is_file() {
        continue;
      }

      let node = FileNode::new(entry.into_path());
      let decision = self.evaluate(&node);
      trace!(path = %node.path().display(), ?decision, "evaluated source");
      sources.push(ScannedSource { node, decision });
    }

    Ok(sources)
  }
}

/// Walk `dir` with only the native-build source filter registered.
pub fn scan_sources(dir: &Path) -> Result<Vec<ScannedSource>, FilterError> {
  SourceTree::with_source_filter().scan(dir)
}

/// Match a file name against a pattern where `*` stands for any run of characters.
///
/// Greedy two-pointer scan: on a mismatch, fall back to the last `*` and let
/// it swallow one more character.
fn matches_pattern(pattern: &str, name: &str) -> bool {
  let pattern: Vec<char> = pattern.chars().collect();
  let name: Vec<char> = name.chars().collect();

  let (mut p, mut n) = (0, 0);
  let mut last_star: Option<(usize, usize)> = None;

  while n < name.len() {
    match pattern.get(p) {
      Some('*') => {
        last_star = Some((p, n));
        p += 1;
      }
      Some(&c) if c == name[n] => {
        p += 1;
        n += 1;
      }
      _ => match last_star {
        Some((star, swallowed)) => {
          last_star = Some((star, swallowed + 1));
          p = star + 1;
          n = swallowed + 1;
        }
        None => return false,
      },
    }
  }

  pattern[p..].iter().all(|&c| c == '*')
}
