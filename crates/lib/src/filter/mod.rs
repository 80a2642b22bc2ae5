//! Source selection for the native firmware build.
//!
//! The native build system hands every candidate input to the middlewares
//! registered with it. [`decide`] is registered once, under `*`, and drops
//! simulator-only and unit-test sources that belong to the WASM toolchains.
//!
//! Matching is a case-sensitive substring test on the file name only. It is
//! not extension or path aware: `latest_test_value.c` contains `test_` and is
//! excluded as well.

pub mod tree;

use std::path::Path;

pub use tree::{FileNode, FilterError, ScannedSource, SourceTree, scan_sources};

/// Name fragments that exclude a source from the native build.
pub const EXCLUDED_FRAGMENTS: [&str; 2] = ["simulator", "test_"];

/// Pattern the source filter is registered under.
pub const SOURCE_FILTER_PATTERN: &str = "*";

/// A candidate build input as exposed by the build system.
pub trait SourceNode {
  /// File name without directories.
  fn name(&self) -> &str;
  fn path(&self) -> &Path;
}

/// Verdict for one candidate input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterDecision {
  Include,
  Exclude,
}

impl FilterDecision {
  pub fn is_included(self) -> bool {
    self == Self::Include
  }
}

/// Callback type accepted by a build system's middleware hook.
pub type BuildMiddleware = Box<dyn Fn(&dyn SourceNode) -> FilterDecision + Send + Sync>;

/// The registration point a native build system exposes.
pub trait BuildMiddlewareRegistry {
  /// Register `middleware` for every input whose name matches `pattern`.
  fn add_build_middleware(&mut self, pattern: &str, middleware: BuildMiddleware);
}

/// Decide whether `node` takes part in the native build.
pub fn decide(node: &dyn SourceNode) -> FilterDecision {
  let name = node.name();
  if EXCLUDED_FRAGMENTS.iter().any(|fragment| name.contains(fragment)) {
    FilterDecision::Exclude
  } else {
    FilterDecision::Include
  }
}

/// Register [`decide`] with the build system.
pub fn register_source_filter<R: BuildMiddlewareRegistry + ?Sized>(registry: &mut R) {
  registry.add_build_middleware(SOURCE_FILTER_PATTERN, Box::new(decide));
}
