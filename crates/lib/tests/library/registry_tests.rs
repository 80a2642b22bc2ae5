//! The source filter seen from a native build system's side.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use vovkplc_lib::filter::{
  BuildMiddleware, BuildMiddlewareRegistry, FilterDecision, SourceNode, register_source_filter,
};

/// A build system's own node type, unrelated to anything in the crate.
struct GraphNode {
  file: String,
  abspath: PathBuf,
}

impl GraphNode {
  fn new(relative: &str) -> Self {
    let abspath = Path::new("/firmware").join(relative);
    let file = abspath.file_name().unwrap().to_string_lossy().into_owned();
    Self { file, abspath }
  }
}

impl SourceNode for GraphNode {
  fn name(&self) -> &str {
    &self.file
  }

  fn path(&self) -> &Path {
    &self.abspath
  }
}

/// Builds a dependency graph by asking every middleware about every input.
#[derive(Default)]
struct Graph {
  middlewares: Vec<(String, BuildMiddleware)>,
}

impl BuildMiddlewareRegistry for Graph {
  fn add_build_middleware(&mut self, pattern: &str, middleware: BuildMiddleware) {
    self.middlewares.push((pattern.to_string(), middleware));
  }
}

impl Graph {
  fn build<'a>(&self, inputs: &[&'a str]) -> BTreeMap<&'a str, FilterDecision> {
    inputs
      .iter()
      .map(|&input| {
        let node = GraphNode::new(input);
        let decision = if self
          .middlewares
          .iter()
          .any(|(_, middleware)| middleware(&node) == FilterDecision::Exclude)
        {
          FilterDecision::Exclude
        } else {
          FilterDecision::Include
        };
        (input, decision)
      })
      .collect()
  }
}

const INPUTS: [&str; 6] = [
  "src/VovkPLCRuntime.cpp",
  "src/tools/runtime-lib.h",
  "src/tools/runtime-test.h",
  "test/simulator_core.c",
  "test/test_adder.c",
  "src/tools/latest_test_value.c",
];

#[test]
fn graph_keeps_only_native_sources() {
  let mut graph = Graph::default();
  register_source_filter(&mut graph);

  let decisions = graph.build(&INPUTS);

  assert_eq!(decisions["src/VovkPLCRuntime.cpp"], FilterDecision::Include);
  assert_eq!(decisions["src/tools/runtime-lib.h"], FilterDecision::Include);
  assert_eq!(decisions["src/tools/runtime-test.h"], FilterDecision::Include);
  assert_eq!(decisions["test/simulator_core.c"], FilterDecision::Exclude);
  assert_eq!(decisions["test/test_adder.c"], FilterDecision::Exclude);
  assert_eq!(decisions["src/tools/latest_test_value.c"], FilterDecision::Exclude);
}

#[test]
fn traversal_order_does_not_matter() {
  let mut graph = Graph::default();
  register_source_filter(&mut graph);

  let forward = graph.build(&INPUTS);
  let mut reversed_inputs = INPUTS;
  reversed_inputs.reverse();
  let reversed = graph.build(&reversed_inputs);

  assert_eq!(forward, reversed);
}

#[test]
fn middleware_can_run_concurrently() {
  let mut graph = Graph::default();
  register_source_filter(&mut graph);
  let sequential = graph.build(&INPUTS);
  let (_, middleware) = &graph.middlewares[0];

  let concurrent: BTreeMap<&str, FilterDecision> = std::thread::scope(|scope| {
    let handles: Vec<_> = INPUTS
      .iter()
      .map(|&input| scope.spawn(move || (input, middleware(&GraphNode::new(input)))))
      .collect();
    handles.into_iter().map(|h| h.join().unwrap()).collect()
  });

  assert_eq!(sequential, concurrent);
}
