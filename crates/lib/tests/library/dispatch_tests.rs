//! Dispatch through the public API with a stand-in runner.

use std::path::Path;

use vovkplc_lib::dispatch::{
  ArtifactReport, BuildOutcome, DispatchProfile, ScriptRunner, ScriptTarget, TESTKIT_BUILD, WASM_TEST, dispatch,
};
use vovkplc_lib::platform::PlatformKind;

/// Exit codes handed out in order, one per run.
struct Sequence(Vec<i32>);

impl ScriptRunner for Sequence {
  fn run(&mut self, _platform: PlatformKind, _target: &ScriptTarget, _cwd: &Path) -> BuildOutcome {
    BuildOutcome::new(self.0.remove(0))
  }
}

fn dispatch_to_string(profile: &DispatchProfile, platform: PlatformKind, runner: &mut Sequence) -> (i32, String) {
  let mut out = Vec::new();
  let outcome = dispatch(profile, platform, Path::new("/checkout"), runner, &mut out);
  (outcome.exit_code(), String::from_utf8(out).unwrap())
}

#[test]
fn success_and_failure_reports_are_exclusive() {
  let mut runner = Sequence(vec![0, 1]);

  let (code, ok) = dispatch_to_string(&TESTKIT_BUILD, PlatformKind::PosixLike, &mut runner);
  assert_eq!(code, 0);
  assert!(ok.contains("simulator.wasm"));
  assert!(!ok.contains("Error building"));

  let (code, failed) = dispatch_to_string(&TESTKIT_BUILD, PlatformKind::PosixLike, &mut runner);
  assert_eq!(code, 1);
  assert!(failed.contains("Error building"));
  assert!(!failed.contains("simulator.wasm"));
}

#[test]
fn exit_codes_pass_through_unchanged() {
  for code in [1, 2, 126, 127, 255] {
    let mut runner = Sequence(vec![code]);
    let (observed, _) = dispatch_to_string(&WASM_TEST, PlatformKind::Windows, &mut runner);
    assert_eq!(observed, code);
  }
}

#[test]
fn custom_profiles_use_the_same_pipeline() {
  let profile = DispatchProfile {
    name: "bench",
    base_dir: "bench/",
    windows_script: "run.bat",
    posix_script: "run.sh",
    subject: "WASM benchmark",
    artifacts: Some(ArtifactReport {
      module: "bench.wasm",
      wrapper: "bench.js",
    }),
  };
  let mut runner = Sequence(vec![0]);

  let (code, text) = dispatch_to_string(&profile, PlatformKind::Windows, &mut runner);

  assert_eq!(code, 0);
  assert!(text.contains("Executing: ./bench/run.bat"));
  assert!(text.contains("./bench/bench.wasm"));
  assert!(text.contains("./bench/bench.js"));
}
