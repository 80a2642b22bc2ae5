//! Static descriptions of the dispatcher entry points.

use crate::platform::PlatformKind;

/// Files a successful build leaves in the profile's base directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtifactReport {
  /// The compiled WebAssembly module.
  pub module: &'static str,
  /// The JavaScript wrapper loading the module.
  pub wrapper: &'static str,
}

/// One dispatcher: where its script lives, what it is called on each
/// platform, and what a successful run produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchProfile {
  /// Short name used in logs.
  pub name: &'static str,
  /// Script directory relative to the invocation root, with a trailing `/`.
  pub base_dir: &'static str,
  pub windows_script: &'static str,
  pub posix_script: &'static str,
  /// What the script produces, e.g. "WASM executable".
  pub subject: &'static str,
  /// `None` when a successful run leaves nothing behind worth listing.
  pub artifacts: Option<ArtifactReport>,
}

/// Runtime test kit build: `test/VovkPLCRuntimeWasmTestKit/build.{bat,sh}`.
pub const TESTKIT_BUILD: DispatchProfile = DispatchProfile {
  name: "build",
  base_dir: "test/VovkPLCRuntimeWasmTestKit/",
  windows_script: "build.bat",
  posix_script: "build.sh",
  subject: "WASM executable",
  artifacts: Some(ArtifactReport {
    module: "simulator.wasm",
    wrapper: "simulator.js",
  }),
};

/// Distributable bundle build: `wasm/dist/build.{bat,sh}`.
pub const DIST_BUILD: DispatchProfile = DispatchProfile {
  name: "dist",
  base_dir: "wasm/dist/",
  windows_script: "build.bat",
  posix_script: "build.sh",
  subject: "WASM executable",
  artifacts: Some(ArtifactReport {
    module: "VovkPLC.wasm",
    wrapper: "VovkPLC.js",
  }),
};

/// WASM test build: `wasm/test.{bat,sh}`.
pub const WASM_TEST: DispatchProfile = DispatchProfile {
  name: "test",
  base_dir: "wasm/",
  windows_script: "test.bat",
  posix_script: "test.sh",
  subject: "WASM tests",
  artifacts: None,
};

impl DispatchProfile {
  /// The script filename for `platform`.
  pub fn script_name(&self, platform: PlatformKind) -> &'static str {
    platform.select(self.windows_script, self.posix_script)
  }

  /// The script path relative to the invocation root, `/`-separated.
  pub fn script_path(&self, platform: PlatformKind) -> String {
    format!("{}{}", self.base_dir, self.script_name(platform))
  }

  /// Display paths of the module and wrapper, if the profile produces any.
  pub fn artifact_paths(&self) -> Option<(String, String)> {
    self.artifacts.map(|a| {
      (
        format!("./{}{}", self.base_dir, a.module),
        format!("./{}{}", self.base_dir, a.wrapper),
      )
    })
  }
}
