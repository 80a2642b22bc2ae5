//! `vplc filter` against a scratch source tree.

use predicates::prelude::*;

use super::common::TestEnv;

#[test]
fn filter_lists_verdicts() {
  let env = TestEnv::new();
  env.write_file("src/runtime-lib.h", "");
  env.write_file("src/adder.c", "");
  env.write_file("src/simulator_core.c", "");
  env.write_file("src/test_adder.c", "");
  env.write_file("src/latest_test_value.c", "");

  env
    .vplc_cmd()
    .arg("filter")
    .assert()
    .success()
    .stdout(predicate::str::contains("+ adder.c"))
    .stdout(predicate::str::contains("+ runtime-lib.h"))
    .stdout(predicate::str::contains("- simulator_core.c"))
    .stdout(predicate::str::contains("- test_adder.c"))
    .stdout(predicate::str::contains("- latest_test_value.c"))
    .stdout(predicate::str::contains("Included: 2 files"))
    .stdout(predicate::str::contains("Excluded: 3 files"));
}

#[test]
fn filter_accepts_explicit_directory() {
  let env = TestEnv::new();
  env.write_file("firmware/main.cpp", "");

  env
    .vplc_cmd()
    .arg("filter")
    .arg("firmware")
    .assert()
    .success()
    .stdout(predicate::str::contains("+ main.cpp"))
    .stdout(predicate::str::contains("Included: 1 file"))
    .stdout(predicate::str::contains("Excluded: 0 files"));
}
