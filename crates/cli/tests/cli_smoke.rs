//! CLI smoke tests for q2kit.
//!
//! These verify argument handling: step validation happens before any
//! step executes, unknown tokens list the valid set, and configuration
//! problems surface as user-facing errors.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

fn q2kit_cmd() -> Command {
  cargo_bin_cmd!("q2kit")
}

const VALID_CONFIG: &str = r#"
yquake2_url = "https://example.invalid/yquake2.git"
yquake2_commit = "0123456789abcdef0123456789abcdef01234567"
yquake2_ref_vk_url = "https://example.invalid/ref_vk.git"
yquake2_ref_vk_commit = "76543210fedcba9876543210fedcba9876543210"
ericw_tools_url = "https://example.invalid/ericw-tools-2.0.0"
debug_build = false
build_odin = false
use_odin_renderer = false
odin_vet = false
"#;

/// Create a temp project root with a config file.
fn temp_project(config: &str) -> TempDir {
  let temp = TempDir::new().unwrap();
  std::fs::write(temp.path().join("config.toml"), config).unwrap();
  temp
}

#[test]
fn help_flag_works() {
  q2kit_cmd()
    .arg("--help")
    .assert()
    .success()
    .stdout(predicate::str::contains("Usage"));
}

#[test]
fn version_flag_works() {
  q2kit_cmd()
    .arg("--version")
    .assert()
    .success()
    .stdout(predicate::str::contains("q2kit"));
}

#[test]
fn no_steps_is_a_usage_error() {
  q2kit_cmd()
    .assert()
    .failure()
    .stderr(predicate::str::contains("Usage"));
}

#[test]
fn unknown_step_lists_available_steps() {
  let temp = temp_project(VALID_CONFIG);

  q2kit_cmd()
    .current_dir(temp.path())
    .arg("frobnicate")
    .assert()
    .code(2)
    .stderr(predicate::str::contains("unknown step: frobnicate"))
    .stderr(predicate::str::contains("setup-trenchbroom"))
    .stderr(predicate::str::contains("loc-metrics"))
    .stderr(predicate::str::contains("all: Clone, build, and run"));
}

#[test]
fn one_unknown_step_rejects_the_whole_list_before_running() {
  let temp = temp_project(VALID_CONFIG);
  std::fs::create_dir_all(temp.path().join("base").join("maps")).unwrap();

  q2kit_cmd()
    .current_dir(temp.path())
    .args(["maps", "frobnicate"])
    .assert()
    .code(2)
    .stdout(predicate::str::contains("maps finished").not());

  // The valid step never ran: nothing was created.
  assert!(!temp.path().join("release").exists());
  assert!(!temp.path().join("tmp").exists());
}

#[test]
fn missing_config_is_fatal() {
  let temp = TempDir::new().unwrap();

  q2kit_cmd()
    .current_dir(temp.path())
    .arg("maps")
    .assert()
    .failure()
    .stderr(predicate::str::contains("config.toml"));
}

#[test]
fn mistyped_config_is_fatal() {
  let bad = VALID_CONFIG.replace("build_odin = false", "build_odin = \"no\"");
  let temp = temp_project(&bad);

  q2kit_cmd()
    .current_dir(temp.path())
    .arg("maps")
    .assert()
    .failure()
    .stderr(predicate::str::contains("invalid config"));
}

#[test]
fn maps_step_with_no_map_sources_succeeds() {
  let temp = temp_project(VALID_CONFIG);

  q2kit_cmd()
    .current_dir(temp.path())
    .arg("maps")
    .assert()
    .success()
    .stdout(predicate::str::contains("maps finished"));
}

#[test]
fn run_args_without_run_step_warns() {
  let temp = temp_project(VALID_CONFIG);

  q2kit_cmd()
    .current_dir(temp.path())
    .args(["maps", "--run-args", "+map test1"])
    .assert()
    .success()
    .stderr(predicate::str::contains("--run-args has no effect"));
}
