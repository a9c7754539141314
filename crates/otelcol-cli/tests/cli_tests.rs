//! End-to-end tests that invoke the compiled `otelcol-config` binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const SETTINGS: &str = "00-otelcol-config-settings.yaml";
const OVERRIDES: &str = "99-otelcol-config-overrides.yaml";
const FOO_BAR: &str =
    "extensions:\n  sumologic:\n    collector_fields:\n      foo: bar\n      bar: baz\n";
const BAR_ONLY: &str = "extensions:\n  sumologic:\n    collector_fields:\n      bar: baz\n";

/// Get a Command for the otelcol-config binary with logging quiet
fn otelcol_cmd() -> Command {
    let mut cmd = Command::cargo_bin("otelcol-config").expect("Failed to find otelcol-config binary");
    cmd.env_remove("RUST_LOG").env_remove("OTELCOL_CONFIG_DIR");
    cmd
}

fn create_conf_d(root: &Path, files: &[(&str, &str)]) {
    let conf_d = root.join("conf.d");
    fs::create_dir_all(&conf_d).unwrap();
    for (name, content) in files {
        fs::write(conf_d.join(name), content).unwrap();
    }
}

fn read_fragment(root: &Path, name: &str) -> String {
    fs::read_to_string(root.join("conf.d").join(name)).unwrap()
}

#[test]
fn test_help_lists_delete_tag() {
    otelcol_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--delete-tag"))
        .stdout(predicate::str::contains("--override"));
}

#[test]
fn test_no_action_prints_hint() {
    otelcol_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("--help"));
}

#[test]
fn test_delete_tag_from_settings() {
    let temp = TempDir::new().unwrap();
    create_conf_d(temp.path(), &[(SETTINGS, FOO_BAR)]);

    otelcol_cmd()
        .arg("--config")
        .arg(temp.path())
        .args(["--delete-tag", "foo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted tag 'foo'"));

    assert_eq!(read_fragment(temp.path(), SETTINGS), BAR_ONLY);
}

#[test]
fn test_config_dir_from_env() {
    let temp = TempDir::new().unwrap();
    create_conf_d(temp.path(), &[(OVERRIDES, FOO_BAR)]);

    otelcol_cmd()
        .env("OTELCOL_CONFIG_DIR", temp.path())
        .args(["--override", "--delete-tag", "foo"])
        .assert()
        .success();

    assert_eq!(read_fragment(temp.path(), OVERRIDES), BAR_ONLY);
}

#[test]
fn test_override_conflict_fails_without_writing() {
    let temp = TempDir::new().unwrap();
    create_conf_d(
        temp.path(),
        &[(SETTINGS, FOO_BAR), ("user-settings.yaml", FOO_BAR)],
    );

    otelcol_cmd()
        .arg("--config")
        .arg(temp.path())
        .args(["--override", "--delete-tag", "foo"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("user-settings.yaml"));

    assert_eq!(read_fragment(temp.path(), SETTINGS), FOO_BAR);
}

#[test]
fn test_shadowed_tag_warns() {
    let temp = TempDir::new().unwrap();
    create_conf_d(
        temp.path(),
        &[(SETTINGS, FOO_BAR), ("user-settings.yaml", FOO_BAR)],
    );

    otelcol_cmd()
        .arg("--config")
        .arg(temp.path())
        .args(["--delete-tag", "foo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("user-settings.yaml"));

    assert_eq!(read_fragment(temp.path(), SETTINGS), BAR_ONLY);
    assert_eq!(read_fragment(temp.path(), "user-settings.yaml"), FOO_BAR);
}

#[test]
fn test_dry_run_shows_diff() {
    let temp = TempDir::new().unwrap();
    create_conf_d(temp.path(), &[(SETTINGS, FOO_BAR)]);

    otelcol_cmd()
        .arg("--config")
        .arg(temp.path())
        .args(["--delete-tag", "foo", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-      foo: bar"));

    assert_eq!(read_fragment(temp.path(), SETTINGS), FOO_BAR);
}

#[test]
fn test_json_output() {
    let temp = TempDir::new().unwrap();
    create_conf_d(
        temp.path(),
        &[(SETTINGS, FOO_BAR), (OVERRIDES, FOO_BAR)],
    );

    let output = otelcol_cmd()
        .arg("--config")
        .arg(temp.path())
        .args(["--override", "--delete-tag", "foo", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["tag"], "foo");
    assert_eq!(value["changed"], true);
    assert_eq!(value["files"], serde_json::json!([SETTINGS, OVERRIDES]));
}

#[test]
fn test_missing_conf_d_is_success() {
    let temp = TempDir::new().unwrap();

    otelcol_cmd()
        .arg("--config")
        .arg(temp.path())
        .args(["--delete-tag", "foo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to change"));

    assert!(!temp.path().join("conf.d").exists());
}

#[test]
fn test_empty_tag_name_fails() {
    let temp = TempDir::new().unwrap();

    otelcol_cmd()
        .arg("--config")
        .arg(temp.path())
        .args(["--delete-tag", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must not be empty"));
}

#[test]
fn test_override_without_delete_tag_is_rejected() {
    otelcol_cmd()
        .arg("--override")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--delete-tag"));
}
