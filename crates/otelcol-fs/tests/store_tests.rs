//! DirStore behaviour against a real directory

use otelcol_fs::{DirStore, FragmentStore};
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::fs;
use tempfile::TempDir;

#[test]
fn missing_directory_lists_nothing() {
    let temp = TempDir::new().unwrap();
    let store = DirStore::new(temp.path().join("conf.d"));

    assert_eq!(store.list().unwrap(), Vec::<String>::new());
    assert!(store.read("00-otelcol-config-settings.yaml").unwrap().is_none());
}

#[test]
fn list_returns_sorted_yaml_files_only() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("99-otelcol-config-overrides.yaml"), "").unwrap();
    fs::write(temp.path().join("00-otelcol-config-settings.yaml"), "").unwrap();
    fs::write(temp.path().join("user.yml"), "").unwrap();
    fs::write(temp.path().join("README.md"), "").unwrap();
    fs::create_dir(temp.path().join("nested.yaml")).unwrap();

    let store = DirStore::new(temp.path());
    assert_eq!(
        store.list().unwrap(),
        vec![
            "00-otelcol-config-settings.yaml",
            "99-otelcol-config-overrides.yaml",
            "user.yml",
        ]
    );
}

#[test]
fn write_then_read_round_trips_bytes() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("settings.yaml"), "old: 1\n").unwrap();

    let mut store = DirStore::new(temp.path());
    store.write("settings.yaml", b"new: 2\n").unwrap();

    assert_eq!(
        store.read("settings.yaml").unwrap().as_deref(),
        Some(&b"new: 2\n"[..])
    );
}

#[rstest]
#[case("../escape.yaml")]
#[case("sub/dir.yaml")]
#[case("..")]
#[case("")]
fn names_outside_the_directory_are_rejected(#[case] name: &str) {
    let temp = TempDir::new().unwrap();
    let mut store = DirStore::new(temp.path());

    assert!(store.read(name).is_err());
    assert!(store.write(name, b"x").is_err());
}

#[cfg(unix)]
#[test]
fn symlinked_fragment_is_listed() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("real.yaml");
    fs::write(&target, "a: 1\n").unwrap();
    std::os::unix::fs::symlink(&target, temp.path().join("link.yaml")).unwrap();

    let store = DirStore::new(temp.path());
    assert_eq!(store.list().unwrap(), vec!["link.yaml", "real.yaml"]);
}

#[cfg(unix)]
#[test]
fn write_through_symlink_updates_target() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("real-settings.yaml");
    let link = temp.path().join("00-otelcol-config-settings.yaml");
    fs::write(&target, "foo: bar\n").unwrap();
    std::os::unix::fs::symlink(&target, &link).unwrap();

    let mut store = DirStore::new(temp.path());
    store.write("00-otelcol-config-settings.yaml", b"bar: baz\n").unwrap();

    assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
    assert_eq!(fs::read_to_string(&target).unwrap(), "bar: baz\n");
    assert_eq!(
        store.read("00-otelcol-config-settings.yaml").unwrap().as_deref(),
        Some(&b"bar: baz\n"[..])
    );
}
