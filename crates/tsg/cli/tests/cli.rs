//! Smoke tests for the `tsg` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn write_entry(dir: &std::path::Path) {
    std::fs::write(dir.join("tailwind.css"), "@import \"tailwindcss\";\n").unwrap();
}

fn write_engine(dir: &std::path::Path, version: &str) {
    let base = dir.join("node_modules/@tailwindcss/node");
    std::fs::create_dir_all(&base).unwrap();
    std::fs::write(
        base.join("package.json"),
        format!("{{ \"version\": \"{version}\" }}"),
    )
    .unwrap();
    std::fs::create_dir_all(dir.join("node_modules/.bin")).unwrap();
    std::fs::write(dir.join("node_modules/.bin/tailwindcss"), "#!/bin/sh\nexit 0\n").unwrap();
}

#[test]
fn help_lists_every_flag() {
    Command::cargo_bin("tsg")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--no-docs"))
        .stdout(predicate::str::contains("--no-arbitrary-value"))
        .stdout(predicate::str::contains("--no-soft-variants"))
        .stdout(predicate::str::contains("--nest-groups"))
        .stdout(predicate::str::contains("--store"))
        .stdout(predicate::str::contains("--disable-variants"));
}

#[test]
fn missing_entry_fails_with_discovery_message() {
    let temp_dir = tempfile::tempdir().unwrap();
    Command::cargo_bin("tsg")
        .unwrap()
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No entry stylesheet"));
}

#[test]
fn missing_engine_fails_after_entry_is_found() {
    let temp_dir = tempfile::tempdir().unwrap();
    write_entry(temp_dir.path());

    Command::cargo_bin("tsg")
        .unwrap()
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Engine package"));
}

#[test]
fn old_engine_version_is_rejected() {
    let temp_dir = tempfile::tempdir().unwrap();
    write_entry(temp_dir.path());
    write_engine(temp_dir.path(), "3.4.17");

    Command::cargo_bin("tsg")
        .unwrap()
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("below the supported minimum"));
}

#[cfg(unix)]
#[test]
fn generates_schema_with_stub_engine() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = tempfile::tempdir().unwrap();
    write_entry(temp_dir.path());
    write_engine(temp_dir.path(), "4.1.0");

    // stub engine that prints two utility rules
    let engine = temp_dir.path().join("node_modules/.bin/tailwindcss");
    std::fs::write(
        &engine,
        "#!/bin/sh\nprintf '.flex { display: flex; }\\n.p-4 { padding: 1rem; }\\n'\n",
    )
    .unwrap();
    let mut perms = std::fs::metadata(&engine).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&engine, perms).unwrap();

    Command::cargo_bin("tsg")
        .unwrap()
        .current_dir(temp_dir.path())
        .assert()
        .success();

    let schema = std::fs::read_to_string(temp_dir.path().join("tailwind.json")).unwrap();
    assert!(schema.contains("\"display\""));
    assert!(schema.contains("\"flex\""));
    assert!(schema.contains("\"padding\""));
    assert!(schema.contains("\"4.1.0\""));
}
