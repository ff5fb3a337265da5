//! Integration tests for the `init` command.

mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn init_creates_config_file() {
    let fixture = TestFixture::new();

    sloc_scan!()
        .current_dir(fixture.path())
        .args(["init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));

    assert!(fixture.path().join(".sloc-scan.toml").exists());
}

#[test]
fn init_generated_config_is_loadable() {
    let fixture = TestFixture::new();
    fixture.create_file("src/Main.java", "int x = 1;\n");

    sloc_scan!()
        .current_dir(fixture.path())
        .args(["init"])
        .assert()
        .success();

    sloc_scan!()
        .current_dir(fixture.path())
        .args(["count"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lines of code: 1"));
}

#[test]
fn init_refuses_to_overwrite() {
    let fixture = TestFixture::new();
    fixture.create_config("extensions = [\"java\"]\n");

    sloc_scan!()
        .current_dir(fixture.path())
        .args(["init"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn init_force_overwrites() {
    let fixture = TestFixture::new();
    fixture.create_config("extensions = [\"java\"]\n");

    sloc_scan!()
        .current_dir(fixture.path())
        .args(["init", "--force"])
        .assert()
        .success();

    let content = std::fs::read_to_string(fixture.path().join(".sloc-scan.toml")).unwrap();
    assert!(content.contains("[exclude]"));
}

#[test]
fn init_custom_output_path() {
    let fixture = TestFixture::new();

    sloc_scan!()
        .current_dir(fixture.path())
        .args(["init", "--output", "custom.toml"])
        .assert()
        .success();

    assert!(fixture.path().join("custom.toml").exists());
}
