use assert_cmd::Command;
use predicates::prelude::*;

fn glyphpad_cmd() -> Command {
    Command::cargo_bin("glyphpad").expect("binary exists")
}

#[test]
fn help_prints_usage() {
    glyphpad_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Sticker sketchpad with marker strokes, undo/redo, and PNG export",
        ));
}

#[test]
fn version_prints_package_version() {
    glyphpad_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn rejects_non_numeric_canvas_size() {
    glyphpad_cmd()
        .args(["--width", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
