use assert_cmd::Command;
use predicates::prelude::*;

fn lime_cmd() -> Command {
    Command::cargo_bin("lime").unwrap()
}

#[test]
fn test_help_flag() {
    lime_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Scoped search highlighting"));
}

#[test]
fn test_version_flag() {
    lime_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("lime"));
}

#[test]
fn test_renders_stdin_with_a_query() {
    lime_cmd()
        .args(["-q", "alpha"])
        .write_stdin("<p>alpha</p>")
        .assert()
        .success()
        .stdout(predicate::str::contains("<mark class=\"bg-cyan-500/30"))
        .stdout(predicate::str::contains("&lt;p&gt;"));
}

#[test]
fn test_no_query_renders_escape_only() {
    lime_cmd()
        .write_stdin("<p>alpha</p>")
        .assert()
        .success()
        .stdout(predicate::str::contains("&lt;p&gt;alpha&lt;/p&gt;"))
        .stdout(predicate::str::contains("<mark").not());
}

#[test]
fn test_sample_document_renders() {
    lime_cmd()
        .args(["--sample", "-q", "highlight"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<mark class=\"bg-cyan-500/30"))
        .stdout(predicate::str::contains("<span class=\"line\">"));
}

#[test]
fn test_scoped_rendering_from_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("page.html");
    std::fs::write(&path, "<div class=\"zone\">needle</div><p>needle</p>").unwrap();

    lime_cmd()
        .arg(&path)
        .args(["-q", "needle", "-s", "div.zone"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<mark"))
        .stdout(predicate::str::contains("&lt;p&gt;needle&lt;/p&gt;"));
}

#[test]
fn test_missing_file_fails() {
    lime_cmd()
        .arg("does-not-exist.html")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn test_invalid_selector_warns_and_falls_back() {
    lime_cmd()
        .args(["-q", "alpha", "-s", "p >"])
        .write_stdin("<p>alpha</p>")
        .assert()
        .success()
        .stderr(predicate::str::contains("Invalid CSS selector."))
        .stdout(predicate::str::contains("<mark"));
}

#[test]
fn test_json_reports_strategy_and_selector() {
    let assert = lime_cmd()
        .args(["--json", "-q", "alpha", "-s", "p"])
        .write_stdin("<p>alpha</p>")
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["strategy"], "scoped");
    assert_eq!(value["marker_count"], 1);
    assert_eq!(value["selector"]["valid"], true);
    assert_eq!(value["selector"]["message"], serde_json::Value::Null);
}

#[test]
fn test_json_reports_an_invalid_selector() {
    let assert = lime_cmd()
        .args(["--json", "-q", "alpha", "-s", "div["])
        .write_stdin("<p>alpha</p>")
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["strategy"], "plain");
    assert_eq!(value["selector"]["valid"], false);
    assert_eq!(value["selector"]["message"], "Invalid CSS selector.");
}

#[test]
fn test_page_output_is_a_full_document() {
    lime_cmd()
        .args(["--sample", "--page"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
        .stdout(predicate::str::contains("<span class=\"line\">"));
}

#[test]
fn test_recover_round_trips_a_rendering() {
    let source = "<div>\n  a & b\n</div>";
    let rendered = lime_cmd()
        .args(["-q", "a"])
        .write_stdin(source)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    lime_cmd()
        .arg("--recover")
        .write_stdin(rendered)
        .assert()
        .success()
        .stdout(source);
}

#[test]
fn test_output_modes_conflict() {
    lime_cmd()
        .args(["--sample", "--json", "--page"])
        .assert()
        .failure();
}

#[test]
fn test_completions_generate() {
    lime_cmd()
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lime"));
}
