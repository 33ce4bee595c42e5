use assert_cmd::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const POEM: &str = "\
this knowledge graph
  is a graph
a graph
  has nodes
  has edges
edges
  have labels
";

/// Helper to create a `poetry` command that runs in an isolated temp directory.
fn poetry_cmd(work_dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("poetry");
    cmd.current_dir(work_dir.path());
    cmd.env("NO_COLOR", "1");
    cmd
}

fn write_poem(work_dir: &TempDir) -> std::path::PathBuf {
    let path = work_dir.path().join("graph.poem");
    fs::write(&path, POEM).unwrap();
    path
}

// ============================================================================
// Happy path tests
// ============================================================================

#[test]
fn version_flag() {
    cargo_bin_cmd!("poetry")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("poetry"));
}

#[test]
fn help_flag() {
    cargo_bin_cmd!("poetry")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("graph"))
        .stdout(predicate::str::contains("triples"))
        .stdout(predicate::str::contains("fmt"));
}

#[test]
fn graph_json_from_file() {
    let tmp = TempDir::new().unwrap();
    let path = write_poem(&tmp);

    let output = poetry_cmd(&tmp)
        .args(["graph", "--compact"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["nodes"].as_array().unwrap().len(), 5);
    assert_eq!(json["edges"].as_array().unwrap().len(), 4);
    assert_eq!(json["nodes"][0], "this knowledge graph");
}

#[test]
fn graph_from_inline_expr() {
    let tmp = TempDir::new().unwrap();
    poetry_cmd(&tmp)
        .args(["graph", "--format", "table", "-e", "alice\n  knows bob"])
        .assert()
        .success()
        .stdout(predicate::str::contains("alice"))
        .stdout(predicate::str::contains("knows"))
        .stdout(predicate::str::contains("bob"));
}

#[test]
fn graph_from_stdin() {
    let tmp = TempDir::new().unwrap();
    poetry_cmd(&tmp)
        .args(["graph", "--format", "dot"])
        .write_stdin(POEM)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("digraph {"))
        .stdout(predicate::str::contains("label = \"have\""));
}

#[test]
fn empty_input_yields_empty_graph() {
    let tmp = TempDir::new().unwrap();
    poetry_cmd(&tmp)
        .args(["graph", "--compact"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"{"nodes":[],"edges":[],"labels":[]}"#,
        ));
}

#[test]
fn triples_json() {
    let tmp = TempDir::new().unwrap();
    poetry_cmd(&tmp)
        .args(["triples", "--compact", "-e", "edges\n  have labels"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""@id":"edges""#))
        .stdout(predicate::str::contains(r#""have":[{"@id":"labels"}]"#));
}

#[test]
fn fmt_canonicalizes() {
    let tmp = TempDir::new().unwrap();
    poetry_cmd(&tmp)
        .args(["fmt", "-e", "alice   \n\n      knows    bob"])
        .assert()
        .success()
        .stdout("alice\n  knows bob\nbob\n");
}

#[test]
fn config_file_sets_default_format() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("poetry.toml"),
        "[output]\nformat = \"table\"\n",
    )
    .unwrap();

    poetry_cmd(&tmp)
        .args(["graph", "-e", "alice\n  knows bob"])
        .assert()
        .success()
        .stdout(predicate::str::contains("predicate"));

    // CLI flag wins over the file
    poetry_cmd(&tmp)
        .args(["graph", "--format", "json", "-e", "alice\n  knows bob"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"nodes\""));
}

// ============================================================================
// Error path tests
// ============================================================================

#[test]
fn verbose_quiet_conflict() {
    cargo_bin_cmd!("poetry")
        .args(["--verbose", "--quiet", "graph", "-e", "a"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn missing_file_fails() {
    let tmp = TempDir::new().unwrap();
    poetry_cmd(&tmp)
        .args(["graph", "does-not-exist.poem"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn missing_explicit_config_fails() {
    let tmp = TempDir::new().unwrap();
    poetry_cmd(&tmp)
        .args(["--config", "nope.toml", "graph", "-e", "a"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn malformed_config_fails() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("poetry.toml"), "[output]\nformat = \"svg\"\n").unwrap();

    poetry_cmd(&tmp)
        .args(["graph", "-e", "a"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid config file"));
}

#[test]
fn invalid_utf8_fails() {
    let tmp = TempDir::new().unwrap();
    poetry_cmd(&tmp)
        .arg("graph")
        .write_stdin(vec![0x61u8, 0xff, 0x0a])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not valid UTF-8"));
}
