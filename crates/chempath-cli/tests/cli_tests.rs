use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures/reactions.txt")
        .canonicalize()
        .expect("fixture reactions present")
}

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("chempath");
    cmd.env_remove("CHEMPATH_REACTIONS").env("RUST_LOG", "error");
    cmd
}

fn with_fixture() -> Command {
    let mut cmd = cli();
    cmd.arg("--reactions").arg(fixture_path());
    cmd
}

#[test]
fn list_prints_every_reaction() {
    with_fixture()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Chemical Reaction Network Graph:"))
        .stdout(predicate::str::contains("Methane --[4]--> Chloromethane"))
        .stdout(predicate::str::contains("Ethanol --[6.5]--> EthylAcetate"));
}

#[test]
fn list_json_is_an_array_of_reactions() {
    let output = with_fixture()
        .args(["--format", "json", "list"])
        .output()
        .expect("command runs");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    let reactions = value.as_array().expect("array of reactions");
    assert_eq!(reactions.len(), 13);
    assert_eq!(reactions[0]["source"], "Methane");
    assert_eq!(reactions[0]["target"], "Chloromethane");
    assert_eq!(reactions[0]["cost"], 4.0);
}

#[test]
fn pathway_reports_minimum_cost() {
    with_fixture()
        .args(["pathway", "--from", "Methane", "--to", "FormicAcid"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Pathway: Methane -> FormicAcid (4 reactions, cost 10, algorithm: dijkstra)",
        ))
        .stdout(predicate::str::contains("  1: Chloromethane"));
}

#[test]
fn bfs_algorithm_is_supported() {
    with_fixture()
        .args(["pathway", "--from", "Ethene", "--to", "EthylAcetate"])
        .args(["--algorithm", "bfs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 reactions, cost 9.5, algorithm: bfs"));
}

#[test]
fn pathway_json_output() {
    let output = with_fixture()
        .args(["--format", "json", "pathway", "--from", "Ethene", "--to", "AceticAcid"])
        .output()
        .expect("command runs");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(value["total_cost"], 5.5);
    assert_eq!(value["reactions"], 3);
    assert_eq!(value["steps"][3]["compound"], "AceticAcid");
}

#[test]
fn avoid_and_max_cost_constraints_apply() {
    with_fixture()
        .args(["pathway", "--from", "Methane", "--to", "FormicAcid"])
        .args(["--avoid", "Chloromethane", "--max-cost", "8"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cost 11.5"))
        .stdout(predicate::str::contains("Chloromethane").not());
}

#[test]
fn unknown_compound_error_is_friendly() {
    with_fixture()
        .args(["pathway", "--from", "Methanl", "--to", "FormicAcid"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown compound 'Methanl'"))
        .stderr(predicate::str::contains("Did you mean"));
}

#[test]
fn pathway_not_found_error_suggests_next_steps() {
    with_fixture()
        .args(["pathway", "--from", "FormicAcid", "--to", "Methane"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "No pathway found between FormicAcid and Methane.",
        ))
        .stderr(predicate::str::contains("Try a different algorithm"));
}

#[test]
fn reactions_can_come_from_stdin_and_env() {
    cli()
        .args(["pathway", "--from", "A", "--to", "C"])
        .write_stdin("A B 1\nB C 2\nA C 5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("cost 3"));

    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("reactions.txt");
    fs::write(&path, "A B 2\nA B 1\n").expect("write reactions");

    cli()
        .env("CHEMPATH_REACTIONS", &path)
        .args(["pathway", "--from", "A", "--to", "B"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cost 1,"));
}

#[test]
fn malformed_lines_are_reported_but_not_fatal() {
    cli()
        .args(["--reactions", "-", "list"])
        .write_stdin("A B 1\nA B\nB C -4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("A --[1]--> B"))
        .stderr(predicate::str::contains("Skipped line 2"))
        .stderr(predicate::str::contains("Skipped line 3"));
}

#[test]
fn missing_reactions_file_fails_with_context() {
    let dir = tempdir().expect("create temp dir");
    cli()
        .arg("--reactions")
        .arg(dir.path().join("absent.txt"))
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to open reactions file"));
}

#[test]
fn interactive_session_matches_prompt_flow() {
    cli()
        .arg("interactive")
        .write_stdin("A B 1\nB C 2\nA C 5\nbad line\ndone\nA\nC\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid input format"))
        .stdout(predicate::str::contains("A --[5]--> C"))
        .stdout(predicate::str::contains(
            "Shortest Reaction Pathway: A -> B -> C",
        ))
        .stdout(predicate::str::contains("Total Reaction Cost: 3"));
}

#[test]
fn interactive_session_reports_missing_pathway() {
    cli()
        .arg("interactive")
        .write_stdin("A B 1\ndone\nB\nA\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No pathway found between the specified compounds.",
        ));
}
