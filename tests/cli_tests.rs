use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

fn rankings(store: &Path) -> Command {
    let mut cmd = Command::cargo_bin("rankings").unwrap();
    cmd.env_remove("RUST_LOG").arg("--store").arg(store);
    cmd
}

#[test]
fn test_no_arguments_succeeds_silently() {
    Command::cargo_bin("rankings")
        .unwrap()
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_unknown_argument_fails() {
    Command::cargo_bin("rankings")
        .unwrap()
        .arg("--invalid")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--invalid"));
}

#[test]
fn test_append_result_prints_ranking() {
    let temp_dir = TempDir::new().unwrap();
    let store = temp_dir.path().join("results.jsonl");

    rankings(&store)
        .args(["append-result", "--result", "Alice 10, Bob 20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Stored 1 contest result(s)."))
        .stdout(predicate::str::contains("1. Bob, 3 pts"))
        .stdout(predicate::str::contains("2. Alice, 0 pts"));

    assert!(store.exists());
}

#[test]
fn test_invalid_result_fails_with_one_diagnostic_line() {
    let temp_dir = TempDir::new().unwrap();
    let store = temp_dir.path().join("results.jsonl");

    rankings(&store)
        .args(["append-result", "-r", "10, Bob 20"])
        .assert()
        .code(1)
        .stderr(
            "Error in contestant result 1: A result must include names for both contestants. Cannot find a name for contestant 1.\n",
        );

    assert!(!store.exists());
}

#[test]
fn test_append_file_rejects_whole_batch() {
    let temp_dir = TempDir::new().unwrap();
    let store = temp_dir.path().join("results.jsonl");
    let input = temp_dir.path().join("input.txt");
    std::fs::write(&input, "Alice 10, Bob 20\nBadLine\n").unwrap();

    rankings(&store)
        .args(["append-file", "--file"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error in contestant result 2:"));

    assert!(!store.exists());
}

#[test]
fn test_append_file_stores_every_line() {
    let temp_dir = TempDir::new().unwrap();
    let store = temp_dir.path().join("results.jsonl");
    let input = temp_dir.path().join("input.txt");
    std::fs::write(&input, "Alice 10, Bob 20\nCharlie 15, Dana 15\n").unwrap();

    rankings(&store)
        .args(["append-file", "-f"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Stored 2 contest result(s)."))
        .stdout(predicate::str::contains("2. Charlie, 1 pt"));

    let content = std::fs::read_to_string(&store).unwrap();
    assert_eq!(content.lines().count(), 2);
}

#[test]
fn test_append_file_requires_existing_file() {
    let temp_dir = TempDir::new().unwrap();
    let store = temp_dir.path().join("results.jsonl");

    rankings(&store)
        .args(["append-file", "--file"])
        .arg(temp_dir.path().join("missing.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_clear_then_show_reports_no_data() {
    let temp_dir = TempDir::new().unwrap();
    let store = temp_dir.path().join("results.jsonl");

    rankings(&store)
        .args(["append-result", "-r", "Alice 1, Bob 1"])
        .assert()
        .success();

    rankings(&store)
        .arg("clear-contest-results")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contest results cleared."));

    rankings(&store)
        .arg("show-rankings")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Cannot display the ranking table because no results exist",
        ));
}

#[test]
fn test_config_file_sets_points() {
    let temp_dir = TempDir::new().unwrap();
    let store = temp_dir.path().join("results.jsonl");
    let config = temp_dir.path().join("rankings.toml");
    std::fs::write(&config, "[points]\nwin = 2\n").unwrap();

    rankings(&store)
        .arg("--config")
        .arg(&config)
        .args(["append-result", "-r", "Alice 1, Bob 0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Alice, 2 pts"));
}
