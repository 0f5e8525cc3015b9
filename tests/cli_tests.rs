//! End-to-end tests of the `fault-bag` binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn fault_bag() -> Command {
    assert_cmd::cargo::cargo_bin_cmd!("fault-bag")
}

#[test]
fn test_solves_stdin_by_default() {
    fault_bag()
        .write_stdin("2 2\n0.5 1\n0.7 1\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("0.85"))
        .stdout(predicate::str::ends_with("[0 1]\n"));
}

#[test]
fn test_only_one_fits() {
    fault_bag()
        .arg("solve")
        .write_stdin("2 1\n0.5 1\n0.7 1\n")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("[1]\n"));
}

#[test]
fn test_nothing_affordable() {
    fault_bag()
        .arg("solve")
        .write_stdin("1 4\n0.9 5\n")
        .assert()
        .success()
        .stdout("0 []\n");
}

#[test]
fn test_solves_file_with_search() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "3 4\n0.5 2\n0.5 2\n0.6 3\n").unwrap();

    fault_bag()
        .args(["solve", "--method", "search"])
        .arg(file.path())
        .assert()
        .success()
        .stdout("0.75 [0 1]\n");
}

#[test]
fn test_missing_file() {
    fault_bag()
        .args(["solve", "/nonexistent/problem.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to open"));
}

#[test]
fn test_malformed_input_reports_line() {
    fault_bag()
        .write_stdin("2 2\n0.5 1\nhalf 1\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 3"))
        .stderr(predicate::str::contains("expected probability"));
}

#[test]
fn test_out_of_range_probability_rejected() {
    fault_bag()
        .write_stdin("1 2\n1.2 1\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("outside of 0..=1"));
}

#[test]
fn test_search_rejects_large_input() {
    let mut input = String::from("30 10\n");
    for _ in 0..30 {
        input.push_str("0.1 1\n");
    }
    fault_bag()
        .args(["solve", "-m", "search"])
        .write_stdin(input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("at most 25 trials"));
}

#[test]
fn test_check_with_seed_is_accepted() {
    fault_bag()
        .args(["check", "--rounds", "5", "--trials", "8", "--seed", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Test 5: true"))
        .stdout(predicate::str::ends_with("accepted\n"));
}

#[test]
fn test_check_rejects_zero_trial_time() {
    fault_bag()
        .args(["check", "--max-trial-time", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("maximum trial time must be positive"));
}

#[test]
fn test_huge_budget() {
    fault_bag()
        .write_stdin("2 100000000000000\n0.5 1\n0.7 1\n")
        .assert()
        .success()
        .stdout("0.85 [0 1]\n");
}

#[test]
fn test_negative_budget_warns() {
    fault_bag()
        .write_stdin("1 -3\n0.5 1\n")
        .assert()
        .success()
        .stdout("0 []\n")
        .stderr(predicate::str::contains("negative time budget, nothing fits"));
}

#[test]
fn test_help() {
    fault_bag()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}
