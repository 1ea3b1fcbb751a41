use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn solve_outputs_right_steps() {
    let mut cmd = Command::cargo_bin("slide-maze").unwrap();
    cmd.arg("puzzle_1.txt");

    cmd.assert()
        .success()
        .stdout(str::contains("1. Start at (1, 1)"))
        .stdout(str::contains("2. Move to Right (2, 1)"))
        .stdout(str::contains("3. Move to Down (2, 3)"))
        .stdout(str::contains("4. Move to Right (3, 3)"))
        .stdout(str::contains("5. Done!"))
        .stdout(str::contains("Time taken:"));
}

#[test]
fn solve_reports_missing_file() {
    let mut cmd = Command::cargo_bin("slide-maze").unwrap();
    cmd.arg("no_such_puzzle.txt");

    cmd.assert()
        .failure()
        .stderr(str::contains("no_such_puzzle.txt"));
}
