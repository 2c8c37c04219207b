//! End-to-end tests for the `workout-planner` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn planner() -> Command {
    let mut cmd = Command::cargo_bin("workout-planner").unwrap();
    cmd.env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("WORKOUT_PLANNER_NO_PAUSE");
    cmd
}

#[test]
fn prints_five_days_and_statistics() {
    planner()
        .arg("--no-pause")
        .assert()
        .success()
        .stdout(predicate::str::contains("Using the Strategy Pattern to provide different workout plans"))
        .stdout(predicate::str::contains("[DAY 1] Your workout plan:\nStrength Training Plan:"))
        .stdout(predicate::str::contains("[DAY 2] Switching to Cardio Training:\nCardio Training Plan:"))
        .stdout(predicate::str::contains("[DAY 5] Back to Cardio Training:\nCardio Training Plan:"))
        .stdout(predicate::str::contains(
            "--- Workout Strategy Usage Statistics ---\n\
Strength Training: Used 2 times\n\
Cardio Training: Used 2 times\n\
Flexibility Training: Used 1 times\n\
--------------------------------------\n",
        ))
        .stdout(predicate::str::contains("Press any key to exit...").not());
}

#[test]
fn piped_stdin_prompts_without_blocking() {
    planner()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("\nPress any key to exit...\n"));
}

#[test]
fn json_report() {
    let output = planner()
        .args(["--no-pause", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let json_start = stdout.find('{').unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout[json_start..]).unwrap();

    let counts: Vec<(String, u64)> = value["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| (e["name"].as_str().unwrap().to_string(), e["count"].as_u64().unwrap()))
        .collect();
    assert_eq!(
        counts,
        vec![
            ("Strength Training".to_string(), 2),
            ("Cardio Training".to_string(), 2),
            ("Flexibility Training".to_string(), 1),
        ]
    );
}

#[test]
fn list_does_not_run_schedule() {
    planner()
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Strength Training"))
        .stdout(predicate::str::contains("tags: mobility, recovery"))
        .stdout(predicate::str::contains("[DAY").not());
}
