use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn homeplan(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("homeplan").unwrap();
    cmd.arg("--dir").arg(dir);
    cmd
}

fn stdout_json(mut cmd: Command) -> serde_json::Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).unwrap()
}

#[test]
fn first_run_seeds_the_default_catalog() {
    let dir = tempdir().unwrap();
    let mut cmd = homeplan(dir.path());
    cmd.arg("list");
    let tasks = stdout_json(cmd);
    assert_eq!(tasks.as_array().unwrap().len(), 24);
}

#[test]
fn add_then_list_filtered_by_category() {
    let dir = tempdir().unwrap();

    let mut cmd = homeplan(dir.path());
    cmd.args([
        "add",
        "Gutter Guard Install",
        "--minutes",
        "35",
        "--category",
        "home-safety",
        "--frequency",
        "annual",
    ]);
    let added = stdout_json(cmd);
    assert_eq!(added["category"], "Home Safety");
    assert_eq!(added["minutes"], 35);

    let mut cmd = homeplan(dir.path());
    cmd.args(["list", "--category", "home-safety"]);
    let tasks = stdout_json(cmd);
    let names: Vec<&str> = tasks
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"Gutter Guard Install"));
    assert!(
        tasks
            .as_array()
            .unwrap()
            .iter()
            .all(|t| t["category"] == "Home Safety")
    );
}

#[test]
fn add_with_zero_minutes_is_rejected() {
    let dir = tempdir().unwrap();
    homeplan(dir.path())
        .args([
            "add",
            "Broken",
            "--minutes",
            "0",
            "--category",
            "plumbing",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("task_rejected"));
}

#[test]
fn limit_defaults_sets_and_normalizes_zero() {
    let dir = tempdir().unwrap();

    let mut cmd = homeplan(dir.path());
    cmd.arg("limit");
    assert_eq!(stdout_json(cmd)["limit"], 75);

    let mut cmd = homeplan(dir.path());
    cmd.args(["limit", "90"]);
    assert_eq!(stdout_json(cmd)["limit"], 90);

    let mut cmd = homeplan(dir.path());
    cmd.arg("limit");
    assert_eq!(stdout_json(cmd)["limit"], 90);

    let mut cmd = homeplan(dir.path());
    cmd.args(["limit", "0"]);
    assert_eq!(stdout_json(cmd)["limit"], 75);
}

#[test]
fn assign_shows_up_in_plan_totals() {
    let dir = tempdir().unwrap();

    let mut cmd = homeplan(dir.path());
    cmd.arg("list");
    let tasks = stdout_json(cmd);
    let fridge = tasks
        .as_array()
        .unwrap()
        .iter()
        .find(|t| t["name"] == "Refrigerator Filter")
        .unwrap()["id"]
        .as_str()
        .unwrap()
        .to_string();

    let mut cmd = homeplan(dir.path());
    cmd.args(["assign", "jan-feb", &fridge]);
    let grid = stdout_json(cmd);
    assert_eq!(grid["periods"][0]["period"], "Jan - Feb");
    assert_eq!(grid["periods"][0]["total_minutes"], 5);
    assert_eq!(grid["periods"][0]["over_limit"], false);

    let mut cmd = homeplan(dir.path());
    cmd.args(["unassign", "jan-feb", &fridge]);
    let grid = stdout_json(cmd);
    assert_eq!(grid["periods"][0]["total_minutes"], 0);
}

#[test]
fn remove_unknown_task_fails_with_not_found() {
    let dir = tempdir().unwrap();
    homeplan(dir.path())
        .args(["remove", "no-such-id"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("task_not_found"));
}

#[test]
fn print_reports_the_empty_state_until_something_is_assigned() {
    let dir = tempdir().unwrap();

    let mut cmd = homeplan(dir.path());
    cmd.arg("print");
    assert_eq!(stdout_json(cmd)["empty"], true);

    let mut cmd = homeplan(dir.path());
    cmd.arg("list");
    let tasks = stdout_json(cmd);
    let id = tasks.as_array().unwrap()[0]["id"].as_str().unwrap().to_string();

    homeplan(dir.path())
        .args(["assign", "may-jun", &id])
        .assert()
        .success();

    let mut cmd = homeplan(dir.path());
    cmd.arg("print");
    let sections = stdout_json(cmd);
    assert_eq!(sections.as_array().unwrap().len(), 1);
    assert_eq!(sections[0]["period"], "May - Jun");
}
