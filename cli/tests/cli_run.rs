use std::path::Path;
use std::process::{Command, Output};

use pretty_assertions::assert_eq;

fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_daily-tasks"))
        .args(args)
        .current_dir(dir)
        .env("HOME", dir)
        .env_remove("USERPROFILE")
        .env_remove("RUST_LOG")
        .env_remove("DAILY_TASKS_START")
        .env_remove("DAILY_TASKS_END")
        .env_remove("DAILY_TASKS_LOG")
        .output()
        .expect("failed to run daily-tasks")
}

fn stdout(out: &Output) -> String {
    String::from_utf8(out.stdout.clone()).unwrap()
}

#[test]
fn file_source_prints_report() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("tasks.txt"), "test 1\n  test 2  \ntest 3\n").unwrap();

    let out = run_in(dir.path(), &["--file", "tasks.txt"]);
    assert!(out.status.success());
    assert_eq!(
        stdout(&out),
        "Start Time: 9:00\nEnd Time: 21:00\nTasks: ['test 1', 'test 2', 'test 3']\n"
    );
}

#[test]
fn inline_source_with_window() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_in(
        dir.path(),
        &["-s", "8:00", "-e", "whenever", "-t", "task 1, task 2; task 3"],
    );
    assert!(out.status.success());
    assert_eq!(
        stdout(&out),
        "Start Time: 8:00\nEnd Time: whenever\nTasks: ['task 1', 'task 2', 'task 3']\n"
    );
}

#[test]
fn invalid_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_in(dir.path(), &["-f", "invalidfile.txt"]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(
        stdout(&out),
        "Error: File 'invalidfile.txt' is not valid or readable.\n"
    );
}

#[test]
fn empty_task_string_reports_no_tasks() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_in(dir.path(), &["--tasks", ""]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(
        stdout(&out),
        "Error: No tasks provided.\nStart Time: None\nEnd Time: None\nTasks: None\n"
    );
}

#[test]
fn empty_file_path_reports_no_tasks() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_in(dir.path(), &["--file", ""]);
    assert_eq!(out.status.code(), Some(0));
    assert!(stdout(&out).starts_with("Error: No tasks provided.\n"));
}

#[test]
fn whitespace_task_string_fails() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_in(dir.path(), &["--tasks", "   "]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(stdout(&out), "Error: Task string '   ' is not valid.\n");
}

#[test]
fn missing_source_is_a_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_in(dir.path(), &["-s", "9:00"]);
    assert!(!out.status.success());
    assert!(stdout(&out).is_empty());
}

#[test]
fn local_config_supplies_defaults() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("daily-tasks.toml"),
        "[defaults]\nstart = \"6:00\"\n\n[input]\ndelimiters = \"|\"\n",
    )
    .unwrap();

    let out = run_in(dir.path(), &["-t", "a, b | c", "--format", "json"]);
    assert!(out.status.success());
    assert_eq!(
        stdout(&out),
        "{\"start_time\":\"6:00\",\"end_time\":\"21:00\",\"tasks\":[\"a, b\",\"c\"]}\n"
    );
}

#[test]
fn bad_explicit_config_exits_with_config_code() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("bad.toml"), "[defaults\n").unwrap();
    let out = run_in(dir.path(), &["--config", "bad.toml", "-t", "a"]);
    assert_eq!(out.status.code(), Some(11));
    assert!(stdout(&out).is_empty());
}
