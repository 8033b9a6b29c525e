use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::{SystemTime, UNIX_EPOCH};

fn temp_path(file_name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("taskbot-{nanos}-{file_name}"))
}

fn run_session(input: &str, store_path: &PathBuf) -> std::process::Output {
    let exe = env!("CARGO_BIN_EXE_taskbot");

    let mut child = Command::new(exe)
        .env("TASKBOT_DATA_PATH", store_path)
        .env("TASKBOT_CONFIG_PATH", temp_path("no-config.json"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn interactive session");

    {
        let stdin = child.stdin.as_mut().expect("stdin");
        stdin
            .write_all(input.as_bytes())
            .expect("failed to write to stdin");
    }

    child
        .wait_with_output()
        .expect("failed to read interactive output")
}

fn run_cleaned(input: &str) -> std::process::Output {
    let store_path = temp_path("chat-session.txt");
    let output = run_session(input, &store_path);
    std::fs::remove_file(&store_path).ok();
    output
}

#[test]
fn greets_and_says_goodbye() {
    let output = run_cleaned("bye\n");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Hello! I'm Taskbot"));
    assert!(stdout.contains("Bye. Hope to see you again soon!"));
}

#[test]
fn help_shows_the_command_table() {
    let output = run_cleaned("help\nbye\n");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("deadline DESC /by DATE"));
    assert!(stdout.contains("find KEYWORD"));
}

#[test]
fn unrecognized_command_prints_error_and_continues() {
    let output = run_cleaned("whatchu sayin\nlist\nbye\n");
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERROR: invalid_input"));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No outstanding tasks."));
}

#[test]
fn add_mark_list_flow() {
    let output = run_cleaned("todo buy milk\ntodo buy bread\nmark 1\nlist\nbye\n");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Got it. I've added this task:"));
    assert!(stdout.contains("Nice! I've marked this task as done:"));
    assert!(stdout.contains("1. [T][X] buy milk"));
    assert!(stdout.contains("2. [T][ ] buy bread"));
}

#[test]
fn delete_renumbers_the_list() {
    let output = run_cleaned("todo first\ntodo second\ntodo third\ndelete 2\nlist\nbye\n");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Noted. I've removed this task:"));
    assert!(stdout.contains("1. [T][ ] first\n2. [T][ ] third"));
}

#[test]
fn mark_on_empty_list_names_zero_tasks() {
    let output = run_cleaned("mark 99\nbye\n");
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("you only have 0 tasks."));
}

#[test]
fn find_returns_only_matching_tasks() {
    let output = run_cleaned("todo buy milk\ntodo buy bread\nfind milk\nbye\n");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("1. [T][ ] buy milk"));
    assert!(!stdout.contains("buy bread\n2."));
    let find_section = stdout
        .split("1. [T][ ] buy milk")
        .last()
        .unwrap_or_default();
    assert!(!find_section.contains("buy bread"));
}

#[test]
fn reversed_event_range_is_rejected() {
    let output = run_cleaned("event trip /from 2024-02-10 /to 2024-02-01\nlist\nbye\n");
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("start date must be before end date"));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No outstanding tasks."));
}

#[test]
fn sort_orders_by_date_without_touching_the_list() {
    let output = run_cleaned(
        "deadline late /by 2024-06-01\ntodo undated\ndeadline early /by 2024-01-01\nsort\nlist\nbye\n",
    );
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    // sorted view: undated first, then by date
    assert!(stdout.contains("1. [T][ ] undated\n2. [D][ ] early (by: 2024-01-01)\n3. [D][ ] late (by: 2024-06-01)"));
    // stored order unchanged
    assert!(stdout.contains("1. [D][ ] late (by: 2024-06-01)\n2. [T][ ] undated\n3. [D][ ] early (by: 2024-01-01)"));
}

#[test]
fn session_ends_on_eof_without_bye() {
    let output = run_cleaned("todo buy milk\n");
    assert!(output.status.success());
}
