// tests/integration_cli.rs

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const EXAMPLE: &str = r#"[{"priority":2,"assignee":"alice","body":"fix x","context":["  // fix\n"],"file":"a.rs","line":10},{"priority":1,"assignee":"alice","body":"fix y","context":["// y"],"file":"b.rs","line":4}]"#;

fn todo_report() -> Command {
    let mut cmd = Command::cargo_bin("todo_report").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

/// --- Test: Example Input on stdin ---
/// The priority 1 record is printed before the priority 2 record under one section.
#[test]
fn test_example_from_stdin() {
    let output = todo_report().write_stdin(EXAMPLE).assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8(output).unwrap();

    assert_eq!(stdout.matches("=== alice").count(), 1);
    let line4 = stdout.find("line: `4`").expect("record b.rs:4 missing");
    let line10 = stdout.find("line: `10`").expect("record a.rs:10 missing");
    assert!(line4 < line10, "priority 1 should be rendered first:\n{}", stdout);
}

/// --- Test: Plain Style ---
#[test]
fn test_plain_style() {
    todo_report()
        .args(["--style", "plain"])
        .write_stdin(EXAMPLE)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("### alice\n\n- prio:\t\t1\n"))
        .stdout(predicate::str::contains("  context:\t// fix\n"));
}

/// --- Test: Unknown Style ---
#[test]
fn test_unknown_style_is_rejected() {
    todo_report()
        .args(["--style", "markdown"])
        .write_stdin(EXAMPLE)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("unknown report style"));
}

/// --- Test: Input Files Are Concatenated ---
/// The JSON array may be split across files; `-` splices in stdin.
#[test]
fn test_files_are_concatenated_in_order() {
    let dir = TempDir::new().unwrap();
    let head = dir.path().join("head.json");
    let tail = dir.path().join("tail.json");
    fs::write(
        &head,
        r#"[{"priority":"b","assignee":"bob","body":"second","context":[],"file":"x.rs","line":2},"#,
    )
    .unwrap();
    fs::write(&tail, "]").unwrap();

    todo_report()
        .arg(&head)
        .arg("-")
        .arg(&tail)
        .write_stdin(r#"{"priority":"a","assignee":"bob","body":"first","context":[],"file":"y.rs","line":1}"#)
        .assert()
        .success()
        .stdout(predicate::str::is_match("(?s)=== bob\n\n.*body: `first`.*body: `second`").unwrap());
}

/// --- Test: Malformed JSON ---
/// Nothing reaches stdout and the exit status is non-zero.
#[test]
fn test_malformed_json_fails_without_output() {
    todo_report()
        .write_stdin("[{\"priority\": 1,")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("not well-formed JSON"));
}

/// --- Test: Missing Field ---
/// A record missing `priority` fails the run even when other records are valid.
#[test]
fn test_missing_priority_fails_without_output() {
    let input = r#"[
        {"priority":1,"assignee":"alice","body":"ok","context":[],"file":"a.rs","line":1},
        {"assignee":"alice","body":"no prio","context":[],"file":"a.rs","line":2}
    ]"#;
    todo_report()
        .write_stdin(input)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("record 1 missing required field `priority`"));
}

/// --- Test: Unreadable Input File ---
#[test]
fn test_missing_input_file() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.json");
    todo_report()
        .arg(&missing)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("failed to read input"));
}

/// --- Test: Verbose Logging Stays Off stdout ---
#[test]
fn test_verbose_logs_to_stderr_only() {
    todo_report()
        .args(["--verbose", "--style", "plain"])
        .write_stdin(EXAMPLE)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("### alice"))
        .stdout(predicate::str::contains("rendering").not())
        .stderr(predicate::str::contains("rendering 2 record(s) for 1 assignee(s)"));
}

/// --- Test: Empty Array ---
#[test]
fn test_empty_array_prints_nothing() {
    todo_report()
        .write_stdin("[]")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

/// --- Test: Every Record Rendered Once ---
/// Each section holds exactly its assignee's entries, and the total matches the input.
#[test]
fn test_every_record_rendered_once_per_section() {
    let input = r#"[
        {"priority":2,"assignee":"ann","body":"a1","context":[],"file":"a.rs","line":1},
        {"priority":1,"assignee":"ben","body":"b1","context":[],"file":"b.rs","line":2},
        {"priority":1,"assignee":"ann","body":"a2","context":[],"file":"a.rs","line":3},
        {"priority":3,"assignee":"cy","body":"c1","context":[],"file":"c.rs","line":4},
        {"priority":0,"assignee":"ben","body":"b2","context":[],"file":"b.rs","line":5},
        {"priority":1,"assignee":"ann","body":"a3","context":[],"file":"a.rs","line":6}
    ]"#;
    for (style, marker) in [("plain", "### "), ("asciidoc", "=== ")] {
        let output = todo_report()
            .args(["--style", style])
            .write_stdin(input)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        let stdout = String::from_utf8(output).unwrap();

        let mut counts: Vec<(String, usize)> = Vec::new();
        for line in stdout.lines() {
            if let Some(name) = line.strip_prefix(marker) {
                counts.push((name.to_string(), 0));
            } else if line.starts_with("- prio:") {
                let current = counts.last_mut().expect("entry printed before any section");
                current.1 += 1;
            }
        }
        assert_eq!(
            counts,
            vec![("ann".to_string(), 3), ("ben".to_string(), 2), ("cy".to_string(), 1)],
            "unexpected sections for style {}",
            style
        );

        for body in ["a1", "a2", "a3", "b1", "b2", "c1"] {
            let needle = if style == "plain" {
                format!("body:\t\t{}\n", body)
            } else {
                format!("body: `{}` +\n", body)
            };
            assert_eq!(stdout.matches(&needle).count(), 1, "{} rendered more or less than once", body);
        }
    }
}
