use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::tempdir;

fn library(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_library"))
        .args(args)
        .arg("--data-file")
        .arg(dir.join("books.json"))
        .arg("--log-file")
        .arg(dir.join("logs").join("app.log"))
        .output()
        .expect("Failed to execute library")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_cli_help_command() {
    let output = Command::new(env!("CARGO_BIN_EXE_library"))
        .arg("--help")
        .output()
        .expect("Failed to execute library --help");

    assert!(output.status.success());
    let stdout = stdout(&output);
    assert!(stdout.contains("add"));
    assert!(stdout.contains("issue"));
    assert!(stdout.contains("return"));
    assert!(stdout.contains("search"));
    assert!(stdout.contains("menu"));
}

#[test]
fn test_cli_add_issue_return_flow() {
    let temp_dir = tempdir().unwrap();
    let dir = temp_dir.path();

    let output = library(
        dir,
        &["add", "--title", "Dune", "--author", "Herbert", "--isbn", "111"],
    );
    assert!(output.status.success());
    assert_eq!(stdout(&output), "Book added.\n");

    assert_eq!(stdout(&library(dir, &["issue", "111"])), "Issued.\n");
    assert_eq!(stdout(&library(dir, &["issue", "111"])), "Book already issued.\n");

    let output = library(dir, &["list"]);
    assert_eq!(stdout(&output), "Dune by Herbert (ISBN: 111) - issued\n");

    assert_eq!(stdout(&library(dir, &["return", "111"])), "Returned.\n");
    assert_eq!(stdout(&library(dir, &["return", "111"])), "Book was not issued.\n");

    // Logs go to the log file, not stdout
    let log = std::fs::read_to_string(dir.join("logs").join("app.log")).unwrap();
    assert!(log.contains("Added book"));
}

#[test]
fn test_cli_errors_exit_nonzero() {
    let temp_dir = tempdir().unwrap();
    let dir = temp_dir.path();

    library(dir, &["add", "--title", "Dune", "--author", "Herbert", "--isbn", "111"]);

    let output = library(
        dir,
        &["add", "--title", "Dune", "--author", "Herbert", "--isbn", "111"],
    );
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("A book with ISBN 111 already exists"));

    let output = library(dir, &["issue", "999"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Book not found: 999"));
}

#[test]
fn test_cli_search_and_show_json() {
    let temp_dir = tempdir().unwrap();
    let dir = temp_dir.path();

    library(dir, &["add", "--title", "Dune", "--author", "Herbert", "--isbn", "111"]);
    library(dir, &["add", "--title", "Emma", "--author", "Austen", "--isbn", "222"]);

    let output = library(dir, &["search", "DUNE", "--format", "json"]);
    let results: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(results.as_array().unwrap().len(), 1);
    assert_eq!(results[0]["isbn"], "111");
    assert_eq!(results[0]["status"], "available");

    let output = library(dir, &["show", "222"]);
    assert_eq!(stdout(&output), "Emma by Austen (ISBN: 222) - available\n");

    let output = library(dir, &["show", "999"]);
    assert_eq!(stdout(&output), "Not found.\n");
}

#[test]
fn test_cli_recovers_from_corrupt_catalog() {
    let temp_dir = tempdir().unwrap();
    let dir = temp_dir.path();
    std::fs::write(dir.join("books.json"), "not json at all").unwrap();

    let output = library(dir, &["list"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "No books in the catalog.\n");
    assert_eq!(
        std::fs::read_to_string(dir.join("books.bak.json")).unwrap(),
        "not json at all"
    );
}

#[test]
fn test_cli_menu_reads_stdin() {
    let temp_dir = tempdir().unwrap();
    let dir = temp_dir.path();

    let mut child = Command::new(env!("CARGO_BIN_EXE_library"))
        .arg("--data-file")
        .arg(dir.join("books.json"))
        .arg("--log-file")
        .arg(dir.join("app.log"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("Failed to spawn library");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"1\nDune\nHerbert\n111\n4\n7\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    let stdout = stdout(&output);
    assert!(stdout.contains("Library Inventory Manager"));
    assert!(stdout.contains("Book added."));
    assert!(stdout.contains("Dune by Herbert (ISBN: 111) - available"));
    assert!(stdout.ends_with("Exiting.\n"));
}
