/// CLI binary integration tests using assert_cmd
///
/// These tests invoke the actual binary with a scripted stdin and verify the
/// menu, routing notices, and absence of side effects. Each test runs in its
/// own temp working directory so no output files leak between tests.
use assert_cmd::Command;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

fn toolhub_cmd(workdir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_toolhub"));
    cmd.current_dir(workdir.path())
        .env("ANTHROPIC_API_KEY", "test-key");
    cmd
}

#[test]
fn test_menu_is_printed_before_reading_a_selection() {
    let dir = TempDir::new().unwrap();
    toolhub_cmd(&dir)
        .write_stdin("10\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello from toolhub!"))
        .stdout(predicate::str::contains("Use any of the following tools:"))
        .stdout(predicate::str::contains("1. Resume Analyzer."))
        .stdout(predicate::str::contains("2. Email Generator."))
        .stdout(predicate::str::contains(
            "8. Job search from S&P 500 companies based on your resume.",
        ))
        .stdout(predicate::str::contains("10. Exit"))
        .stdout(predicate::str::contains("Enter your choice:"));
}

#[test]
fn test_exit_selection_prints_termination_notice_and_writes_nothing() {
    let dir = TempDir::new().unwrap();
    toolhub_cmd(&dir)
        .write_stdin("10\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exiting..."));

    // No LLM call was made and no output directory was created.
    assert!(!dir.path().join("output").exists());
}

#[test]
fn test_exit_aliases_are_case_and_whitespace_insensitive() {
    let dir = TempDir::new().unwrap();
    toolhub_cmd(&dir)
        .write_stdin("  EXIT  \n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exiting..."));
}

#[test]
fn test_invalid_selection_prints_invalid_choice_notice() {
    let dir = TempDir::new().unwrap();
    toolhub_cmd(&dir)
        .write_stdin("invalid_tool_xyz\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid choice. Please try again."));

    assert!(!dir.path().join("output").exists());
}

#[test]
fn test_empty_selection_is_treated_as_invalid() {
    let dir = TempDir::new().unwrap();
    toolhub_cmd(&dir)
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid choice. Please try again."));
}

#[test]
fn test_placeholder_tools_report_not_yet_implemented() {
    for (selection, name) in [
        ("1", "Resume Analyzer"),
        ("5", "Code Review"),
        ("9", "Chat with a LLM"),
    ] {
        let dir = TempDir::new().unwrap();
        toolhub_cmd(&dir)
            .write_stdin(format!("{selection}\n"))
            .assert()
            .success()
            .stdout(predicate::str::contains(format!(
                "{name} is not yet implemented."
            )));

        assert!(!dir.path().join("output").exists());
    }
}

#[test]
fn test_missing_api_key_fails_startup() {
    let dir = TempDir::new().unwrap();
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_toolhub"));
    cmd.current_dir(dir.path())
        .env_remove("ANTHROPIC_API_KEY")
        .write_stdin("10\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("ANTHROPIC_API_KEY"));
}
