//! End-to-end CLI tests for lcut.
//!
//! Covers both selection modes, --complement, delimiter handling, stdin
//! input, and the error-handling contract: bad position lists abort before
//! any line is processed, while unreadable files are reported and skipped.

use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::NamedTempFile;

// =============================================================================
// Helper functions
// =============================================================================

fn create_input_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file.flush().unwrap();
    file
}

fn run_lcut(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lcut"))
        .args(args)
        .output()
        .expect("Failed to run lcut")
}

fn run_lcut_with_stdin(args: &[&str], stdin_content: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_lcut"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn lcut");

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(stdin_content.as_bytes()).unwrap();
    }

    child.wait_with_output().expect("Failed to wait for lcut")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

// =============================================================================
// Field mode
// =============================================================================

#[test]
fn test_field_mode_basic() {
    let input = create_input_file("1:2:3:4:5:6:7:8:9:10:11:12\n");
    let output = run_lcut(&[
        "-f",
        "1-2,4,7-9",
        "-d",
        ":",
        input.path().to_str().unwrap(),
    ]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "1:2:4:7:8:9\n");
}

#[test]
fn test_field_mode_complement() {
    let input = create_input_file("1:2:3:4:5:6:7:8:9:10:11:12\n");
    let output = run_lcut(&[
        "-f",
        "1-2,4,7-9",
        "-d",
        ":",
        "--complement",
        input.path().to_str().unwrap(),
    ]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "3:5:6:10:11:12\n");
}

#[test]
fn test_field_mode_default_tab_delimiter() {
    let input = create_input_file("a\tb\tc\n");
    let output = run_lcut(&["-f", "2", input.path().to_str().unwrap()]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "b\n");
}

#[test]
fn test_field_mode_line_without_delimiter_passes_through() {
    let input = create_input_file("a:b:c\nno separators here\n");
    let output = run_lcut(&["-f", "2", "-d", ":", input.path().to_str().unwrap()]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "b\nno separators here\n");
}

#[test]
fn test_field_mode_empty_line_emits_nothing() {
    let input = create_input_file("a:b\n\nc:d\n");
    let output = run_lcut(&["-f", "1", "-d", ":", input.path().to_str().unwrap()]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "a\nc\n");
}

#[test]
fn test_field_mode_positions_past_field_count() {
    // The line splits into two fields, so an empty output line is emitted.
    let input = create_input_file("a:b\n");
    let output = run_lcut(&["-f", "5-7", "-d", ":", input.path().to_str().unwrap()]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "\n");
}

// =============================================================================
// Byte mode
// =============================================================================

#[test]
fn test_byte_mode_basic() {
    let input = create_input_file("1:2:3:4:5:6:7:8:9:10:11:12\n");
    let output = run_lcut(&["-b", "1-4,8-10,12", input.path().to_str().unwrap()]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "1:2::5::\n");
}

#[test]
fn test_byte_mode_complement() {
    let input = create_input_file("abcdef\n");
    let output = run_lcut(&["-b", "2-4", "--complement", input.path().to_str().unwrap()]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "aef\n");
}

#[test]
fn test_byte_mode_short_lines_clip() {
    let input = create_input_file("abcdef\nab\n");
    let output = run_lcut(&["-b", "2-4", input.path().to_str().unwrap()]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "bcd\nb\n");
}

#[test]
fn test_byte_mode_empty_line_emits_nothing() {
    let input = create_input_file("abc\n\ndef\n");
    let output = run_lcut(&["-b", "1", input.path().to_str().unwrap()]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "a\nd\n");
}

// =============================================================================
// Multiple files and stdin
// =============================================================================

#[test]
fn test_multiple_files_in_order() {
    let first = create_input_file("a:b\n");
    let second = create_input_file("c:d\n");
    let output = run_lcut(&[
        "-f",
        "2",
        "-d",
        ":",
        first.path().to_str().unwrap(),
        second.path().to_str().unwrap(),
    ]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "b\nd\n");
}

#[test]
fn test_stdin_when_no_files() {
    let output = run_lcut_with_stdin(&["-f", "1", "-d", ":"], "x:y\n");

    assert!(output.status.success());
    assert_eq!(stdout(&output), "x\n");
}

#[test]
fn test_stdin_via_dash() {
    let output = run_lcut_with_stdin(&["-b", "1-2", "-"], "hello\n");

    assert!(output.status.success());
    assert_eq!(stdout(&output), "he\n");
}

#[test]
fn test_missing_file_is_skipped() {
    let present = create_input_file("a:b\n");
    let output = run_lcut(&[
        "-f",
        "1",
        "-d",
        ":",
        "/definitely/not/a/real/file",
        present.path().to_str().unwrap(),
    ]);

    // The run continues past the missing file and still succeeds.
    assert!(output.status.success());
    assert_eq!(stdout(&output), "a\n");
    assert!(stderr(&output).contains("/definitely/not/a/real/file"));
}

// =============================================================================
// Error handling
// =============================================================================

#[test]
fn test_malformed_list_aborts_before_processing() {
    let input = create_input_file("a:b\n");
    let output = run_lcut(&["-f", "abc", "-d", ":", input.path().to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "");
    assert!(stderr(&output).contains("invalid position list"));
}

#[test]
fn test_reversed_range_aborts() {
    let input = create_input_file("a:b\n");
    let output = run_lcut(&["-b", "4-2", input.path().to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("decreasing range"));
}

#[test]
fn test_both_modes_rejected() {
    let output = run_lcut(&["-b", "1", "-f", "1"]);
    assert!(!output.status.success());
}

#[test]
fn test_neither_mode_rejected() {
    let output = run_lcut(&["somefile"]);
    assert!(!output.status.success());
}

#[test]
fn test_delimiter_requires_field_mode() {
    let output = run_lcut(&["-b", "1", "-d", ":"]);
    assert!(!output.status.success());
}

#[test]
fn test_empty_delimiter_rejected() {
    let output = run_lcut(&["-f", "1", "-d", ""]);
    assert!(!output.status.success());
}

#[test]
fn test_help_exits_without_processing() {
    let output = run_lcut(&["--help"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("Usage"));
}

#[test]
fn test_verbose_reports_resolved_options() {
    let input = create_input_file("a:b\n");
    let output = run_lcut(&[
        "-f",
        "2,1",
        "-d",
        ":",
        "--verbose",
        input.path().to_str().unwrap(),
    ]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "a:b\n");
    assert!(stderr(&output).contains("field mode"));
}
