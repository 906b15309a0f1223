//! Helpers shared by the end-to-end tests

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(dead_code)] // Not all helpers are used by every test file

use std::io::Write;
use std::path::Path;
use std::process::{Child, Command, Output, Stdio};

pub const PROMPT_SUFFIX: &str = " >>> ";

/// Runs the shell in `dir` with `script` piped to its stdin.
pub fn run_shell(dir: &Path, script: &str) -> Output {
    spawn_shell(dir, script)
        .wait_with_output()
        .expect("Failed to wait for shell")
}

/// Starts the shell in `dir`, writes `script` and closes its stdin.
pub fn spawn_shell(dir: &Path, script: &str) -> Child {
    let mut child = Command::new(env!("CARGO_BIN_EXE_cool_shell"))
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to start shell");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(script.as_bytes())
        .unwrap();

    child
}

pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

pub fn prompt_count(stdout: &str) -> usize {
    stdout.matches(PROMPT_SUFFIX).count()
}
