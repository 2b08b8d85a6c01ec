//! Shared test utilities for integration tests
//!
//! Every test runs the binary in its own temp directory with an isolated HOME and
//! no inherited `BOARDKIT_*` variables, so tests can run in parallel.

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Isolated working directory and home for one binary invocation
pub struct Sandbox {
    pub dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("home")).unwrap();
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn home(&self) -> std::path::PathBuf {
        self.dir.path().join("home")
    }

    pub fn write(&self, name: &str, content: &str) -> std::path::PathBuf {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    /// Command for the binary with a clean environment rooted in the sandbox.
    pub fn command(&self) -> Command {
        let mut command = Command::new(env!("CARGO_BIN_EXE_boardkit"));
        command
            .current_dir(self.dir.path())
            .env("HOME", self.home())
            .env("USERPROFILE", self.home());
        for (key, _) in std::env::vars() {
            if key.starts_with("BOARDKIT_") {
                command.env_remove(key);
            }
        }
        command
    }

    pub fn run(&self, args: &[&str]) -> Output {
        self.command().args(args).output().unwrap()
    }

    pub fn run_with_env(&self, args: &[&str], vars: &[(&str, &str)]) -> Output {
        let mut command = self.command();
        for (key, value) in vars {
            command.env(key, value);
        }
        command.args(args).output().unwrap()
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Parse stdout as exactly one JSON document.
pub fn json_stdout(output: &Output) -> serde_json::Value {
    let text = stdout(output);
    let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    assert_eq!(lines.len(), 1, "expected one JSON document, got: {:?}", text);
    serde_json::from_str(lines[0]).unwrap()
}
