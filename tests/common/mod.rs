#![allow(dead_code)]

pub mod mock_data;

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Helper struct to run roster commands in an isolated temp directory
pub struct RosterTest {
    pub temp_dir: TempDir,
    binary_path: &'static str,
}

impl RosterTest {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        RosterTest {
            temp_dir,
            binary_path: env!("CARGO_BIN_EXE_roster"),
        }
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(self.binary_path);
        cmd.args(args)
            .current_dir(self.temp_dir.path())
            .env_remove("ROSTER_CONFIG")
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn run(&self, args: &[&str]) -> Output {
        self.command(args)
            .output()
            .expect("Failed to execute roster command")
    }

    /// Run with `input` piped to stdin
    pub fn run_with_stdin(&self, args: &[&str], input: &str) -> Output {
        let mut child = self
            .command(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to spawn roster command");
        child
            .stdin
            .take()
            .expect("stdin should be piped")
            .write_all(input.as_bytes())
            .expect("Failed to write stdin");
        child.wait_with_output().expect("Failed to wait for roster")
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            panic!(
                "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
                args,
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Expected command {:?} to fail, but it succeeded",
            args
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }

    pub fn run_json(&self, args: &[&str]) -> serde_json::Value {
        let stdout = self.run_success(args);
        serde_json::from_str(&stdout).expect("stdout should be JSON")
    }

    /// Write `roster.yaml` into the working directory
    pub fn write_config(&self, yaml: &str) -> PathBuf {
        let path = self.temp_dir.path().join("roster.yaml");
        fs::write(&path, yaml).expect("Failed to write config");
        path
    }

    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        fs::write(&path, content).expect("Failed to write file");
        path
    }
}
