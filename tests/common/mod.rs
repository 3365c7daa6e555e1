#![allow(dead_code)]

pub mod mock_api;
pub mod mock_data;
pub mod stub_server;

use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Helper struct to run bugboard commands in an isolated temp directory
pub struct BugboardTest {
    pub temp_dir: TempDir,
    binary_path: String,
}

impl BugboardTest {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");

        BugboardTest {
            temp_dir,
            binary_path: env!("CARGO_BIN_EXE_bugboard").to_string(),
        }
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(&self.binary_path);
        cmd.args(args)
            .current_dir(self.temp_dir.path())
            .env_remove("BUGBOARD_ENV")
            .env_remove("BUGBOARD_API_URL")
            .env("NO_COLOR", "1");
        cmd
    }

    pub fn run(&self, args: &[&str]) -> Output {
        self.command(args)
            .output()
            .expect("Failed to execute bugboard command")
    }

    /// Run with the service URL supplied through the environment.
    pub fn run_against(&self, base_url: &str, args: &[&str]) -> Output {
        self.command(args)
            .env("BUGBOARD_API_URL", base_url)
            .output()
            .expect("Failed to execute bugboard command")
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

    pub fn read_config(&self) -> String {
        let path = self.temp_dir.path().join(".bugboard").join("config.yaml");
        fs::read_to_string(path).expect("Failed to read config file")
    }

    pub fn write_config(&self, content: &str) {
        let dir = self.temp_dir.path().join(".bugboard");
        fs::create_dir_all(&dir).expect("Failed to create config dir");
        fs::write(dir.join("config.yaml"), content).expect("Failed to write config file");
    }
}
