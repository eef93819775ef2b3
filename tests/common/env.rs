//! Test environment for isolated sln2csproj runs.
//!
//! Provides `TestEnv` - a temp directory holding the solution tree plus an
//! isolated home/config directory, and helpers to run the CLI against it.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Result of running the sln2csproj binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON, one value per non-empty line
    pub fn json_events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l)
                    .unwrap_or_else(|e| panic!("invalid NDJSON line {:?}: {}", l, e))
            })
            .collect()
    }
}

/// Isolated test environment.
///
/// The user config directory points into `home_dir`, and every
/// `SLN2CSPROJ_*` variable is cleared for the child process.
pub struct TestEnv {
    /// Solution root
    pub root: TempDir,
    /// Temporary directory for HOME / XDG_CONFIG_HOME
    pub home_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().expect("Failed to create root dir"),
            home_dir: tempfile::tempdir().expect("Failed to create home dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_sln2csproj")),
        }
    }

    /// Get path relative to the solution root
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    /// Write a file under the solution root, creating parents
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let full_path = self.path(relative);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Create a placeholder binary under the solution root
    pub fn touch_binary(&self, relative: &str) -> PathBuf {
        self.write(relative, "MZ")
    }

    /// Write the user config file (`<config_dir>/sln2csproj/config.toml`)
    pub fn write_user_config(&self, content: &str) {
        let path = self
            .home_dir
            .path()
            .join(".config")
            .join("sln2csproj")
            .join("config.toml");
        std::fs::create_dir_all(path.parent().unwrap()).expect("Failed to create config dir");
        std::fs::write(path, content).expect("Failed to write user config");
    }

    /// Read a file under the solution root
    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    /// Run the CLI from the solution root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run the CLI from the solution root with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.root.path())
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("USERPROFILE", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("NO_COLOR", "1")
            .env_remove("SLN2CSPROJ_OUT_DIR")
            .env_remove("SLN2CSPROJ_MODE")
            .env_remove("SLN2CSPROJ_COLOR");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute sln2csproj");
        to_result(output)
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Output folder for `website` under the default out dir
pub fn default_out(root: &Path, website: &str) -> PathBuf {
    root.join("tools").join("_intellisense").join(website)
}
