//! Isolated test environment for sambundle.
//!
//! Each `TestEnv` owns a temporary project directory and a temporary home,
//! so neither a developer's user config nor their `SAMBUNDLE_*` variables
//! leak into a test.

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

use sambundle::{Bundler, LocalFs, ResolveOptions};

const ENV_VARS: &[&str] = &[
    "SAMBUNDLE_TEMPLATE",
    "SAMBUNDLE_INPUT_DIR",
    "SAMBUNDLE_OUTPUT_DIR",
    "SAMBUNDLE_MAX_DEPTH",
    "SAMBUNDLE_DUPLICATES",
    "SAMBUNDLE_VERBOSITY",
    "RUST_LOG",
];

/// Result of running the CLI
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
}

pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().expect("create project dir"),
            home_dir: TempDir::new().expect("create home dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.project_root.path()
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// Write a project file, creating parent directories
    pub fn write(&self, relative: &str, content: &str) -> &Self {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent dir");
        }
        std::fs::write(&path, content).expect("write project file");
        self
    }

    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.project_path(relative)).expect("read project file")
    }

    /// Resolve options rooted at the project directory
    pub fn options(&self) -> ResolveOptions {
        ResolveOptions::new(self.root())
    }

    /// A bundler over the local disk for `template`
    pub fn bundler(&self, options: ResolveOptions, template: &str) -> Bundler<LocalFs> {
        Bundler::new(LocalFs::new(), options, template)
    }

    /// Run the CLI from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run the CLI from the project root with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_sambundle"));
        cmd.current_dir(self.root())
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"));
        for var in ENV_VARS {
            cmd.env_remove(var);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("run sambundle");
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}
