//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Test workspace context
///
/// Creates a temporary directory for test workspaces and provides
/// utilities for setting up test scenarios.
#[allow(dead_code)]
pub struct TestProject {
    /// Temporary directory for the test workspace
    pub dir: TempDir,
}

#[allow(dead_code)]
impl TestProject {
    /// Create a new test workspace in a temporary directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Create a test workspace populated with [`SAMPLE_WORKSPACE`]
    pub fn sample() -> Self {
        let project = Self::new();
        for (name, content) in SAMPLE_WORKSPACE {
            project.create_file(name, content);
        }
        project
    }

    /// Get the canonical path to the test workspace directory
    pub fn path(&self) -> PathBuf {
        std::fs::canonicalize(self.dir.path()).expect("Failed to canonicalize temp directory")
    }

    /// Create a file in the test workspace
    pub fn create_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Check if a file exists in the test workspace
    pub fn file_exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }

    /// Read a file from the test workspace
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).expect("Failed to read file")
    }

    /// Run gridorder in the test workspace
    pub fn run(&self, args: &[&str]) -> Output {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_gridorder"));
        cmd.current_dir(self.dir.path());
        cmd.env_remove("GRIDORDER_OUTPUT");
        cmd.env_remove("RUST_LOG");
        for arg in args {
            cmd.arg(arg);
        }
        cmd.output().expect("Failed to execute gridorder")
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// A parent aggregating an API, a core depending on it, and an app
/// depending on both plus a third-party library
#[allow(dead_code)]
pub const SAMPLE_WORKSPACE: &[(&str, &str)] = &[
    (
        "project.toml",
        r#"
modules = ["app", "core", "api"]

[project]
group-id = "org.acme"
artifact-id = "acme-parent"
"#,
    ),
    (
        "app/project.toml",
        r#"
[project]
artifact-id = "acme-app"

[parent]
group-id = "org.acme"
artifact-id = "acme-parent"

[[dependencies]]
group-id = "org.acme"
artifact-id = "acme-core"

[[dependencies]]
group-id = "org.acme"
artifact-id = "acme-api"

[[dependencies]]
group-id = "org.thirdparty"
artifact-id = "commons"
"#,
    ),
    (
        "core/project.toml",
        r#"
[project]
artifact-id = "acme-core"

[parent]
group-id = "org.acme"
artifact-id = "acme-parent"

[[dependencies]]
group-id = "org.acme"
artifact-id = "acme-api"
"#,
    ),
    (
        "api/project.toml",
        r#"
[project]
group-id = "org.acme"
artifact-id = "acme-api"
"#,
    ),
];
