//! Shared testing utilities for apimocker CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated project directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Path to the project directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `apimocker` binary within the project.
    pub fn cli(&self) -> Command {
        self.cli_in(self.work_dir())
    }

    /// Build a command for invoking the compiled `apimocker` binary within a custom directory.
    pub fn cli_in<P: AsRef<Path>>(&self, dir: P) -> Command {
        let mut cmd = Command::cargo_bin("apimocker").expect("Failed to locate apimocker binary");
        cmd.current_dir(dir.as_ref()).env("HOME", self.root.path());
        cmd
    }

    /// Path to `tests/Fixtures/` in the project.
    pub fn fixtures_path(&self) -> PathBuf {
        self.work_dir.join("tests").join("Fixtures")
    }

    /// Path to `tests/Fixtures/<provider>/` in the project.
    pub fn provider_path(&self, provider: &str) -> PathBuf {
        self.fixtures_path().join(provider)
    }

    /// Read a generated file relative to the project root.
    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.work_dir.join(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    /// Write `apimocker.toml` into the project root.
    pub fn write_config(&self, content: &str) {
        fs::write(self.work_dir.join("apimocker.toml"), content)
            .expect("Failed to write apimocker.toml");
    }

    /// Assert that the provider directory and its `json/` subdirectory exist.
    pub fn assert_provider_layout(&self, provider: &str) {
        let provider_dir = self.provider_path(provider);
        assert!(provider_dir.is_dir(), "{} should be a directory", provider_dir.display());
        assert!(provider_dir.join("json").is_dir(), "json directory should exist");
    }
}
