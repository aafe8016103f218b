//! Shared testing harness for `scaffoldr` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated environment for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub(crate) fn home(&self) -> &Path {
        self.root.path()
    }

    /// Path to the directory used as the working directory for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Root of the definitions tree written by [`TestContext::write_tool`].
    pub(crate) fn definitions_dir(&self) -> PathBuf {
        self.root.path().join("definitions")
    }

    /// Build a command for invoking the compiled `scaffoldr` binary with bundled definitions.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("scaffoldr").expect("Failed to locate scaffoldr binary");
        cmd.current_dir(self.work_dir())
            .env("HOME", self.home())
            .env_remove("SCAFFOLDR_DEFINITIONS")
            .env_remove("SCAFFOLDR_LOG");
        cmd
    }

    /// Build a command that reads definitions from [`TestContext::definitions_dir`].
    pub(crate) fn cli_with_definitions(&self) -> Command {
        let mut cmd = self.cli();
        cmd.arg("--definitions").arg(self.definitions_dir());
        cmd
    }

    /// Write `<category>/<tool>/<tool>.yaml` and its template under the definitions root.
    pub(crate) fn write_tool(&self, category: &str, tool: &str, definition: &str, template: &str) {
        let dir = self.definitions_dir().join(category).join(tool);
        fs::create_dir_all(&dir).expect("Failed to create tool directory");
        fs::write(dir.join(format!("{tool}.yaml")), definition)
            .expect("Failed to write definition");
        fs::write(dir.join(format!("{tool}.yaml.j2")), template).expect("Failed to write template");
    }

    /// Write the user's global defaults file (`$HOME/.scaffoldr`).
    pub(crate) fn write_global_defaults(&self, content: &str) {
        fs::write(self.home().join(".scaffoldr"), content)
            .expect("Failed to write global defaults");
    }

    /// Read a file relative to the work directory.
    pub(crate) fn read_output(&self, name: &str) -> String {
        fs::read_to_string(self.work_dir.join(name))
            .unwrap_or_else(|e| panic!("Failed to read output {name}: {e}"))
    }
}
