use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use assert_cmd::Command;
use tempfile::TempDir;

/// A throwaway directory that `rb` runs in.
pub struct RbWorkspace {
    pub temp_dir: TempDir,
}

impl RbWorkspace {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Default storage directory for this workspace.
    pub fn storage_dir(&self) -> PathBuf {
        self.root().join(".recordbook")
    }

    pub fn items_path(&self) -> PathBuf {
        self.storage_dir().join("lr1_items.json")
    }

    pub fn write_config(&self, yaml: &str) {
        fs::create_dir_all(self.storage_dir()).expect("create storage dir");
        fs::write(self.storage_dir().join("config.yaml"), yaml).expect("write config");
    }

    pub fn write_items(&self, raw: &str) {
        fs::create_dir_all(self.storage_dir()).expect("create storage dir");
        fs::write(self.items_path(), raw).expect("write items");
    }

    pub fn read_items(&self) -> serde_json::Value {
        let raw = fs::read_to_string(self.items_path()).expect("read items");
        serde_json::from_str(&raw).expect("items are JSON")
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("rb").expect("rb binary");
        cmd.current_dir(self.root())
            .env_remove("RECORDBOOK_DIR")
            .env_remove("RUST_LOG");
        cmd
    }
}

pub struct RunResult {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

pub fn run_rb<I, S>(workspace: &RbWorkspace, args: I, label: &str) -> RunResult
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    run_rb_with_stdin(workspace, args, "", label)
}

pub fn run_rb_with_stdin<I, S>(
    workspace: &RbWorkspace,
    args: I,
    stdin: &str,
    label: &str,
) -> RunResult
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    let output = workspace
        .command()
        .args(args)
        .write_stdin(stdin)
        .output()
        .unwrap_or_else(|e| panic!("{label}: failed to run rb: {e}"));

    RunResult {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}

/// Create a record and fail the test if `rb` rejects it.
pub fn create_record(workspace: &RbWorkspace, user: &str, severity: &str, text: &str) {
    let result = run_rb(
        workspace,
        ["create", "--user", user, "--severity", severity, "--text", text],
        "create",
    );
    assert!(
        result.status.success(),
        "create {user} failed: {}",
        result.stderr
    );
}
