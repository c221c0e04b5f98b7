//! Configuration management for `recordbook`.
//!
//! Configuration is loaded from YAML with support for:
//! - Workspace config (.recordbook/config.yaml)
//! - Environment variable override (`RECORDBOOK_DIR`)
//! - CLI overrides (`--dir`)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use recordbook_lib::{Confirm, Controller, FileStore, RecordError, Result, SortKey};

/// Workspace directory holding config and data.
pub const WORKSPACE_DIR: &str = ".recordbook";

/// Config file name inside the workspace directory.
pub const CONFIG_FILE: &str = "config.yaml";

/// Environment variable that overrides `storage_dir`.
pub const ENV_STORAGE_DIR: &str = "RECORDBOOK_DIR";

/// Effective configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory the record blob is stored in.
    pub storage_dir: PathBuf,
    /// Sort applied when a listing names none.
    pub default_sort: Option<String>,
    /// Ask before deleting. `--yes` skips the prompt regardless.
    pub confirm_delete: bool,
    /// Append logs to this file instead of stderr.
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from(WORKSPACE_DIR),
            default_sort: None,
            confirm_delete: true,
            log_file: None,
        }
    }
}

/// Overrides taken from global CLI flags.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub dir: Option<PathBuf>,
}

impl Config {
    /// The configured default sort, if it names a supported column.
    #[must_use]
    pub fn default_sort_key(&self) -> Option<SortKey> {
        self.default_sort.as_deref().and_then(SortKey::parse)
    }

    /// Parse a config file. A missing file yields defaults.
    ///
    /// # Errors
    ///
    /// Returns `Config` if the file exists but cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(RecordError::Config(format!(
                    "cannot read {}: {e}",
                    path.display()
                )));
            }
        };

        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&contents)
            .map_err(|e| RecordError::Config(format!("{}: {e}", path.display())))
    }

    /// Apply environment and CLI overrides, in that order.
    #[must_use]
    pub fn with_overrides(
        mut self,
        env: impl Fn(&str) -> Option<String>,
        cli: &CliOverrides,
    ) -> Self {
        if let Some(dir) = env(ENV_STORAGE_DIR).filter(|d| !d.trim().is_empty()) {
            self.storage_dir = PathBuf::from(dir);
        }
        if let Some(dir) = &cli.dir {
            self.storage_dir.clone_from(dir);
        }
        self
    }
}

/// Path of the workspace config file under `root`.
#[must_use]
pub fn config_path(root: &Path) -> PathBuf {
    root.join(WORKSPACE_DIR).join(CONFIG_FILE)
}

/// Load the effective configuration for the workspace at `root`.
///
/// # Errors
///
/// Returns `Config` if the config file is malformed.
pub fn load(root: &Path, cli: &CliOverrides) -> Result<Config> {
    let path = config_path(root);
    let config = Config::from_file(&path)?.with_overrides(|key| std::env::var(key).ok(), cli);
    tracing::debug!(config = %path.display(), storage = %config.storage_dir.display(), "Loaded configuration");
    Ok(config)
}

/// Open the record controller over the configured storage directory.
pub fn open_controller<C: Confirm>(config: &Config, confirm: C) -> Controller<FileStore, C> {
    let controller = Controller::init(FileStore::new(&config.storage_dir), confirm);
    if let recordbook_lib::LoadState::Recovered { reason } = controller.load_state() {
        tracing::warn!(%reason, "Started from an empty list after unreadable data");
    }
    controller
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::from_file(&dir.path().join("nope.yaml")).unwrap();
        assert_eq!(config, Config::default());
        assert!(config.confirm_delete);
    }

    #[test]
    fn test_parse_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(
            &path,
            "storage_dir: /tmp/records\ndefault_sort: severity\nconfirm_delete: false\n",
        )
        .unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.storage_dir, PathBuf::from("/tmp/records"));
        assert_eq!(config.default_sort_key(), Some(SortKey::Severity));
        assert!(!config.confirm_delete);
    }

    #[test]
    fn test_malformed_yaml_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "confirm_delete: [not, a, bool\n").unwrap();
        assert!(matches!(
            Config::from_file(&path),
            Err(RecordError::Config(_))
        ));
    }

    #[test]
    fn test_override_precedence() {
        let env = |key: &str| (key == ENV_STORAGE_DIR).then(|| "/from/env".to_string());

        let config = Config::default().with_overrides(env, &CliOverrides::default());
        assert_eq!(config.storage_dir, PathBuf::from("/from/env"));

        let cli = CliOverrides {
            dir: Some(PathBuf::from("/from/cli")),
        };
        let config = Config::default().with_overrides(env, &cli);
        assert_eq!(config.storage_dir, PathBuf::from("/from/cli"));
    }

    #[test]
    fn test_unknown_default_sort_is_ignored() {
        let config = Config {
            default_sort: Some("created".to_string()),
            ..Config::default()
        };
        assert_eq!(config.default_sort_key(), None);
    }
}
