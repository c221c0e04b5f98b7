//! Init command implementation.

use std::fs;
use std::path::Path;

use recordbook_lib::storage::{self, STORAGE_KEY};
use recordbook_lib::{FileStore, KeyValueStore, Result};

use crate::cli::InitArgs;
use crate::config::{Config, WORKSPACE_DIR, config_path};

const CONFIG_TEMPLATE: &str = r"# Recordbook configuration
# storage_dir: .recordbook
# default_sort: severity
# confirm_delete: true
# log_file: .recordbook/rb.log
";

/// Execute the init command.
///
/// Writes a commented config template under `root` and an empty record list
/// into the storage directory. Existing records are kept unless `--force`.
///
/// # Errors
///
/// Returns an error if a directory or file cannot be written.
pub fn execute(args: &InitArgs, root: &Path, config: &Config) -> Result<()> {
    fs::create_dir_all(root.join(WORKSPACE_DIR))?;

    let path = config_path(root);
    if !path.exists() {
        fs::write(&path, CONFIG_TEMPLATE)?;
        tracing::info!(path = %path.display(), "Wrote config template");
    }

    let mut kv = FileStore::new(&config.storage_dir);
    if args.force || kv.get(STORAGE_KEY)?.is_none() {
        storage::save(&mut kv, &[])?;
    }

    println!(
        "Initialized recordbook in {}",
        config.storage_dir.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use recordbook_lib::LoadState;

    #[test]
    fn test_init_creates_config_and_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            storage_dir: dir.path().join("data"),
            ..Config::default()
        };
        execute(&InitArgs::default(), dir.path(), &config).unwrap();

        assert!(config_path(dir.path()).exists());
        let outcome = storage::load(&FileStore::new(&config.storage_dir));
        assert_eq!(outcome.state, LoadState::Loaded);
        assert!(outcome.records.is_empty());
    }

    #[test]
    fn test_init_keeps_records_unless_forced() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            storage_dir: dir.path().to_path_buf(),
            ..Config::default()
        };
        let mut kv = FileStore::new(dir.path());
        kv.set(STORAGE_KEY, r#"[{"id":1,"user":"a","severity":"Low","status":"Open","text":"x"}]"#)
            .unwrap();

        execute(&InitArgs::default(), dir.path(), &config).unwrap();
        assert_eq!(storage::load(&kv).records.len(), 1);

        execute(&InitArgs { force: true }, dir.path(), &config).unwrap();
        assert!(storage::load(&kv).records.is_empty());
    }
}
