use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

const ENV_PREFIX: &str = "EXPENSE_TRACKER";
const CONFIG_FILE: &str = "config.toml";
const DB_FILE: &str = "expenses.db";
const LOG_FILE: &str = "expense-tracker.log";

/// Settings as read from the config file and environment. Unset paths fall
/// back to the platform data directory in `Settings::resolve`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub(crate) struct RawSettings {
    pub(crate) database_path: Option<PathBuf>,
    pub(crate) log_level: String,
    pub(crate) log_file: Option<PathBuf>,
}

impl Default for RawSettings {
    fn default() -> Self {
        Self {
            database_path: None,
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Settings {
    pub(crate) database_path: PathBuf,
    pub(crate) log_level: String,
    pub(crate) log_file: PathBuf,
}

impl Settings {
    fn resolve(raw: RawSettings, data_dir: PathBuf) -> Self {
        Self {
            database_path: raw.database_path.unwrap_or_else(|| data_dir.join(DB_FILE)),
            log_level: raw.log_level,
            log_file: raw.log_file.unwrap_or_else(|| data_dir.join(LOG_FILE)),
        }
    }
}

/// Layering: defaults, then `config.toml` in the platform config dir, then
/// `EXPENSE_TRACKER_*` environment variables.
pub(crate) fn load() -> Result<Settings> {
    let proj_dirs = directories::ProjectDirs::from("com", "expense-tracker", "ExpenseTracker")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;

    let raw = read_layers(Some(proj_dirs.config_dir().join(CONFIG_FILE)))?;
    let settings = Settings::resolve(raw, proj_dirs.data_dir().to_path_buf());

    for path in [&settings.database_path, &settings.log_file] {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create data directory: {}", dir.display()))?;
        }
    }

    Ok(settings)
}

fn read_layers(file: Option<PathBuf>) -> Result<RawSettings> {
    let mut builder = config::Config::builder();
    if let Some(path) = file {
        builder = builder.add_source(config::File::from(path).required(false));
    }
    builder = builder.add_source(config::Environment::with_prefix(ENV_PREFIX));
    builder
        .build()
        .and_then(|c| c.try_deserialize())
        .context("Failed to read configuration")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_defaults_resolve_into_data_dir() {
        let settings = Settings::resolve(RawSettings::default(), PathBuf::from("/data"));
        assert_eq!(settings.database_path, PathBuf::from("/data/expenses.db"));
        assert_eq!(settings.log_file, PathBuf::from("/data/expense-tracker.log"));
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn test_explicit_paths_win() {
        let raw = RawSettings {
            database_path: Some(PathBuf::from("/tmp/mine.db")),
            log_level: "debug".into(),
            log_file: Some(PathBuf::from("/tmp/mine.log")),
        };
        let settings = Settings::resolve(raw, PathBuf::from("/data"));
        assert_eq!(settings.database_path, PathBuf::from("/tmp/mine.db"));
        assert_eq!(settings.log_file, PathBuf::from("/tmp/mine.log"));
        assert_eq!(settings.log_level, "debug");
    }

    #[test]
    fn test_missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let raw = read_layers(Some(dir.path().join("absent.toml"))).unwrap();
        assert_eq!(raw.log_level, "info");
    }

    #[test]
    fn test_reads_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "database_path = \"/srv/expenses.db\"\nlog_level = \"warn\"\n",
        )
        .unwrap();

        let raw = read_layers(Some(path)).unwrap();
        assert_eq!(raw.database_path, Some(PathBuf::from("/srv/expenses.db")));
        assert_eq!(raw.log_level, "warn");
        assert!(raw.log_file.is_none());
    }
}
