//! Notepad configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::CoreError;
use crate::theme::Theme;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path to the database file
    pub database_path: PathBuf,
    /// Theme used until the user picks one
    pub default_theme: Theme,
    /// Whether the Markdown split view starts enabled
    pub preview_enabled: bool,
}

impl Config {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            database_path: data_dir.join("tabpad.db"),
            default_theme: Theme::Light,
            preview_enabled: false,
        }
    }

    pub fn data_dir() -> PathBuf {
        dirs::data_local_dir()
            .map(|d| d.join("tabpad"))
            .unwrap_or_else(|| PathBuf::from(".tabpad"))
    }

    /// Read a TOML config file. Fields left out keep their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| CoreError::Config(format!("{}: {}", path.display(), e)))?;

        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Self::data_dir())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let config = Config::new(PathBuf::from("/tmp/pad"));
        assert_eq!(config.database_path, PathBuf::from("/tmp/pad/tabpad.db"));
        assert_eq!(config.default_theme, Theme::Light);
        assert!(!config.preview_enabled);
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tabpad.toml");
        std::fs::write(&path, "default_theme = \"sepia\"\npreview_enabled = true\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.default_theme, Theme::Sepia);
        assert!(config.preview_enabled);
        assert_eq!(config.database_path, Config::default().database_path);
    }

    #[test]
    fn test_load_rejects_bad_theme() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tabpad.toml");
        std::fs::write(&path, "default_theme = \"neon\"\n").unwrap();

        assert!(matches!(Config::load(&path), Err(CoreError::Config(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Config::load(dir.path().join("absent.toml")),
            Err(CoreError::Io(_))
        ));
    }
}
