use crate::error::{Result, TodozError};
use crate::model::FilterMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// When to emit ANSI colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// `None` means "detect from the terminal".
    pub fn as_override(self) -> Option<bool> {
        match self {
            ColorChoice::Auto => None,
            ColorChoice::Always => Some(true),
            ColorChoice::Never => Some(false),
        }
    }
}

/// Configuration for todoz, stored in `<config dir>/config.json`.
///
/// Only session defaults live here; tasks themselves are never written to disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodozConfig {
    /// Start sessions with the example tasks
    #[serde(default = "default_seed")]
    pub seed: bool,

    /// Filter active when a session starts
    #[serde(default)]
    pub default_filter: FilterMode,

    #[serde(default)]
    pub color: ColorChoice,
}

fn default_seed() -> bool {
    true
}

impl Default for TodozConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            default_filter: FilterMode::All,
            color: ColorChoice::Auto,
        }
    }
}

impl TodozConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        serde_json::from_str(&content).map_err(|e| {
            TodozError::Config(format!("{}: {}", config_path.display(), e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = TodozConfig::default();
        assert!(config.seed);
        assert_eq!(config.default_filter, FilterMode::All);
        assert_eq!(config.color, ColorChoice::Auto);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        let config = TodozConfig::load(temp.path()).unwrap();
        assert_eq!(config, TodozConfig::default());
    }

    #[test]
    fn test_load_full_file() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILENAME),
            r#"{"seed": false, "default_filter": "INCOMPLETE", "color": "never"}"#,
        )
        .unwrap();

        let loaded = TodozConfig::load(temp.path()).unwrap();
        assert_eq!(
            loaded,
            TodozConfig {
                seed: false,
                default_filter: FilterMode::Incomplete,
                color: ColorChoice::Never,
            }
        );
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILENAME),
            r#"{"default_filter": "COMPLETE"}"#,
        )
        .unwrap();

        let loaded = TodozConfig::load(temp.path()).unwrap();
        assert!(loaded.seed);
        assert_eq!(loaded.default_filter, FilterMode::Complete);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), "{ not json").unwrap();

        let err = TodozConfig::load(temp.path()).unwrap_err();
        assert!(matches!(err, TodozError::Config(_)));
    }

    #[test]
    fn test_color_override() {
        assert_eq!(ColorChoice::Auto.as_override(), None);
        assert_eq!(ColorChoice::Always.as_override(), Some(true));
        assert_eq!(ColorChoice::Never.as_override(), Some(false));
    }
}
