//! Global user configuration for the loader itself.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use gradeps_util::errors::GradepsError;

use crate::repository::DuplicatePolicy;

/// Global user configuration loaded from `~/.gradeps/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default)]
    pub load: LoadConfig,
}

/// Load settings from `[load]` in the global config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoadConfig {
    /// Duplicate-repository policy applied when no `--duplicates` flag is
    /// given.
    #[serde(default)]
    pub duplicates: DuplicatePolicy,
}

impl GlobalConfig {
    /// Load the global configuration from `~/.gradeps/config.toml`, or
    /// return defaults if the file doesn't exist.
    pub fn load() -> miette::Result<Self> {
        let path = Self::default_path();
        if path.is_file() {
            let content = std::fs::read_to_string(&path).map_err(|e| GradepsError::Generic {
                message: format!("Failed to read global config: {e}"),
            })?;
            toml::from_str(&content).map_err(|e| {
                GradepsError::Generic {
                    message: format!("Failed to parse global config: {e}"),
                }
                .into()
            })
        } else {
            Ok(Self::default())
        }
    }

    /// Returns the default path to the global config file.
    pub fn default_path() -> PathBuf {
        dirs_path().join("config.toml")
    }
}

/// Returns the path to the gradeps data directory (`~/.gradeps/`).
pub fn dirs_path() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    Path::new(&home).join(".gradeps")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_empty() {
        let config: GlobalConfig = toml::from_str("").unwrap();
        assert_eq!(config.load.duplicates, DuplicatePolicy::Reject);
    }

    #[test]
    fn parses_dedupe_policy() {
        let config: GlobalConfig = toml::from_str("[load]\nduplicates = \"dedupe\"\n").unwrap();
        assert_eq!(config.load.duplicates, DuplicatePolicy::Dedupe);
    }

    #[test]
    fn rejects_unknown_policy() {
        assert!(toml::from_str::<GlobalConfig>("[load]\nduplicates = \"merge\"\n").is_err());
    }
}
