//! Analysis configuration: which tokens are exempt from stemming.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Environment variable holding the path of a JSON config file.
pub const CONFIG_PATH_ENV: &str = "RSLP_CONFIG";
/// Environment variable holding extra comma-separated keywords.
pub const KEYWORDS_ENV: &str = "RSLP_KEYWORDS";

/// Token-filter configuration (persisted as JSON).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Words passed through unstemmed (flagged as keywords).
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Match keywords case-insensitively.
    #[serde(default)]
    pub ignore_case: bool,
}

impl AnalysisConfig {
    /// Load config from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: AnalysisConfig = serde_json::from_str(&raw)?;
        info!(
            "Loaded analysis config from {} ({} keywords)",
            path.display(),
            config.keywords.len()
        );
        Ok(config)
    }

    /// Build config from `RSLP_CONFIG` (file) and `RSLP_KEYWORDS` (list).
    ///
    /// A missing `RSLP_CONFIG` yields the default config; a set but
    /// unreadable one is an error.
    pub fn from_env() -> Result<Self> {
        let mut config = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) if !path.trim().is_empty() => Self::load(Path::new(path.trim()))
                .map_err(|e| Error::Config(format!("{}={}: {}", CONFIG_PATH_ENV, path, e)))?,
            _ => Self::default(),
        };

        if let Ok(extra) = std::env::var(KEYWORDS_ENV) {
            config.merge_keywords(&extra);
        }

        Ok(config)
    }

    /// Append comma-separated keywords, skipping blanks and duplicates.
    pub fn merge_keywords(&mut self, list: &str) {
        for word in list.split(',').map(str::trim).filter(|w| !w.is_empty()) {
            if !self.keywords.iter().any(|k| k == word) {
                debug!("Adding keyword {}", word);
                self.keywords.push(word.to_string());
            }
        }
    }

    /// Save config to disk as pretty JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        info!("Saved analysis config to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_defaults_missing_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("analysis.json");
        std::fs::write(&path, "{}").unwrap();

        let config = AnalysisConfig::load(&path).unwrap();
        assert_eq!(config, AnalysisConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("analysis.json");
        let config = AnalysisConfig {
            keywords: vec!["mesa".into(), "São Paulo".into()],
            ignore_case: true,
        };
        config.save(&path).unwrap();

        assert_eq!(AnalysisConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        assert!(matches!(AnalysisConfig::load(&missing), Err(Error::Io(_))));

        let broken = dir.path().join("broken.json");
        std::fs::write(&broken, "{\"keywords\": [").unwrap();
        assert!(matches!(AnalysisConfig::load(&broken), Err(Error::Json(_))));
    }

    #[test]
    fn test_merge_keywords() {
        let mut config = AnalysisConfig {
            keywords: vec!["casa".into()],
            ignore_case: false,
        };
        config.merge_keywords(" casa, mesas ,, cantando ");
        assert_eq!(config.keywords, vec!["casa", "mesas", "cantando"]);
    }
}
