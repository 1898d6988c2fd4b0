use crate::error::{CurioError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for curio, stored in config.json next to the gallery.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurioConfig {
    /// Result limit for searches (the API caps this server-side too).
    #[serde(default = "default_search_limit")]
    pub search_limit: u32,

    /// How many artworks a featured preview set holds.
    #[serde(default = "default_featured_count")]
    pub featured_count: u32,

    /// Rotation period for the featured preview, in milliseconds.
    #[serde(default = "default_rotation_millis")]
    pub rotation_millis: u64,
}

fn default_search_limit() -> u32 {
    crate::aic::DEFAULT_SEARCH_LIMIT
}

fn default_featured_count() -> u32 {
    crate::featured::FEATURED_PREVIEW_SIZE
}

fn default_rotation_millis() -> u64 {
    crate::featured::ROTATION_PERIOD.as_millis() as u64
}

impl Default for CurioConfig {
    fn default() -> Self {
        Self {
            search_limit: default_search_limit(),
            featured_count: default_featured_count(),
            rotation_millis: default_rotation_millis(),
        }
    }
}

impl CurioConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(CurioError::Io)?;
        let config: CurioConfig =
            serde_json::from_str(&content).map_err(CurioError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(CurioError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(CurioError::Serialization)?;
        fs::write(config_path, content).map_err(CurioError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CurioConfig::default();
        assert_eq!(config.search_limit, 24);
        assert_eq!(config.featured_count, 12);
        assert_eq!(config.rotation_millis, 4500);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = CurioConfig::load(temp_dir.path().join("absent")).unwrap();
        assert_eq!(config, CurioConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();

        let mut config = CurioConfig::default();
        config.search_limit = 8;
        config.save(temp_dir.path()).unwrap();

        let loaded = CurioConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.search_limit, 8);
    }

    #[test]
    fn test_partial_config_uses_field_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{ "search_limit": 5 }"#,
        )
        .unwrap();

        let loaded = CurioConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.search_limit, 5);
        assert_eq!(loaded.featured_count, 12);
    }
}
