//! Queue and cache configuration.

#![allow(clippy::unwrap_used)] // Tests use unwrap for brevity

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::types::BLOCK_SIZE;

/// File name looked up in the platform config directory.
const CONFIG_FILE_NAME: &str = "express.json";

/// Sound cache geometry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CacheConfig {
    /// Number of buffers resident at once.
    pub slots: usize,
    /// Size of each buffer in bytes.
    pub slot_size: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            slots: 6,
            slot_size: 92_160,
        }
    }
}

impl CacheConfig {
    pub fn validate(&self) -> Result<()> {
        if self.slots == 0 {
            return Err(Error::Config("cache needs at least one slot".to_string()));
        }
        if self.slot_size < BLOCK_SIZE {
            return Err(Error::Config(format!(
                "cache slot of {} bytes cannot hold a {BLOCK_SIZE}-byte block",
                self.slot_size
            )));
        }
        Ok(())
    }

    /// Total arena size in bytes.
    pub const fn arena_size(&self) -> usize {
        self.slots * self.slot_size
    }
}

/// Sound queue configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct QueueConfig {
    /// Interval between maintenance passes, in milliseconds.
    pub tick_interval_ms: u64,
    pub cache: CacheConfig,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 66,
            cache: CacheConfig::default(),
        }
    }
}

impl QueueConfig {
    pub const fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn validate(&self) -> Result<()> {
        if self.tick_interval_ms == 0 {
            return Err(Error::Config("tick interval must be non-zero".to_string()));
        }
        self.cache.validate()
    }

    /// Read and validate a JSON configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        debug!("Loaded queue config from {}", path.display());
        Ok(config)
    }

    /// Load `path` if given, else the platform config file, else defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => {
                info!("No queue config found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Platform config file location, if the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "express", "Express")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_geometry() {
        let config = QueueConfig::default();
        assert_eq!(config.cache.slots, 6);
        assert_eq!(config.cache.slot_size, 92_160);
        assert_eq!(config.cache.arena_size(), 6 * 92_160);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_geometry() {
        let mut config = QueueConfig::default();
        config.cache.slots = 0;
        assert!(matches!(config.validate(), Err(Error::Config(_))));

        config.cache.slots = 2;
        config.cache.slot_size = 16;
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "cache": {{ "slots": 3 }} }}"#).unwrap();

        let config = QueueConfig::load(file.path()).unwrap();
        assert_eq!(config.cache.slots, 3);
        assert_eq!(config.cache.slot_size, 92_160);
        assert_eq!(config.tick_interval_ms, 66);
    }

    #[test]
    fn test_load_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            QueueConfig::load(file.path()),
            Err(Error::Json(_))
        ));
    }
}
