//! Global calgrid configuration.

use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::error::{CalGridError, CalGridResult};
use crate::event::DEFAULT_COLOR;

static DEFAULT_EVENTS_FILE: &str = "~/.local/share/calgrid/events.json";

fn default_events_file() -> PathBuf {
    PathBuf::from(DEFAULT_EVENTS_FILE)
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

fn default_true() -> bool {
    true
}

/// Configuration at ~/.config/calgrid/config.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CalgridConfig {
    /// Where the event collection is stored.
    #[serde(default = "default_events_file")]
    pub events_file: PathBuf,

    /// Color for new events created without one.
    #[serde(default = "default_color")]
    pub default_color: String,

    /// Start with a few sample events when no events file exists yet.
    #[serde(default = "default_true")]
    pub seed_sample_events: bool,
}

impl Default for CalgridConfig {
    fn default() -> Self {
        CalgridConfig {
            events_file: default_events_file(),
            default_color: default_color(),
            seed_sample_events: true,
        }
    }
}

impl CalgridConfig {
    pub fn config_path() -> CalGridResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CalGridError::Config("Could not determine config directory".into()))?
            .join("calgrid");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the user's config, creating a commented default file on first run.
    pub fn load() -> CalGridResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> CalGridResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .build()
            .map_err(|e| CalGridError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CalGridError::Config(e.to_string()))
    }

    /// Events file with `~` expanded.
    pub fn events_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.events_file.to_string_lossy()).into_owned();
        PathBuf::from(full_path_str)
    }

    pub fn save_to(&self, path: &Path) -> CalGridResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| CalGridError::Config(e.to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)
            .map_err(|e| CalGridError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> CalGridResult<()> {
        let contents = format!(
            "\
# calgrid configuration

# Where events are stored:
# events_file = \"{}\"

# Color for new events:
# default_color = \"{}\"

# Add sample events when starting without an events file:
# seed_sample_events = true
",
            DEFAULT_EVENTS_FILE, DEFAULT_COLOR
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CalGridError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| CalGridError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_commented_default_config_loads_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("calgrid/config.toml");

        CalgridConfig::create_default_config(&path).unwrap();
        let config = CalgridConfig::load_from(&path).unwrap();

        assert_eq!(config, CalgridConfig::default());
    }

    #[test]
    fn test_overrides_are_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "events_file = \"/tmp/cal/events.json\"\nseed_sample_events = false\n",
        )
        .unwrap();

        let config = CalgridConfig::load_from(&path).unwrap();
        assert_eq!(config.events_path(), PathBuf::from("/tmp/cal/events.json"));
        assert!(!config.seed_sample_events);
        assert_eq!(config.default_color, DEFAULT_COLOR);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/config.toml");
        let config = CalgridConfig {
            default_color: "#34a853".to_string(),
            ..Default::default()
        };

        config.save_to(&path).unwrap();
        assert_eq!(CalgridConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_tilde_is_expanded() {
        let config = CalgridConfig::default();
        assert!(!config.events_path().to_string_lossy().starts_with('~'));
    }
}
