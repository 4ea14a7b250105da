//! Configuration management with file persistence

use anyhow::{Context, anyhow};
use chrono::{FixedOffset, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Largest UTC offset accepted for the schedule, in minutes (14 hours)
pub const MAX_UTC_OFFSET_MINUTES: i32 = 14 * 60;

/// Planboard configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub schedule: ScheduleConfig,
    pub logging: LoggingConfig,
}

/// Settings for date-based rules such as project time ranges
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Offset from UTC used to decide what "today" is
    pub utc_offset_minutes: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` filter directive, e.g. `info` or `planboard_core=debug`
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

impl ScheduleConfig {
    /// The calendar date at the configured offset
    pub fn today(&self) -> anyhow::Result<NaiveDate> {
        let offset = self
            .utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| anyhow!("Invalid UTC offset: {} minutes", self.utc_offset_minutes))?;
        Ok(Utc::now().with_timezone(&offset).date_naive())
    }

    fn validate(&self) -> anyhow::Result<()> {
        if !(-MAX_UTC_OFFSET_MINUTES..=MAX_UTC_OFFSET_MINUTES).contains(&self.utc_offset_minutes) {
            return Err(anyhow!(
                "UTC offset must be between -{max} and {max} minutes, got {}",
                self.utc_offset_minutes,
                max = MAX_UTC_OFFSET_MINUTES
            ));
        }
        Ok(())
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        let dir = if let Ok(custom_dir) = env::var("PLANBOARD_CONFIG_DIR") {
            PathBuf::from(custom_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| anyhow!("Could not determine config directory"))?
                .join("planboard")
        };
        Ok(dir)
    }

    /// Get the config file path
    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load configuration from the default location, or defaults if absent
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a file, or defaults if it doesn't exist
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(contents).context("Invalid configuration TOML")?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to the default location
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to a file, creating parent directories
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        self.validate()?;

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        self.schedule.validate()?;
        if self.logging.filter.trim().is_empty() {
            return Err(anyhow!("Logging filter cannot be empty"));
        }
        Ok(())
    }

    /// Get a configuration value by key
    pub fn get(&self, key: &str) -> anyhow::Result<String> {
        match key {
            "schedule.utc_offset_minutes" => Ok(self.schedule.utc_offset_minutes.to_string()),
            "logging.filter" => Ok(self.logging.filter.clone()),
            _ => Err(anyhow!("Unknown configuration key: {}", key)),
        }
    }

    /// Set a configuration value by key
    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        match key {
            "schedule.utc_offset_minutes" => {
                let offset: i32 = value
                    .parse()
                    .with_context(|| format!("Invalid utc_offset_minutes value: {}", value))?;
                let schedule = ScheduleConfig {
                    utc_offset_minutes: offset,
                };
                schedule.validate()?;
                self.schedule = schedule;
            }
            "logging.filter" => {
                if value.trim().is_empty() {
                    return Err(anyhow!("Logging filter cannot be empty"));
                }
                self.logging.filter = value.trim().to_string();
            }
            _ => return Err(anyhow!("Unknown configuration key: {}", key)),
        }
        Ok(())
    }

    /// List all configuration keys and their values
    pub fn list(&self) -> anyhow::Result<Vec<(String, String)>> {
        ["schedule.utc_offset_minutes", "logging.filter"]
            .into_iter()
            .map(|key| Ok((key.to_string(), self.get(key)?)))
            .collect()
    }

    /// Reset configuration to defaults by removing the config file
    pub fn reset() -> anyhow::Result<()> {
        let path = Self::config_path()?;
        if path.exists() {
            fs::remove_file(&path)
                .with_context(|| format!("Failed to remove config file: {}", path.display()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.schedule.utc_offset_minutes, 0);
        assert_eq!(config.logging.filter, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_toml_str_fills_missing_sections() {
        let config = Config::from_toml_str("[schedule]\nutc_offset_minutes = 120\n").unwrap();
        assert_eq!(config.schedule.utc_offset_minutes, 120);
        assert_eq!(config.logging.filter, "info");

        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_from_toml_str_rejects_out_of_range_offset() {
        let err = Config::from_toml_str("[schedule]\nutc_offset_minutes = 900\n").unwrap_err();
        assert!(err.to_string().contains("UTC offset"));
    }

    #[test]
    fn test_extreme_offsets_are_errors() {
        let err = Config::from_toml_str("[schedule]\nutc_offset_minutes = -2147483648\n").unwrap_err();
        assert!(err.to_string().contains("UTC offset"));
        assert!(Config::from_toml_str("[schedule]\nutc_offset_minutes = 2147483647\n").is_err());

        let mut config = Config::default();
        assert!(config.set("schedule.utc_offset_minutes", "-2147483648").is_err());
        assert!(config.set("schedule.utc_offset_minutes", "2147483647").is_err());
        assert_eq!(config.schedule.utc_offset_minutes, 0);

        for minutes in [i32::MIN, i32::MAX, MAX_UTC_OFFSET_MINUTES * 2] {
            let schedule = ScheduleConfig {
                utc_offset_minutes: minutes,
            };
            let err = schedule.today().unwrap_err();
            assert!(err.to_string().contains("Invalid UTC offset"));
        }
    }

    #[test]
    fn test_save_and_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.set("schedule.utc_offset_minutes", "-300").unwrap();
        config.set("logging.filter", "planboard_core=debug").unwrap();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_from_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let loaded = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_load_from_invalid_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "schedule = 5").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_get_set_list() {
        let mut config = Config::default();
        assert!(config.set("schedule.utc_offset_minutes", "abc").is_err());
        assert!(config.set("schedule.utc_offset_minutes", "841").is_err());
        assert!(config.set("logging.filter", "  ").is_err());
        assert!(config.set("unknown.key", "1").is_err());
        assert!(config.get("unknown.key").is_err());

        config.set("schedule.utc_offset_minutes", "60").unwrap();
        let list = config.list().unwrap();
        assert_eq!(
            list,
            vec![
                ("schedule.utc_offset_minutes".to_string(), "60".to_string()),
                ("logging.filter".to_string(), "info".to_string()),
            ]
        );
    }

    #[test]
    fn test_today_at_offset() {
        let schedule = ScheduleConfig {
            utc_offset_minutes: 0,
        };
        assert_eq!(schedule.today().unwrap(), Utc::now().date_naive());

        let east = ScheduleConfig {
            utc_offset_minutes: MAX_UTC_OFFSET_MINUTES,
        };
        let west = ScheduleConfig {
            utc_offset_minutes: -MAX_UTC_OFFSET_MINUTES,
        };
        assert!(east.today().unwrap() > west.today().unwrap());
    }
}
