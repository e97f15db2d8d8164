//! Configuration management for UI preferences.
//!
//! Only preferences are stored here, list items are never written to disk.

use std::time::Duration;

use color_eyre::eyre::Result;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::ui::colors::Theme;

pub const DEFAULT_NOTIFICATION_TIMEOUT_STR: &str = "2s";
pub const DEFAULT_NOTIFICATION_TIMEOUT: Duration = Duration::from_secs(2);

/// Persisted user preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub theme: String,
    /// How long notifications stay on screen, in humantime format ("2s")
    pub notification_timeout: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::Blue.to_string(),
            notification_timeout: DEFAULT_NOTIFICATION_TIMEOUT_STR.to_string(),
        }
    }
}

impl Config {
    /// Parses the notification timeout, falling back to the default when the
    /// value is not a valid duration.
    pub fn notification_timeout(&self) -> Duration {
        humantime::parse_duration(&self.notification_timeout).unwrap_or_else(
            |e| {
                log::warn!(
                    "invalid notification timeout {:?}, using default: {}",
                    self.notification_timeout,
                    e
                );
                DEFAULT_NOTIFICATION_TIMEOUT
            },
        )
    }
}

/// Persists and retrieves the config from a YAML file.
#[derive(Builder)]
#[builder(setter(into), build_fn(private, name = "_build"))]
pub struct ConfigManager {
    /// The path the config file
    path: String,
    #[builder(setter(skip))]
    config: Config,
}

impl ConfigManagerBuilder {
    pub fn build(&self) -> Result<ConfigManager> {
        let mut manager = self._build()?;

        match std::fs::File::open(&manager.path) {
            Ok(file) => {
                manager.config = match serde_yaml::from_reader(file) {
                    Ok(c) => c,
                    Err(e) => {
                        log::warn!(
                            "Failed to parse config file, using defaults: {}",
                            e
                        );
                        Config::default()
                    }
                };
                Ok(manager)
            }
            Err(_) => {
                manager.config = Config::default();
                manager.write()?;
                Ok(manager)
            }
        }
    }
}

impl ConfigManager {
    /// Returns a new instance of ConfigManagerBuilder.
    pub fn builder() -> ConfigManagerBuilder {
        ConfigManagerBuilder::default()
    }

    /// Returns the current config.
    pub fn get(&self) -> Config {
        self.config.clone()
    }

    /// Replaces the current config and persists it to disk.
    pub fn update(&mut self, config: Config) -> Result<()> {
        self.config = config;
        self.write()
    }

    fn write(&self) -> Result<()> {
        let serialized = serde_yaml::to_string(&self.config)?;
        std::fs::write(&self.path, serialized)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "./config_tests.rs"]
mod tests;
