// Global configuration management

use crate::nav::Screen;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub startup: StartupConfig,

    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StartupConfig {
    /// Screen mounted at launch
    #[serde(default)]
    pub start_screen: Screen,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw interval in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Capture mouse clicks and wheel scrolling
    #[serde(default = "default_true")]
    pub mouse: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// One of: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log file path; defaults to bloom.log next to the config file
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            mouse: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: default_log_level(),
            file: None,
        }
    }
}

impl Config {
    /// Directory holding config.toml and the default log file
    pub fn config_dir() -> Result<PathBuf> {
        let base = if cfg!(target_os = "macos") {
            dirs::home_dir()
                .context("Could not determine home directory")?
                .join(".config")
        } else {
            dirs::config_dir().context("Could not determine config directory")?
        };

        Ok(base.join("bloom"))
    }

    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load config from disk, or create default if it doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Config::default();

            // A read-only config dir shouldn't keep the app from starting
            if let Err(e) = config.save_to(&config_path) {
                eprintln!("Warning: Could not create default config file: {:#}", e);
                eprintln!("Using built-in defaults. Run 'bloom init-config' to create a config file.");
            }

            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save config to disk
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Resolved log file location
    pub fn log_path(&self) -> Result<PathBuf> {
        match &self.logging.file {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::config_dir()?.join("bloom.log")),
        }
    }
}
