use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

use crate::ticker::DEFAULT_TICK_INTERVAL;
use crate::ui::ToastLevel;

const CONFIG_FILE_NAME: &str = "config.toml";

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error (file system)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file exists but is not valid TOML
    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Unable to determine config directory")]
    NoConfigDir,
}

/// Dashboard configuration persisted as TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub meter: MeterConfig,
    #[serde(default)]
    pub toast: ToastConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Theme name; unknown names keep the default theme
    pub theme: String,

    /// Whether the sidebar starts visible
    pub sidebar_visible: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: "industrial-dark".to_string(),
            sidebar_visible: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MeterConfig {
    /// Seconds between service meter ticks; 0 selects the built-in interval
    pub interval_secs: u64,

    /// Whether the meter starts paused
    pub start_paused: bool,
}

impl Default for MeterConfig {
    fn default() -> Self {
        Self {
            interval_secs: DEFAULT_TICK_INTERVAL.as_secs(),
            start_paused: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
    /// Maximum number of toasts kept on screen at once
    pub max_visible: usize,

    /// Seconds before a toast auto-dismisses; 0 keeps toasts until dismissed
    pub default_timeout_secs: u64,

    /// Severity name for the startup notice; unrecognized names mean info
    pub startup_level: String,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            max_visible: 4,
            default_timeout_secs: 0,
            startup_level: "info".to_string(),
        }
    }
}

impl DashboardConfig {
    /// Load configuration, falling back to defaults on any failure.
    /// A missing file is normal; a malformed one is logged and ignored.
    pub fn load_or_default(config_dir: Option<&Path>) -> Self {
        match Self::load(config_dir) {
            Ok(config) => config,
            Err(e) => {
                warn!("Falling back to default config: {}", e);
                Self::default()
            }
        }
    }

    /// Load configuration from file
    pub fn load(config_dir: Option<&Path>) -> ConfigResult<Self> {
        let config_path = Self::config_file_path(config_dir)?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: DashboardConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, config_dir: Option<&Path>) -> ConfigResult<()> {
        let config_path = Self::config_file_path(config_dir)?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(&config_path, content)?;
        Ok(())
    }

    /// Get the path to the configuration file
    pub fn config_file_path(config_dir: Option<&Path>) -> ConfigResult<PathBuf> {
        if let Some(dir) = config_dir {
            return Ok(dir.join(CONFIG_FILE_NAME));
        }

        let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(base.join("fleetdeck").join(CONFIG_FILE_NAME))
    }

    pub fn meter_interval(&self) -> Duration {
        if self.meter.interval_secs == 0 {
            DEFAULT_TICK_INTERVAL
        } else {
            Duration::from_secs(self.meter.interval_secs)
        }
    }

    pub fn toast_default_timeout(&self) -> Option<Duration> {
        if self.toast.default_timeout_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(self.toast.default_timeout_secs))
        }
    }

    pub fn startup_toast_level(&self) -> ToastLevel {
        ToastLevel::from_name(&self.toast.startup_level)
    }
}
