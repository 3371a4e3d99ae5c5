//! Dashboard settings and the validated trend window.
//!
//! Settings come from an optional TOML file. The dataset location is a fixed
//! constant and is deliberately not part of the settings.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Fixed location of the sales history, relative to the working directory.
pub const DATASET_PATH: &str = "satis_verisi_2024.csv";

/// Settings file looked up in the working directory first.
pub const LOCAL_SETTINGS_FILE: &str = "stocksense.toml";

/// Smallest window the trend engine is driven with.
pub const MIN_WINDOW: usize = 3;
/// Largest window the trend engine is driven with.
pub const MAX_WINDOW: usize = 30;
pub const DEFAULT_WINDOW: usize = 7;
pub const DEFAULT_STOCK: u64 = 50;

/// Days covered by the weekly demand estimate.
pub const FORECAST_HORIZON_DAYS: u32 = 7;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read settings {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse settings TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("window {0} out of range ({min}..={max})", min = MIN_WINDOW, max = MAX_WINDOW)]
    WindowOutOfRange(usize),
}

/// Moving-average window size, always within `MIN_WINDOW..=MAX_WINDOW`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct TrendWindow(usize);

impl TrendWindow {
    pub fn new(days: usize) -> Result<Self, ConfigError> {
        if (MIN_WINDOW..=MAX_WINDOW).contains(&days) {
            Ok(Self(days))
        } else {
            Err(ConfigError::WindowOutOfRange(days))
        }
    }

    /// Pin an arbitrary value into range, as a slider does.
    pub fn clamped(days: usize) -> Self {
        Self(days.clamp(MIN_WINDOW, MAX_WINDOW))
    }

    pub fn get(self) -> usize {
        self.0
    }

    pub fn increment(self) -> Self {
        Self::clamped(self.0 + 1)
    }

    pub fn decrement(self) -> Self {
        Self::clamped(self.0.saturating_sub(1))
    }
}

impl Default for TrendWindow {
    fn default() -> Self {
        Self(DEFAULT_WINDOW)
    }
}

impl TryFrom<usize> for TrendWindow {
    type Error = ConfigError;

    fn try_from(days: usize) -> Result<Self, Self::Error> {
        Self::new(days)
    }
}

impl From<TrendWindow> for usize {
    fn from(w: TrendWindow) -> usize {
        w.0
    }
}

impl std::fmt::Display for TrendWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User-tunable defaults for the dashboard and CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Initial moving-average window.
    pub default_window: TrendWindow,
    /// Initial stock level in the stock input.
    pub default_stock: u64,
    /// TUI input poll interval.
    pub tick_rate_ms: u64,
    /// `tracing` filter used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_window: TrendWindow::default(),
            default_stock: DEFAULT_STOCK,
            tick_rate_ms: 50,
            log_filter: "info".to_string(),
        }
    }
}

impl Settings {
    /// Parse settings from a TOML string. Missing keys take their defaults.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load settings from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Candidate settings files in lookup order.
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(LOCAL_SETTINGS_FILE)];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("stocksense").join("config.toml"));
        }
        paths
    }

    /// Load the first settings file that exists, or defaults if none does.
    pub fn discover() -> Result<(Self, Option<PathBuf>), ConfigError> {
        for path in Self::search_paths() {
            if path.is_file() {
                let settings = Self::from_file(&path)?;
                return Ok((settings, Some(path)));
            }
        }
        Ok((Self::default(), None))
    }
}
