//! Configuration for the radar front end.
//!
//! The web build embeds `radar.toml`; native callers can load any file with
//! [`RadarConfig::load_from_path`]. Every section is optional.

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing::warn;

use crate::error::RadarError;

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RadarConfig {
    pub api: ApiConfig,
    pub reveal: RevealConfig,
    pub storage: StorageConfig,
    pub export: ExportConfig,
    pub log: LogConfig,
}

/// Report endpoint settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Absolute URL, or a path resolved against the page origin.
    pub endpoint: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: "/api/report".into(),
        }
    }
}

/// Typewriter animation settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub tick_interval_ms: u64,
    pub chars_per_tick: usize,
    /// Send the user back to the form when there is no report to show.
    pub redirect_when_missing: bool,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 10,
            chars_per_tick: 3,
            redirect_when_missing: true,
        }
    }
}

impl RevealConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            key: "latest_report".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Appended to the subject name to form the download file name.
    pub file_suffix: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            file_suffix: "-competitor-report.txt".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// One of `error`, `warn`, `info`, `debug`, `trace`.
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}

impl RadarConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, RadarError> {
        let config: RadarConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a specific path.
    /// Returns default config if the file doesn't exist or is invalid.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!("Failed to parse {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Reject values the rest of the crate cannot work with.
    pub fn validate(&self) -> Result<(), RadarError> {
        if self.api.endpoint.trim().is_empty() {
            return Err(RadarError::Config("api.endpoint is empty".into()));
        }
        if self.reveal.chars_per_tick == 0 {
            return Err(RadarError::Config("reveal.chars_per_tick must be at least 1".into()));
        }
        if self.reveal.tick_interval_ms == 0 {
            return Err(RadarError::Config("reveal.tick_interval_ms must be at least 1".into()));
        }
        if self.storage.key.is_empty() {
            return Err(RadarError::Config("storage.key is empty".into()));
        }
        if !matches!(
            self.log.level.to_ascii_lowercase().as_str(),
            "error" | "warn" | "info" | "debug" | "trace"
        ) {
            return Err(RadarError::Config(format!("unknown log.level '{}'", self.log.level)));
        }
        Ok(())
    }

    /// Full endpoint URL. Relative endpoints are joined onto `origin`
    /// (e.g. `https://radar.example.com`).
    pub fn resolve_endpoint(&self, origin: &str) -> String {
        let endpoint = self.api.endpoint.trim();
        if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
            return endpoint.to_string();
        }
        let origin = origin.trim_end_matches('/');
        if endpoint.starts_with('/') {
            format!("{origin}{endpoint}")
        } else {
            format!("{origin}/{endpoint}")
        }
    }
}
