//! Booth configuration.
//!
//! A small TOML file under the platform config directory; every key is
//! optional and falls back to the kiosk defaults, and an unreadable file
//! falls back wholesale with a warning rather than blocking the booth.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BoothConfig {
    /// Base URL of the generation backend.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Upper bound on one generation round-trip, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Countdown length before a live capture.
    #[serde(default = "default_countdown_start")]
    pub countdown_start: u32,

    /// Countdown tick interval, in milliseconds.
    #[serde(default = "default_countdown_interval_ms")]
    pub countdown_interval_ms: u64,

    /// Camera device index on the kiosk hardware.
    #[serde(default)]
    pub camera_index: u32,

    /// Name used when the operator leaves theirs blank.
    #[serde(default = "default_display_name")]
    pub display_name_default: String,
}

fn default_api_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_request_timeout_secs() -> u64 {
    120
}

fn default_countdown_start() -> u32 {
    3
}

fn default_countdown_interval_ms() -> u64 {
    1000
}

fn default_display_name() -> String {
    "Guest".to_string()
}

impl Default for BoothConfig {
    fn default() -> Self {
        toml::from_str("").expect("empty config deserializes to defaults")
    }
}

impl BoothConfig {
    /// Conventional location: `<config dir>/gradbooth/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("gradbooth").join("config.toml"))
    }

    pub fn load(path: &Path) -> Result<Self, String> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {}", path.display(), e))?;
        let config: Self = toml::from_str(&raw)
            .map_err(|e| format!("Failed to parse config {}: {}", path.display(), e))?;
        info!("Loaded booth config from {}", path.display());
        Ok(config)
    }

    /// Load `path`, falling back to defaults when it is missing or invalid.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{}; using defaults", e);
                Self::default()
            }
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn countdown_interval(&self) -> Duration {
        Duration::from_millis(self.countdown_interval_ms)
    }
}
