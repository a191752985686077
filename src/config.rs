/// Service configuration.
///
/// Endpoint locations and timeouts are read from a TOML file and injected
/// into the sheet/sync adapters at construction time, so the engine and its
/// tests never depend on real network endpoints. A `.env` file (or the
/// process environment) can override the two endpoint URLs, which keeps
/// deployment-specific script IDs out of the checked-in config.

use serde::Deserialize;
use std::time::Duration;

/// Environment variable overriding `script_url`.
pub const ENV_SCRIPT_URL: &str = "AQUAMON_SCRIPT_URL";
/// Environment variable overriding `csv_url`.
pub const ENV_CSV_URL: &str = "AQUAMON_CSV_URL";

const DEFAULT_SYNC_TIMEOUT_SECS: u64 = 3;
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// POST endpoint that appends a reading to the remote store.
    pub script_url: String,
    /// GET endpoint serving the historical log as a CSV export.
    pub csv_url: String,
    /// Bound on the single sync attempt. The reference behavior allows
    /// roughly 3 seconds before reporting a sync warning.
    #[serde(default = "default_sync_timeout")]
    pub sync_timeout_secs: u64,
    /// Bound on the history snapshot fetch.
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_secs: u64,
    /// Optional log file path, in addition to console output.
    #[serde(default)]
    pub log_file: Option<String>,
    /// Minimum log level name ("debug", "info", "warn", "error").
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_sync_timeout() -> u64 {
    DEFAULT_SYNC_TIMEOUT_SECS
}

fn default_fetch_timeout() -> u64 {
    DEFAULT_FETCH_TIMEOUT_SECS
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Loads configuration from a TOML file, then applies environment
    /// overrides for the endpoint URLs.
    pub fn load(path: &str) -> Result<Config, String> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read config file '{}': {}", path, e))?;
        let mut config: Config = toml::from_str(&text)
            .map_err(|e| format!("cannot parse config file '{}': {}", path, e))?;
        config.apply_env_overrides();
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var(ENV_SCRIPT_URL) {
            if !url.trim().is_empty() {
                self.script_url = url;
            }
        }
        if let Ok(url) = std::env::var(ENV_CSV_URL) {
            if !url.trim().is_empty() {
                self.csv_url = url;
            }
        }
    }

    pub fn sync_timeout(&self) -> Duration {
        Duration::from_secs(self.sync_timeout_secs)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
