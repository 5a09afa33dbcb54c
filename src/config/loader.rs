//! Configuration loading from the file system
//!
//! Handles loading and parsing ~/.keynudge/config.json.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

use super::types::NudgeConfig;

/// Load configuration from ~/.keynudge/config.json
///
/// Returns `NudgeConfig::default()` if the file is missing, unreadable, or
/// fails to parse. A broken config must never keep the engine from
/// starting.
#[instrument(name = "load_config")]
pub fn load_config() -> NudgeConfig {
    load_config_from(&default_config_path())
}

/// Load configuration from an explicit path (used by tests).
pub fn load_config_from(path: &Path) -> NudgeConfig {
    if !path.exists() {
        info!(path = %path.display(), "Config file not found, using defaults");
        return NudgeConfig::default();
    }

    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to read config, using defaults");
            return NudgeConfig::default();
        }
    };

    match serde_json::from_str::<NudgeConfig>(&contents) {
        Ok(config) => {
            info!(path = %path.display(), "Successfully loaded config");
            config
        }
        Err(e) => {
            warn!(
                path = %path.display(),
                error = %e,
                "Failed to parse config JSON, using defaults"
            );
            NudgeConfig::default()
        }
    }
}

/// Path to the config file (~/.keynudge/config.json)
pub fn default_config_path() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".keynudge").join("config.json"))
        .unwrap_or_else(|| std::env::temp_dir().join("keynudge-config.json"))
}
