//! Configuration module - Engine settings
//!
//! This module provides functionality for:
//! - Loading configuration from ~/.keynudge/config.json
//! - Default values for all settings
//! - Type definitions for the config structure
//!
//! # Module Structure
//!
//! - `defaults` - All default constant values
//! - `types` - Configuration struct definition (NudgeConfig)
//! - `loader` - File system loading and parsing

mod defaults;
mod loader;
mod types;

pub use loader::{default_config_path, load_config, load_config_from};
pub use types::NudgeConfig;

// Additional exports for tests
#[cfg(test)]
pub use defaults::{
    DEFAULT_DISPLAY_TIME_MS, DEFAULT_FLASH_INTERVAL_MS, DEFAULT_PROPOSE_EVERY,
    DEFAULT_TOOL_WINDOW_BUTTONS,
};

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
