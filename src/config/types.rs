//! Configuration type definitions
//!
//! This module contains the struct definitions for the engine settings.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::widget::WidgetCategory;

use super::defaults::*;

/// Engine settings: which widget categories are watched, overlay timing, and
/// the unbound-command prompt cadence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NudgeConfig {
    /// Watch tool-window (stripe) activation buttons (default: true)
    #[serde(default = "default_tool_window_buttons")]
    pub tool_window_buttons: bool,
    /// Watch generic labeled buttons (default: false)
    #[serde(default = "default_all_buttons")]
    pub all_buttons: bool,
    /// Watch menu items (default: true)
    #[serde(default = "default_menus")]
    pub menus: bool,
    /// Watch toolbar buttons (default: true)
    #[serde(default = "default_toolbar_buttons")]
    pub toolbar_buttons: bool,
    /// Total overlay display time in milliseconds (default: 3000)
    #[serde(default = "default_display_time_ms")]
    pub display_time_ms: u64,
    /// Interval between overlay repaints in milliseconds (default: 150).
    /// Zero means a single fixed-duration display with no intermediate
    /// repaints.
    #[serde(default = "default_flash_interval_ms")]
    pub flash_interval_ms: u64,
    /// Offer to bind a shortcut on every Nth mouse use of an unbound
    /// command (default: 3). Zero disables the prompt.
    #[serde(default = "default_propose_every")]
    pub propose_every: u64,
}

fn default_tool_window_buttons() -> bool {
    DEFAULT_TOOL_WINDOW_BUTTONS
}
fn default_all_buttons() -> bool {
    DEFAULT_ALL_BUTTONS
}
fn default_menus() -> bool {
    DEFAULT_MENUS
}
fn default_toolbar_buttons() -> bool {
    DEFAULT_TOOLBAR_BUTTONS
}
fn default_display_time_ms() -> u64 {
    DEFAULT_DISPLAY_TIME_MS
}
fn default_flash_interval_ms() -> u64 {
    DEFAULT_FLASH_INTERVAL_MS
}
fn default_propose_every() -> u64 {
    DEFAULT_PROPOSE_EVERY
}

impl Default for NudgeConfig {
    fn default() -> Self {
        NudgeConfig {
            tool_window_buttons: DEFAULT_TOOL_WINDOW_BUTTONS,
            all_buttons: DEFAULT_ALL_BUTTONS,
            menus: DEFAULT_MENUS,
            toolbar_buttons: DEFAULT_TOOLBAR_BUTTONS,
            display_time_ms: DEFAULT_DISPLAY_TIME_MS,
            flash_interval_ms: DEFAULT_FLASH_INTERVAL_MS,
            propose_every: DEFAULT_PROPOSE_EVERY,
        }
    }
}

impl NudgeConfig {
    /// Whether the given widget category is eligible for resolution.
    pub fn category_enabled(&self, category: WidgetCategory) -> bool {
        match category {
            WidgetCategory::ToolWindowButton => self.tool_window_buttons,
            WidgetCategory::GenericButton => self.all_buttons,
            WidgetCategory::MenuItem => self.menus,
            WidgetCategory::ToolbarButton => self.toolbar_buttons,
            WidgetCategory::Other => false,
        }
    }

    pub fn display_time(&self) -> Duration {
        Duration::from_millis(self.display_time_ms)
    }

    pub fn flash_interval(&self) -> Duration {
        Duration::from_millis(self.flash_interval_ms)
    }
}
