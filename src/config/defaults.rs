//! Default configuration values
//!
//! Single source of truth for every `NudgeConfig` default.

/// Watch tool-window (stripe) activation buttons by default
pub const DEFAULT_TOOL_WINDOW_BUTTONS: bool = true;

/// Watch generic labeled buttons by default
pub const DEFAULT_ALL_BUTTONS: bool = false;

/// Watch menu items by default
pub const DEFAULT_MENUS: bool = true;

/// Watch toolbar buttons by default
pub const DEFAULT_TOOLBAR_BUTTONS: bool = true;

/// Total overlay display time in milliseconds
pub const DEFAULT_DISPLAY_TIME_MS: u64 = 3000;

/// Interval between overlay repaints (flash steps) in milliseconds.
/// Zero disables intermediate repaints: one fixed-duration display.
pub const DEFAULT_FLASH_INTERVAL_MS: u64 = 150;

/// Offer to bind a shortcut on every Nth mouse use of an unbound command.
/// Zero disables the prompt entirely.
pub const DEFAULT_PROPOSE_EVERY: u64 = 3;
