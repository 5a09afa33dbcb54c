//! key-nudge - a shortcut-reminder engine for mouse-driven UIs
//!
//! Watches the host's UI event stream for mouse activations of widgets that
//! have a keyboard equivalent, and nudges the user toward the keyboard: a
//! flashing overlay reminder when a shortcut exists, and a periodic offer to
//! assign one when it doesn't.
//!
//! The host supplies the platform seams ([`HostServices`]); the engine
//! ([`KeyNudge`]) supplies the policy.

pub mod alarm;
pub mod command;
pub mod config;
pub mod dispatcher;
pub mod event;
pub mod logging;
pub mod overlay;
pub mod prompter;
pub mod resolver;
pub mod scheduler;
pub mod shortcut;
pub mod stats;
pub mod widget;

pub use command::{Command, CommandId};
pub use config::NudgeConfig;
pub use dispatcher::{EventListener, EventSource, HostServices, KeyNudge};
pub use event::{InteractionEvent, InteractionKind};
pub use shortcut::{Shortcut, ShortcutSet};
