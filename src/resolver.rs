//! Resolves a UI-event source widget back to the command it represents.
//!
//! Two independent strategies merged by a priority chain: stripe and generic
//! buttons synthesize `Alt+<mnemonic>` from the widget itself, while menu
//! items and toolbar buttons go through a host-probed accessor that recovers
//! the hidden command reference. Accessor probes are expensive, so results
//! are memoized per widget class, and a failed probe is itself a cached
//! result: the class is never probed again.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

use crate::command::Command;
use crate::config::NudgeConfig;
use crate::shortcut::Shortcut;
use crate::widget::{AccessorProbe, CommandAccessor, SourceWidget, WidgetCategory, WidgetClass};

/// Outcome of resolving a widget. Both strings may be empty; an empty
/// `shortcut_text` with a present command marks an unbound command.
#[derive(Clone, Debug, Default)]
pub struct Resolution {
    pub shortcut_text: String,
    pub description: String,
    pub command: Option<Command>,
}

impl Resolution {
    fn empty() -> Self {
        Self::default()
    }

    pub fn has_shortcut(&self) -> bool {
        !self.shortcut_text.is_empty()
    }
}

/// Widget-to-command resolver with the memoized class→accessor cache.
///
/// Never errors: any introspection failure degrades to an empty resolution
/// so a misbehaving lookup cannot break the host's input pipeline.
pub struct CommandResolver {
    probe: Arc<dyn AccessorProbe>,
    accessors: Mutex<HashMap<WidgetClass, Option<Arc<dyn CommandAccessor>>>>,
}

impl CommandResolver {
    pub fn new(probe: Arc<dyn AccessorProbe>) -> Self {
        Self {
            probe,
            accessors: Mutex::new(HashMap::new()),
        }
    }

    pub fn resolve(&self, widget: &dyn SourceWidget, config: &NudgeConfig) -> Resolution {
        match widget.category() {
            WidgetCategory::ToolWindowButton => {
                if !config.tool_window_buttons {
                    return Resolution::empty();
                }
                // Stripe buttons are activated with Alt plus their position
                // digit; any other mnemonic is treated as absent.
                match widget.mnemonic() {
                    Some(mnemonic) if mnemonic.is_ascii_digit() => Resolution {
                        shortcut_text: Shortcut::alt_mnemonic(mnemonic).display_text(),
                        description: widget.label().unwrap_or_default(),
                        command: None,
                    },
                    _ => Resolution::empty(),
                }
            }
            WidgetCategory::GenericButton => {
                if !config.all_buttons {
                    return Resolution::empty();
                }
                match widget.mnemonic() {
                    Some(mnemonic) if mnemonic != '\0' => Resolution {
                        shortcut_text: Shortcut::alt_mnemonic(mnemonic).display_text(),
                        description: widget.label().unwrap_or_default(),
                        command: None,
                    },
                    _ => Resolution::empty(),
                }
            }
            WidgetCategory::MenuItem | WidgetCategory::ToolbarButton => {
                if !config.category_enabled(widget.category()) {
                    return Resolution::empty();
                }
                self.resolve_via_accessor(widget)
            }
            WidgetCategory::Other => Resolution::empty(),
        }
    }

    fn resolve_via_accessor(&self, widget: &dyn SourceWidget) -> Resolution {
        let Some(accessor) = self.accessor_for(&widget.class()) else {
            return Resolution::empty();
        };
        let Some(command) = accessor.extract(widget).and_then(|b| b.dereference()) else {
            return Resolution::empty();
        };

        Resolution {
            shortcut_text: command.shortcut_text().unwrap_or_default(),
            description: command.text.clone(),
            command: Some(command),
        }
    }

    /// Memoized class→accessor lookup. Probes at most once per distinct
    /// class; a `None` result is cached permanently (write-once) to bound
    /// the cost of repeated identical widgets.
    fn accessor_for(&self, class: &WidgetClass) -> Option<Arc<dyn CommandAccessor>> {
        let mut accessors = self.accessors.lock();
        if let Some(cached) = accessors.get(class) {
            return cached.clone();
        }
        let probed = self.probe.probe(class);
        if probed.is_none() {
            debug!(class = %class, "No command accessor for widget class");
        }
        accessors.insert(class.clone(), probed.clone());
        probed
    }

    /// Number of distinct widget classes probed so far.
    pub fn cached_classes(&self) -> usize {
        self.accessors.lock().len()
    }
}

#[cfg(test)]
pub use test_support::{StaticProbe, TestWidget};
