//! Host-facing widget abstraction and the command extraction seams.
//!
//! UI widget classes are not known to this crate in advance. The host
//! implements `SourceWidget` for its widget wrappers and `AccessorProbe` for
//! the (expensive) discovery of how a given widget class carries its
//! command. The resolver memoizes probe results per `WidgetClass`, including
//! negative ones.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::command::CommandBinding;

/// Runtime class tag of a widget; the memoization key for accessor probes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct WidgetClass(String);

impl WidgetClass {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WidgetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Widget categories this engine reacts to. Each category is gated by its
/// own config toggle and selects the extraction strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WidgetCategory {
    /// Tool-window activation (stripe) button; digit mnemonics only.
    ToolWindowButton,
    /// Generic labeled button with an optional mnemonic.
    GenericButton,
    MenuItem,
    ToolbarButton,
    /// Anything else; never resolves.
    Other,
}

/// Opaque handle to a host top-level window, used to anchor overlays and
/// modal prompts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WindowHandle(u64);

impl WindowHandle {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

/// A UI-event source widget, as seen by the engine.
///
/// Implemented by the host for its toolbar buttons, menu items, stripe
/// buttons, and so on. All methods are cheap reads; the expensive command
/// discovery lives behind `AccessorProbe`.
pub trait SourceWidget: Send + Sync {
    fn class(&self) -> WidgetClass;

    fn category(&self) -> WidgetCategory;

    /// Accelerator character associated with the widget, if any. Hosts
    /// report a missing or zero mnemonic as `None`.
    fn mnemonic(&self) -> Option<char> {
        None
    }

    /// Display label, used as the reminder description on mnemonic paths.
    fn label(&self) -> Option<String> {
        None
    }

    /// The owning top-level window. Interactions on widgets with no
    /// resolvable window are dropped entirely.
    fn window(&self) -> Option<WindowHandle>;

    /// Downcast hook for accessors that need the concrete widget type.
    fn as_any(&self) -> &dyn Any;
}

/// Extraction strategy for one widget class: given a widget of that class,
/// yield the command binding it carries.
pub trait CommandAccessor: Send + Sync {
    fn extract(&self, widget: &dyn SourceWidget) -> Option<CommandBinding>;
}

/// Discovers the accessor for a widget class, or reports that the class
/// carries no command. Probing is expensive; the resolver calls this at most
/// once per distinct class.
pub trait AccessorProbe: Send + Sync {
    fn probe(&self, class: &WidgetClass) -> Option<Arc<dyn CommandAccessor>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widget_class_equality_is_by_name() {
        assert_eq!(WidgetClass::new("ToolbarButton"), WidgetClass::new("ToolbarButton"));
        assert_ne!(WidgetClass::new("ToolbarButton"), WidgetClass::new("MenuItem"));
    }

    #[test]
    fn window_handle_round_trips_its_id() {
        assert_eq!(WindowHandle::new(7).id(), 7);
    }
}
