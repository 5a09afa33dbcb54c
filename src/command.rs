//! Command model: the user-invokable actions this engine observes.
//!
//! Commands are owned entirely by the host application; the engine only
//! reads them. `CommandBinding` captures the two ways a widget can carry its
//! command: directly, or through a reference that is dereferenced on demand.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::shortcut::ShortcutSet;

/// Stable identifier for a command, assigned by the host's command registry.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommandId(String);

impl CommandId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CommandId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CommandId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// A user-invokable action with its template presentation and bound chords.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Command {
    pub id: CommandId,
    /// Display text from the command's template presentation.
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub shortcuts: ShortcutSet,
}

impl Command {
    pub fn new(id: impl Into<CommandId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            description: None,
            shortcuts: ShortcutSet::none(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_shortcuts(mut self, shortcuts: ShortcutSet) -> Self {
        self.shortcuts = shortcuts;
        self
    }

    /// Rendered first chord, or `None` when the command is unbound.
    pub fn shortcut_text(&self) -> Option<String> {
        self.shortcuts.reminder_text()
    }

    /// Label used when prompting about this command: the description when
    /// present, falling back to the display text.
    pub fn prompt_label(&self) -> &str {
        match self.description.as_deref() {
            Some(d) if !d.is_empty() => d,
            _ => &self.text,
        }
    }
}

/// An indirect reference to a command, resolved on demand.
///
/// Some widget kinds hold a reference-to-command rather than the command
/// itself; the host supplies the dereference.
pub trait CommandRef: Send + Sync {
    fn resolve(&self) -> Option<Command>;
}

/// What a command accessor yields from a widget: the command itself, or an
/// indirect reference to it.
#[derive(Clone)]
pub enum CommandBinding {
    Direct(Command),
    Indirect(Arc<dyn CommandRef>),
}

impl CommandBinding {
    /// Dereference to the underlying command. A dangling indirect reference
    /// degrades to `None` rather than erroring.
    pub fn dereference(&self) -> Option<Command> {
        match self {
            CommandBinding::Direct(command) => Some(command.clone()),
            CommandBinding::Indirect(reference) => reference.resolve(),
        }
    }
}

impl fmt::Debug for CommandBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandBinding::Direct(command) => f.debug_tuple("Direct").field(&command.id).finish(),
            CommandBinding::Indirect(_) => f.debug_tuple("Indirect").finish(),
        }
    }
}

/// Build the overlay reminder text from a resolution's parts.
///
/// The description is omitted when empty; the count always names how many
/// mouse triggers have been seen for this shortcut.
pub fn render_reminder(description: &str, shortcut_text: &str, count: u64) -> String {
    if description.is_empty() {
        format!("Press {shortcut_text} next time (mouse used {count} time(s))")
    } else {
        format!("{description}: press {shortcut_text} next time (mouse used {count} time(s))")
    }
}
