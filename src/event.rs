//! Interaction events delivered from the host's global UI event stream.

use std::sync::Arc;

use crate::widget::SourceWidget;

/// The kinds of UI events the host forwards. Only `PrimaryRelease`,
/// `WindowActivated`, and `WindowMoved` have any effect; everything else is
/// ignored with no side effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionKind {
    /// Primary (left) mouse button released over the source widget.
    PrimaryRelease,
    SecondaryRelease,
    KeyPress,
    WindowActivated,
    WindowMoved,
}

/// A point-in-time UI occurrence with its source widget.
///
/// Positional data from pointer events is irrelevant to this engine and is
/// not carried.
#[derive(Clone)]
pub struct InteractionEvent {
    pub kind: InteractionKind,
    pub source: Arc<dyn SourceWidget>,
}

impl InteractionEvent {
    pub fn new(kind: InteractionKind, source: Arc<dyn SourceWidget>) -> Self {
        Self { kind, source }
    }
}

impl std::fmt::Debug for InteractionEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InteractionEvent")
            .field("kind", &self.kind)
            .field("source", &self.source.class())
            .finish()
    }
}
