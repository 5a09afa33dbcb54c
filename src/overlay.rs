//! The transient overlay seam.
//!
//! Rendering and layout of the reminder window belong to the host; this
//! crate only drives lifecycle and repaints. The host's overlay is expected
//! to use the repaint ticks for its own fade/flash effect.

use crate::widget::WindowHandle;

/// An opaque paintable overlay window anchored near the triggering widget.
pub trait Overlay: Send {
    fn show(&mut self);
    fn hide(&mut self);
    /// Requested on every animation step; the overlay decides what a repaint
    /// means visually.
    fn repaint(&mut self);
    /// Tear the window down. Called exactly once per overlay.
    fn dispose(&mut self);
}

/// Creates overlays anchored to a host top-level window.
pub trait OverlayFactory: Send + Sync {
    fn create(&self, anchor: &WindowHandle, message: &str) -> Box<dyn Overlay>;
}

#[cfg(test)]
pub use test_support::{OverlayEvent, RecordingOverlayFactory};
