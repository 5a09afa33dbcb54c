//! Notification scheduler: owns the single transient overlay and drives its
//! timed animation sequence.
//!
//! The session is an explicit finite-state object. A tick arrives from the
//! shared `TickScheduler`, repaints the overlay, and either re-arms the next
//! tick or tears the session down. Superseding a session cancels every
//! pending tick first (cancellation is total, not per-session) and disposes
//! the old overlay before the new one exists, so two overlays never coexist.

use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::alarm::TickScheduler;
use crate::overlay::{Overlay, OverlayFactory};
use crate::widget::WindowHandle;

/// The currently displayed overlay and its remaining animation steps.
struct NotificationSession {
    overlay: Box<dyn Overlay>,
    remaining_steps: u32,
    step_interval: Duration,
}

/// Compute the animation countdown from the two configured durations.
///
/// A zero flash interval means no intermediate repaints: one step lasting
/// the whole display time. Otherwise `floor(display / flash)` steps of the
/// flash interval each, clamped to at least one step so a display time
/// shorter than the flash interval still shows briefly.
fn animation_steps(display_time: Duration, flash_interval: Duration) -> (u32, Duration) {
    if flash_interval.is_zero() {
        return (1, display_time);
    }
    let steps = (display_time.as_millis() / flash_interval.as_millis()).max(1);
    (steps as u32, flash_interval)
}

/// Single-slot scheduler for the transient reminder overlay.
pub struct NotificationScheduler {
    factory: Arc<dyn OverlayFactory>,
    ticks: Arc<dyn TickScheduler>,
    session: Option<NotificationSession>,
}

impl NotificationScheduler {
    pub fn new(factory: Arc<dyn OverlayFactory>, ticks: Arc<dyn TickScheduler>) -> Self {
        Self {
            factory,
            ticks,
            session: None,
        }
    }

    /// Show a new reminder, superseding any in-flight session.
    pub fn notify(
        &mut self,
        anchor: &WindowHandle,
        message: &str,
        display_time: Duration,
        flash_interval: Duration,
    ) {
        // Interrupt any pending requests before touching the old session.
        self.ticks.cancel_all();
        self.teardown();

        let mut overlay = self.factory.create(anchor, message);
        overlay.show();

        let (remaining_steps, step_interval) = animation_steps(display_time, flash_interval);
        debug!(
            steps = remaining_steps,
            step_ms = step_interval.as_millis() as u64,
            "Showing reminder overlay"
        );
        self.session = Some(NotificationSession {
            overlay,
            remaining_steps,
            step_interval,
        });
        self.ticks.schedule(step_interval);
    }

    /// One animation step. Stale ticks (arriving after a cancel or after the
    /// session ended) are no-ops.
    pub fn tick(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.overlay.repaint();
        session.remaining_steps -= 1;
        if session.remaining_steps > 0 {
            let interval = session.step_interval;
            self.ticks.schedule(interval);
        } else {
            self.teardown();
        }
    }

    /// Force a hide/show/repaint cycle so the overlay stays painted above
    /// newly raised windows.
    pub fn refresh(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.overlay.hide();
            session.overlay.show();
            session.overlay.repaint();
        }
    }

    /// Cancel pending ticks and drop any live overlay. Idempotent.
    pub fn dismiss(&mut self) {
        self.ticks.cancel_all();
        self.teardown();
    }

    pub fn is_idle(&self) -> bool {
        self.session.is_none()
    }

    fn teardown(&mut self) {
        if let Some(mut session) = self.session.take() {
            session.overlay.dispose();
        }
    }
}
