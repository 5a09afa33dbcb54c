//! Engine entry point and UI-event dispatch.
//!
//! `KeyNudge` subscribes to the host's global event stream, filters for the
//! few event kinds it cares about, and drives the rest of the crate: resolve
//! the source widget, count the usage, and either flash a shortcut reminder
//! or offer to assign one.

use parking_lot::Mutex;
use std::sync::{Arc, Weak};
use tracing::{debug, info, warn};

use crate::alarm::{Alarm, TickScheduler};
use crate::command::render_reminder;
use crate::config::NudgeConfig;
use crate::event::{InteractionEvent, InteractionKind};
use crate::overlay::OverlayFactory;
use crate::prompter::{KeymapEditor, PromptService, ShortcutAssignmentPrompter};
use crate::resolver::CommandResolver;
use crate::scheduler::NotificationScheduler;
use crate::stats::UsageStats;
use crate::widget::{AccessorProbe, SourceWidget};

/// Receives every UI event the host forwards.
pub trait EventListener: Send + Sync {
    fn on_event(&self, event: &InteractionEvent);
}

/// The host's global event stream. Listener identity is the `Arc`
/// allocation, so a listener added once is removed with the same handle.
pub trait EventSource: Send + Sync {
    fn add_listener(&self, listener: Arc<dyn EventListener>);
    fn remove_listener(&self, listener: &Arc<dyn EventListener>);
}

/// Everything the host platform must supply for the engine to run.
pub struct HostServices {
    pub probe: Arc<dyn AccessorProbe>,
    pub overlays: Arc<dyn OverlayFactory>,
    pub prompts: Arc<dyn PromptService>,
    pub keymap: Arc<dyn KeymapEditor>,
    pub events: Arc<dyn EventSource>,
}

/// The engine. Construct with [`KeyNudge::new`], then [`start`] to attach to
/// the host's event stream and [`stop`] to detach and tear down any visible
/// reminder.
///
/// [`start`]: KeyNudge::start
/// [`stop`]: KeyNudge::stop
pub struct KeyNudge {
    config: NudgeConfig,
    stats: Arc<UsageStats>,
    resolver: CommandResolver,
    prompter: ShortcutAssignmentPrompter,
    scheduler: Mutex<NotificationScheduler>,
    events: Arc<dyn EventSource>,
    started: Mutex<bool>,
    /// Handle to our own allocation, for registering as a listener without
    /// keeping ourselves alive through the subscription.
    self_ref: Weak<KeyNudge>,
}

impl KeyNudge {
    /// Builds the engine with its own timer thread driving reminder
    /// animation ticks.
    pub fn new(config: NudgeConfig, services: HostServices) -> Arc<Self> {
        Arc::new_cyclic(|weak: &Weak<KeyNudge>| {
            let alarm_ref = weak.clone();
            let alarm = Alarm::new(move || {
                // Engine dropped while a tick was in flight: nothing to do.
                if let Some(engine) = alarm_ref.upgrade() {
                    engine.tick();
                }
            });
            Self::build(config, services, Arc::new(alarm), weak.clone())
        })
    }

    /// Builds the engine over an externally driven tick scheduler.
    #[cfg(test)]
    pub fn with_ticker(
        config: NudgeConfig,
        services: HostServices,
        ticks: Arc<dyn TickScheduler>,
    ) -> Arc<Self> {
        Arc::new_cyclic(|weak| Self::build(config, services, ticks, weak.clone()))
    }

    fn build(
        config: NudgeConfig,
        services: HostServices,
        ticks: Arc<dyn TickScheduler>,
        self_ref: Weak<KeyNudge>,
    ) -> Self {
        let stats = Arc::new(UsageStats::new());
        let prompter = ShortcutAssignmentPrompter::new(
            stats.clone(),
            services.prompts,
            services.keymap,
            config.propose_every,
        );
        Self {
            config,
            stats,
            resolver: CommandResolver::new(services.probe),
            prompter,
            scheduler: Mutex::new(NotificationScheduler::new(services.overlays, ticks)),
            events: services.events,
            started: Mutex::new(false),
            self_ref,
        }
    }

    /// Attaches to the host's event stream. Starting twice is a logged no-op.
    pub fn start(&self) {
        let mut started = self.started.lock();
        if *started {
            warn!("Engine already started");
            return;
        }
        let Some(this) = self.self_ref.upgrade() else {
            return;
        };
        self.events.add_listener(this);
        *started = true;
        info!("Shortcut reminder engine started");
    }

    /// Detaches from the event stream and tears down any visible reminder.
    pub fn stop(&self) {
        let mut started = self.started.lock();
        if !*started {
            return;
        }
        *started = false;
        if let Some(this) = self.self_ref.upgrade() {
            let handle: Arc<dyn EventListener> = this;
            self.events.remove_listener(&handle);
        }
        self.scheduler.lock().dismiss();
        info!("Shortcut reminder engine stopped");
    }

    /// Filters one host event. Only primary mouse releases and window
    /// activation or movement do anything.
    pub fn dispatch(&self, event: &InteractionEvent) {
        match event.kind {
            InteractionKind::PrimaryRelease => self.handle_primary_release(event.source.as_ref()),
            InteractionKind::WindowActivated | InteractionKind::WindowMoved => {
                // Keep a live reminder on top of and aligned with its window.
                self.scheduler.lock().refresh();
            }
            InteractionKind::SecondaryRelease | InteractionKind::KeyPress => {}
        }
    }

    fn handle_primary_release(&self, widget: &dyn SourceWidget) {
        let resolution = self.resolver.resolve(widget, &self.config);
        let Some(anchor) = widget.window() else {
            // A widget with no window cannot anchor a reminder or a prompt.
            debug!(class = %widget.class(), "Dropping event from windowless widget");
            return;
        };

        if resolution.has_shortcut() {
            let count = self.stats.record_shortcut_use(&resolution.shortcut_text);
            let message = render_reminder(&resolution.description, &resolution.shortcut_text, count);
            self.scheduler.lock().notify(
                &anchor,
                &message,
                self.config.display_time(),
                self.config.flash_interval(),
            );
        } else if let Some(command) = resolution.command {
            self.prompter.record_use(&command, &anchor);
        }
    }

    /// One animation step, delivered from the tick scheduler's thread.
    pub fn tick(&self) {
        self.scheduler.lock().tick();
    }

    pub fn stats(&self) -> &Arc<UsageStats> {
        &self.stats
    }
}

impl EventListener for KeyNudge {
    fn on_event(&self, event: &InteractionEvent) {
        self.dispatch(event);
    }
}
