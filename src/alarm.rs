//! Shared deferred-task facility driving overlay animation ticks.
//!
//! One `Alarm` serves every notification session, which is what makes
//! superseding cheap: `cancel_all` invalidates everything pending in a
//! single generation bump instead of tracking per-session timers. Ticks are
//! delivered to a single sink; the engine marshals them back onto its own
//! state lock before touching the session.

use parking_lot::{Condvar, Mutex};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};
use tracing::trace;

/// Scheduling seam for animation ticks. `cancel_all` is total (every pending
/// tick, not a selected one) and idempotent.
pub trait TickScheduler: Send + Sync {
    fn schedule(&self, after: Duration);
    fn cancel_all(&self);
}

struct AlarmState {
    /// Bumped by `cancel_all`; a pending deadline from an older generation
    /// never fires.
    generation: u64,
    deadline: Option<Instant>,
    shutdown: bool,
}

struct AlarmShared {
    state: Mutex<AlarmState>,
    wakeup: Condvar,
}

/// Thread-backed `TickScheduler`. Holds at most one pending deadline, which
/// matches how the notification scheduler uses it: each tick schedules the
/// next.
pub struct Alarm {
    shared: Arc<AlarmShared>,
    worker: Option<JoinHandle<()>>,
}

impl Alarm {
    /// Spawn the alarm worker. `sink` is invoked once per elapsed deadline,
    /// on the worker thread.
    pub fn new(sink: impl Fn() + Send + Sync + 'static) -> Self {
        let shared = Arc::new(AlarmShared {
            state: Mutex::new(AlarmState {
                generation: 0,
                deadline: None,
                shutdown: false,
            }),
            wakeup: Condvar::new(),
        });

        let worker_shared = Arc::clone(&shared);
        let worker = std::thread::Builder::new()
            .name("key-nudge-alarm".to_string())
            .spawn(move || Self::run(worker_shared, sink))
            .ok();

        Self { shared, worker }
    }

    fn run(shared: Arc<AlarmShared>, sink: impl Fn()) {
        let mut state = shared.state.lock();
        loop {
            if state.shutdown {
                return;
            }
            match state.deadline {
                None => {
                    shared.wakeup.wait(&mut state);
                }
                Some(deadline) => {
                    let now = Instant::now();
                    if now < deadline {
                        shared.wakeup.wait_until(&mut state, deadline);
                        continue;
                    }
                    state.deadline = None;
                    let generation = state.generation;
                    drop(state);
                    sink();
                    state = shared.state.lock();
                    if state.generation != generation {
                        // Canceled while the sink ran; nothing else to do,
                        // the stale tick is a no-op downstream anyway.
                        trace!("alarm tick raced cancel_all");
                    }
                }
            }
        }
    }
}

impl TickScheduler for Alarm {
    fn schedule(&self, after: Duration) {
        let mut state = self.shared.state.lock();
        state.deadline = Some(Instant::now() + after);
        self.shared.wakeup.notify_all();
    }

    fn cancel_all(&self) {
        let mut state = self.shared.state.lock();
        state.generation = state.generation.wrapping_add(1);
        state.deadline = None;
        self.shared.wakeup.notify_all();
    }
}

impl Drop for Alarm {
    fn drop(&mut self) {
        {
            let mut state = self.shared.state.lock();
            state.shutdown = true;
            self.shared.wakeup.notify_all();
        }
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

/// Test scheduler: records requested delays instead of running a timer, so
/// tests drive ticks by hand.
#[cfg(test)]
pub struct ManualTicker {
    pub scheduled: Mutex<Vec<Duration>>,
    pub cancel_count: std::sync::atomic::AtomicUsize,
}

#[cfg(test)]
impl ManualTicker {
    pub fn new() -> Self {
        Self {
            scheduled: Mutex::new(Vec::new()),
            cancel_count: std::sync::atomic::AtomicUsize::new(0),
        }
    }

    pub fn scheduled_delays(&self) -> Vec<Duration> {
        self.scheduled.lock().clone()
    }

    pub fn cancels(&self) -> usize {
        self.cancel_count.load(std::sync::atomic::Ordering::SeqCst)
    }
}

#[cfg(test)]
impl TickScheduler for ManualTicker {
    fn schedule(&self, after: Duration) {
        self.scheduled.lock().push(after);
    }

    fn cancel_all(&self) {
        self.cancel_count
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn fires_after_the_delay() {
        let fired = Arc::new(AtomicUsize::new(0));
        let fired_clone = Arc::clone(&fired);
        let alarm = Alarm::new(move || {
            fired_clone.fetch_add(1, Ordering::SeqCst);
        });

        alarm.schedule(Duration::from_millis(20));
        std::thread::sleep(Duration::from_millis(200));
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn cancel_all_suppresses_a_pending_tick() {
        let fired = Arc::new(AtomicUsize::new(0));
        let fired_clone = Arc::clone(&fired);
        let alarm = Alarm::new(move || {
            fired_clone.fetch_add(1, Ordering::SeqCst);
        });

        alarm.schedule(Duration::from_millis(100));
        alarm.cancel_all();
        std::thread::sleep(Duration::from_millis(250));
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn cancel_all_with_nothing_pending_is_a_no_op() {
        let alarm = Alarm::new(|| {});
        alarm.cancel_all();
        alarm.cancel_all();
    }

    #[test]
    fn reschedule_replaces_the_pending_deadline() {
        let fired = Arc::new(AtomicUsize::new(0));
        let fired_clone = Arc::clone(&fired);
        let alarm = Alarm::new(move || {
            fired_clone.fetch_add(1, Ordering::SeqCst);
        });

        alarm.schedule(Duration::from_secs(60));
        alarm.schedule(Duration::from_millis(20));
        std::thread::sleep(Duration::from_millis(200));
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn drop_stops_the_worker() {
        let alarm = Alarm::new(|| {});
        alarm.schedule(Duration::from_secs(60));
        drop(alarm);
    }
}
