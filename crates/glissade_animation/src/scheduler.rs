//! Timer scheduler
//!
//! Holds the pending timed work of a widget: named debounces and tasks
//! deferred to the next tick. The clock is logical and is moved only by
//! [`TimerScheduler::advance`], so hosts decide what a tick is.

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use std::collections::VecDeque;
use std::time::Duration;

new_key_type! {
    struct TimerId;
}

struct Timer<T> {
    due: Duration,
    label: &'static str,
    task: T,
}

/// Scheduler for delayed and deferred widget tasks
pub struct TimerScheduler<T> {
    timers: SlotMap<TimerId, Timer<T>>,
    deferred: VecDeque<T>,
    now: Duration,
}

impl<T> TimerScheduler<T> {
    pub fn new() -> Self {
        Self {
            timers: SlotMap::with_key(),
            deferred: VecDeque::new(),
            now: Duration::ZERO,
        }
    }

    /// Arm a named debounce, replacing any pending timer with the same name
    pub fn debounce(&mut self, label: &'static str, delay: Duration, task: T) {
        if self.cancel_debounce(label) {
            tracing::trace!(label, "debounce re-armed");
        }
        self.timers.insert(Timer {
            due: self.now + delay,
            label,
            task,
        });
    }

    /// Cancel a pending debounce. Returns true if one was pending.
    pub fn cancel_debounce(&mut self, label: &str) -> bool {
        let pending: SmallVec<[TimerId; 2]> = self
            .timers
            .iter()
            .filter(|(_, t)| t.label == label)
            .map(|(id, _)| id)
            .collect();
        for id in &pending {
            self.timers.remove(*id);
        }
        !pending.is_empty()
    }

    /// Queue `task` for the next tick
    pub fn defer(&mut self, task: T) {
        self.deferred.push_back(task);
    }

    /// Take every deferred task without moving the clock
    pub fn flush(&mut self) -> Vec<T> {
        self.deferred.drain(..).collect()
    }

    /// Move the clock forward by `dt` and collect the work that is now due.
    ///
    /// Deferred tasks come first, in queue order, followed by expired timers
    /// ordered by due time.
    pub fn advance(&mut self, dt: Duration) -> Vec<T> {
        self.now += dt;
        let mut ready: Vec<T> = self.deferred.drain(..).collect();

        let mut due: Vec<(Duration, TimerId)> = self
            .timers
            .iter()
            .filter(|(_, t)| t.due <= self.now)
            .map(|(id, t)| (t.due, id))
            .collect();
        due.sort_by_key(|(at, _)| *at);

        for (_, id) in due {
            if let Some(timer) = self.timers.remove(id) {
                ready.push(timer.task);
            }
        }
        ready
    }

    /// Check if any timer or deferred task is outstanding
    pub fn has_pending(&self) -> bool {
        !self.timers.is_empty() || !self.deferred.is_empty()
    }
}

impl<T> Default for TimerScheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}
