//! Slider host
//!
//! `Slider` owns a [`SliderState`] and carries out the effects the reducer
//! asks for: it arms the expand debounce, defers `Change` notifications to
//! the next tick, runs the knob animation, and dispatches notifications to
//! registered listeners.
//!
//! # Example
//!
//! ```rust
//! use glissade_slider::prelude::*;
//! use std::time::Duration;
//!
//! let mut slider = Slider::new(SliderConfig::default());
//! let bar = BarGeometry::with_width(200.0);
//!
//! slider.begin_drag(bar);
//! slider.update_drag(50.0);
//! assert_eq!(slider.value(), 0.0);
//! assert_eq!(slider.immediate_value(), 25.0);
//!
//! slider.end_drag();
//! assert_eq!(slider.value(), 25.0);
//!
//! slider.click_at(150.0, bar);
//! slider.advance(Duration::from_millis(100));
//! assert_eq!(slider.value(), 75.0);
//! ```

use std::time::Duration;

use glissade_animation::{TimerScheduler, Tween};
use glissade_core::{Dispatcher, KeyCode, PointerKind};

use crate::config::SliderConfig;
use crate::event::{KeyOrigin, Notification, NotificationKind, SliderEvent, Track};
use crate::reducer::{reduce, Effect};
use crate::state::{BarGeometry, SliderState};
use crate::view::SliderView;

/// Delay before a bar press expands the knob
pub const EXPAND_DEBOUNCE: Duration = Duration::from_millis(60);
/// Duration of the knob's move after a bar click
pub const KNOB_TRANSITION: Duration = Duration::from_millis(80);

const EXPAND_LABEL: &str = "expand-knob";

/// Timed work queued by the host
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SliderTask {
    ExpandKnob,
    FireChange,
}

/// Result of dispatching one event
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Outcome {
    /// Notifications delivered synchronously, in order
    pub notifications: Vec<Notification>,
    /// The slider consumed the event
    pub handled: bool,
}

pub struct Slider {
    state: SliderState,
    scheduler: TimerScheduler<SliderTask>,
    knob_tween: Option<Tween>,
    listeners: Dispatcher<NotificationKind, Notification>,
}

impl Slider {
    pub fn new(config: SliderConfig) -> Self {
        for warning in config.diagnose() {
            tracing::warn!("slider config: {}", warning);
        }
        Self {
            state: SliderState::new(&config),
            scheduler: TimerScheduler::new(),
            knob_tween: None,
            listeners: Dispatcher::new(),
        }
    }

    pub fn state(&self) -> &SliderState {
        &self.state
    }

    pub fn view(&self) -> SliderView {
        SliderView::project(&self.state, self.knob_position())
    }

    /// Animated knob position in percent, while a bar-click transition runs
    pub fn knob_position(&self) -> Option<f64> {
        self.knob_tween.as_ref().map(|tween| tween.value() as f64)
    }

    pub fn value(&self) -> f64 {
        self.state.value
    }

    pub fn immediate_value(&self) -> f64 {
        self.state.immediate_value
    }

    pub fn ratio(&self) -> f64 {
        self.state.ratio
    }

    pub fn dragging(&self) -> bool {
        self.state.dragging()
    }

    pub fn transiting(&self) -> bool {
        self.state.transiting()
    }

    pub fn expand(&self) -> bool {
        self.state.expand
    }

    pub fn markers(&self) -> usize {
        self.state.markers
    }

    /// Register a listener for one notification kind
    pub fn on<F>(&mut self, kind: NotificationKind, handler: F)
    where
        F: Fn(&Notification) + 'static,
    {
        self.listeners.register(kind, handler);
    }

    /// Register a listener for every notification
    pub fn on_any<F>(&mut self, handler: F)
    where
        F: Fn(&Notification) + 'static,
    {
        self.listeners.register_all(handler);
    }

    /// Run an event through the reducer and carry out its effects
    pub fn dispatch(&mut self, event: SliderEvent) -> Outcome {
        let reduction = reduce(&self.state, &event);
        self.state = reduction.state;

        let mut outcome = Outcome {
            notifications: Vec::new(),
            handled: reduction.handled,
        };
        for effect in reduction.effects {
            self.apply_effect(effect, &mut outcome.notifications);
        }
        outcome
    }

    fn apply_effect(&mut self, effect: Effect, delivered: &mut Vec<Notification>) {
        match effect {
            Effect::Notify(notification) => self.notify(notification, delivered),
            Effect::DebounceExpand => {
                self.scheduler
                    .debounce(EXPAND_LABEL, EXPAND_DEBOUNCE, SliderTask::ExpandKnob);
            }
            Effect::CancelExpand => {
                self.scheduler.cancel_debounce(EXPAND_LABEL);
            }
            Effect::DeferChange => self.scheduler.defer(SliderTask::FireChange),
            Effect::AnimateKnob { from, to } => match self.knob_tween.as_mut() {
                Some(tween) => tween.retarget(to as f32),
                None => {
                    self.knob_tween = Some(Tween::new(from as f32, to as f32, KNOB_TRANSITION))
                }
            },
            Effect::StopKnobAnimation => self.knob_tween = None,
        }
    }

    fn notify(&self, notification: Notification, delivered: &mut Vec<Notification>) {
        tracing::debug!(?notification, "slider notification");
        self.listeners.dispatch(&notification.kind(), &notification);
        delivered.push(notification);
    }

    /// Move the clock forward: run deferred work, fire due timers, and step
    /// the knob animation. Returns the notifications delivered.
    pub fn advance(&mut self, dt: Duration) -> Vec<Notification> {
        let mut delivered = Vec::new();
        for task in self.scheduler.advance(dt) {
            self.run_task(task, &mut delivered);
        }

        let finished = self
            .knob_tween
            .as_mut()
            .is_some_and(|tween| tween.step(dt));
        if finished {
            self.knob_tween = None;
            let outcome = self.dispatch(SliderEvent::TransitionEnd);
            delivered.extend(outcome.notifications);
        }
        delivered
    }

    /// Run deferred work without moving the clock
    pub fn flush(&mut self) -> Vec<Notification> {
        let mut delivered = Vec::new();
        for task in self.scheduler.flush() {
            self.run_task(task, &mut delivered);
        }
        delivered
    }

    /// Check if timers, deferred notifications, or the knob animation are outstanding
    pub fn is_busy(&self) -> bool {
        self.scheduler.has_pending() || self.knob_tween.is_some()
    }

    fn run_task(&mut self, task: SliderTask, delivered: &mut Vec<Notification>) {
        match task {
            SliderTask::ExpandKnob => {
                let outcome = self.dispatch(SliderEvent::ExpandElapsed);
                delivered.extend(outcome.notifications);
            }
            SliderTask::FireChange => {
                let change = Notification::Change {
                    value: self.state.value,
                };
                self.notify(change, delivered);
            }
        }
    }

    // Operations

    pub fn configure(&mut self, config: SliderConfig) -> Outcome {
        for warning in config.diagnose() {
            tracing::warn!("slider config: {}", warning);
        }
        self.dispatch(SliderEvent::Configure(config))
    }

    pub fn set_value(&mut self, value: f64) -> Outcome {
        self.dispatch(SliderEvent::SetValue(value))
    }

    pub fn set_secondary_progress(&mut self, value: f64) -> Outcome {
        self.dispatch(SliderEvent::SetSecondaryProgress(value))
    }

    pub fn increment(&mut self) -> Outcome {
        self.dispatch(SliderEvent::Increment)
    }

    pub fn decrement(&mut self) -> Outcome {
        self.dispatch(SliderEvent::Decrement)
    }

    /// Start dragging the knob on a bar of the given geometry
    pub fn begin_drag(&mut self, bar: BarGeometry) -> Outcome {
        self.dispatch(SliderEvent::KnobTrack(Track::start(bar)))
    }

    /// Move the knob `dx` px from where the drag started
    pub fn update_drag(&mut self, dx: f64) -> Outcome {
        let bar = self.last_bar();
        self.dispatch(SliderEvent::KnobTrack(Track::moved(dx, bar)))
    }

    pub fn end_drag(&mut self) -> Outcome {
        let bar = self.last_bar();
        self.dispatch(SliderEvent::KnobTrack(Track::end(bar)))
    }

    /// Jump to the position under an absolute pointer x
    pub fn click_at(&mut self, x: f64, bar: BarGeometry) -> Outcome {
        self.dispatch(SliderEvent::BarClick { x, bar })
    }

    /// Press on the bar: debounced knob expand plus a jump
    pub fn press_bar(&mut self, x: f64, bar: BarGeometry, pointer: PointerKind) -> Outcome {
        self.dispatch(SliderEvent::BarDown { x, bar, pointer })
    }

    pub fn release_bar(&mut self) -> Outcome {
        self.dispatch(SliderEvent::BarUp)
    }

    pub fn press_knob(&mut self) -> Outcome {
        self.dispatch(SliderEvent::KnobDown)
    }

    pub fn release_knob(&mut self) -> Outcome {
        self.dispatch(SliderEvent::KnobUp)
    }

    pub fn key_down(&mut self, key: KeyCode) -> Outcome {
        self.dispatch(SliderEvent::Key {
            key,
            origin: KeyOrigin::Slider,
        })
    }

    /// Commit text typed into the number field
    pub fn set_from_text(&mut self, text: &str) -> Outcome {
        self.dispatch(SliderEvent::TextChange(text.to_string()))
    }

    fn last_bar(&self) -> BarGeometry {
        self.state.bar.unwrap_or_default()
    }
}

impl Default for Slider {
    fn default() -> Self {
        Self::new(SliderConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn bar() -> BarGeometry {
        BarGeometry::with_width(100.0)
    }

    #[test]
    fn test_listeners_receive_notifications() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut slider = Slider::default();

        let changes = seen.clone();
        slider.on(NotificationKind::ValueChange, move |n| {
            changes.borrow_mut().push(n.value())
        });

        slider.set_value(12.0);
        slider.set_value(12.2);
        slider.set_value(99.0);
        assert_eq!(*seen.borrow(), vec![12.0, 99.0]);
    }

    #[test]
    fn test_bar_click_change_is_deferred() {
        let mut slider = Slider::default();
        let outcome = slider.click_at(40.0, bar());

        assert_eq!(outcome.notifications, vec![Notification::ValueChange { value: 40.0 }]);
        assert!(slider.transiting());

        let later = slider.flush();
        assert_eq!(later, vec![Notification::Change { value: 40.0 }]);
        assert!(slider.flush().is_empty());
    }

    #[test]
    fn test_knob_animation_ends_transit() {
        let mut slider = Slider::default();
        slider.click_at(80.0, bar());
        assert!(slider.knob_position().is_some());

        slider.advance(ms(40));
        let mid = slider.view().knob_left;
        assert!(mid > 0.0 && mid < 80.0, "knob_left = {mid}");
        assert!(slider.transiting());

        slider.advance(ms(40));
        assert!(!slider.transiting());
        assert!(slider.knob_position().is_none());
        assert_eq!(slider.view().knob_left, 80.0);
        assert!(!slider.is_busy());
    }

    #[test]
    fn test_expand_after_debounce() {
        let mut slider = Slider::default();
        slider.press_bar(50.0, bar(), PointerKind::Mouse);
        assert!(!slider.expand());

        slider.advance(ms(59));
        assert!(!slider.expand());
        slider.advance(ms(1));
        assert!(slider.expand());

        slider.release_bar();
        assert!(!slider.expand());
    }

    #[test]
    fn test_quick_tap_never_expands() {
        let mut slider = Slider::default();
        slider.press_bar(50.0, bar(), PointerKind::Mouse);
        slider.advance(ms(30));
        slider.release_bar();
        slider.advance(ms(100));
        assert!(!slider.expand());
    }

    #[test]
    fn test_drag_lifecycle_notifications() {
        let mut slider = Slider::default();
        slider.press_knob();
        assert!(slider.expand());

        slider.begin_drag(bar());
        let moved = slider.update_drag(30.0);
        assert_eq!(
            moved.notifications,
            vec![Notification::ImmediateValueChange { value: 30.0 }]
        );
        assert_eq!(slider.value(), 0.0);

        let ended = slider.end_drag();
        assert_eq!(
            ended.notifications,
            vec![
                Notification::ValueChange { value: 30.0 },
                Notification::Change { value: 30.0 },
            ]
        );
        assert!(!slider.expand());
    }

    #[test]
    fn test_drag_interrupts_knob_animation() {
        let mut slider = Slider::default();
        slider.click_at(60.0, bar());
        assert!(slider.knob_position().is_some());

        slider.begin_drag(bar());
        assert!(slider.dragging());
        assert!(slider.knob_position().is_none());
    }

    #[test]
    fn test_update_drag_without_geometry_is_ignored() {
        let mut slider = Slider::default();
        let outcome = slider.update_drag(25.0);
        assert!(!outcome.handled);
        assert!(!slider.dragging());
    }

    #[test]
    fn test_key_down_is_synchronous() {
        let mut slider = Slider::default();
        let outcome = slider.key_down(KeyCode::END);
        assert!(outcome.handled);
        assert_eq!(
            outcome.notifications,
            vec![
                Notification::ValueChange { value: 100.0 },
                Notification::Change { value: 100.0 },
            ]
        );
        assert!(!slider.is_busy());
    }
}
