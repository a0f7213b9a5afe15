//! Slider reducer
//!
//! `reduce(state, event)` is a pure function: it returns the next state plus
//! the effects a host must carry out (notifications to deliver, timers to
//! arm, the knob animation to start). It never fails; malformed numbers are
//! clamped or ignored.

use glissade_core::{PointerKind, TrackPhase};
use smallvec::SmallVec;

use crate::config::SliderConfig;
use crate::event::{KeyOrigin, Notification, SliderEvent, Track};
use crate::keyboard::{key_action, KeyAction};
use crate::markers::marker_count;
use crate::state::{BarGeometry, DragOrigin, InteractionEvent, SliderState};

/// Work the host performs after a reduction
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Effect {
    Notify(Notification),
    /// (Re)arm the knob-expand debounce
    DebounceExpand,
    CancelExpand,
    /// Deliver a `Change` for the then-current value on the next tick
    DeferChange,
    /// Animate the knob between two percentage positions
    AnimateKnob { from: f64, to: f64 },
    StopKnobAnimation,
}

pub type Effects = SmallVec<[Effect; 4]>;

#[derive(Clone, Debug)]
pub struct Reduction {
    pub state: SliderState,
    pub effects: Effects,
    /// The event was consumed (hosts should suppress its default action)
    pub handled: bool,
}

impl Reduction {
    pub fn notifications(&self) -> impl Iterator<Item = &Notification> {
        self.effects.iter().filter_map(|effect| match effect {
            Effect::Notify(n) => Some(n),
            _ => None,
        })
    }
}

pub fn reduce(state: &SliderState, event: &SliderEvent) -> Reduction {
    let mut next = state.clone();
    let mut fx = Effects::new();
    let handled = apply(&mut next, event, &mut fx);
    Reduction {
        state: next,
        effects: fx,
        handled,
    }
}

fn apply(state: &mut SliderState, event: &SliderEvent, fx: &mut Effects) -> bool {
    match event {
        SliderEvent::Configure(config) => {
            configure(state, config, fx);
            true
        }
        SliderEvent::SetValue(value) => {
            commit(state, *value, fx);
            true
        }
        SliderEvent::SetSecondaryProgress(value) => {
            if let Some(clamped) = state.range.clamp(*value) {
                state.secondary_progress = clamped;
            }
            true
        }
        SliderEvent::Increment => {
            let target = state.value + state.range.step;
            commit(state, target, fx);
            true
        }
        SliderEvent::Decrement => {
            let target = state.value - state.range.step;
            commit(state, target, fx);
            true
        }
        SliderEvent::KnobDown => {
            if state.disabled {
                return false;
            }
            state.expand = true;
            true
        }
        SliderEvent::KnobUp | SliderEvent::BarUp => {
            reset_knob(state, fx);
            true
        }
        SliderEvent::KnobTrack(track) => {
            if state.disabled {
                return false;
            }
            on_track(state, track, fx)
        }
        SliderEvent::BarTrack { track, pointer } => {
            if state.disabled || !allow_bar_event(state, *pointer) {
                return false;
            }
            on_track(state, track, fx)
        }
        SliderEvent::BarDown { x, bar, pointer } => {
            if state.disabled || state.dragging() || !allow_bar_event(state, *pointer) {
                return false;
            }
            fx.push(Effect::DebounceExpand);
            click_at(state, *x, *bar, fx)
        }
        SliderEvent::BarClick { x, bar } => {
            if state.disabled || state.dragging() {
                return false;
            }
            click_at(state, *x, *bar, fx)
        }
        SliderEvent::TransitionEnd => state.apply_interaction(InteractionEvent::Settle),
        SliderEvent::ExpandElapsed => {
            if state.disabled {
                return false;
            }
            state.expand = true;
            true
        }
        SliderEvent::Key { key, origin } => {
            if state.disabled || *origin == KeyOrigin::TextField {
                return false;
            }
            let Some(action) = key_action(*key, state.direction) else {
                return false;
            };
            let target = match action {
                KeyAction::Increment => state.value + state.range.step,
                KeyAction::Decrement => state.value - state.range.step,
                KeyAction::ToMin => state.range.min,
                KeyAction::ToMax => state.range.max,
            };
            commit(state, target, fx);
            fx.push(Effect::Notify(Notification::Change { value: state.value }));
            true
        }
        SliderEvent::TextChange(text) => {
            if state.disabled {
                return false;
            }
            match text.trim().parse::<f64>() {
                Ok(value) => commit(state, value, fx),
                Err(_) => tracing::debug!(text = %text, "ignoring non-numeric slider input"),
            }
            fx.push(Effect::Notify(Notification::Change { value: state.value }));
            true
        }
    }
}

/// Clamp, snap and store a committed value; mirror it into the immediate
/// value unless a drag owns that.
fn commit(state: &mut SliderState, value: f64, fx: &mut Effects) {
    let Some(value) = state.range.clamp(value) else {
        return;
    };
    if value != state.value {
        state.value = value;
        fx.push(Effect::Notify(Notification::ValueChange { value }));
    }
    if !state.dragging() {
        set_immediate(state, value, fx);
    }
}

fn set_immediate(state: &mut SliderState, value: f64, fx: &mut Effects) {
    if value != state.immediate_value {
        state.immediate_value = value;
        if state.dragging() {
            fx.push(Effect::Notify(Notification::ImmediateValueChange { value }));
        }
    }
    state.ratio = state.range.ratio_percent(value);
}

fn configure(state: &mut SliderState, config: &SliderConfig, fx: &mut Effects) {
    state.range = config.range();
    state.snaps = config.snaps;
    state.pin = config.pin;
    state.editable = config.editable;
    state.disabled = config.disabled;
    state.ignore_bar_touch = config.ignore_bar_touch;
    state.max_markers = config.max_markers;
    state.direction = config.direction;
    state.markers = marker_count(&state.range, state.snaps, state.max_markers);

    if let Some(secondary) = state.range.clamp(config.secondary_progress) {
        state.secondary_progress = secondary;
    } else if let Some(secondary) = state.range.clamp(state.secondary_progress) {
        state.secondary_progress = secondary;
    }

    // NaN keeps the previous value, re-clamped into the new range
    let value = if config.value.is_nan() {
        state.value
    } else {
        config.value
    };
    commit(state, value, fx);
    if state.dragging() {
        if let Some(immediate) = state.range.clamp(state.immediate_value) {
            set_immediate(state, immediate, fx);
        }
    }
}

fn allow_bar_event(state: &SliderState, pointer: PointerKind) -> bool {
    !state.ignore_bar_touch || pointer.is_mouse()
}

fn reset_knob(state: &mut SliderState, fx: &mut Effects) {
    fx.push(Effect::CancelExpand);
    state.expand = false;
}

fn on_track(state: &mut SliderState, track: &Track, fx: &mut Effects) -> bool {
    match track.phase {
        TrackPhase::Start => begin_drag(state, track.bar, fx),
        TrackPhase::Move => update_drag(state, track.dx, track.bar, fx),
        TrackPhase::End => end_drag(state, fx),
    }
}

fn begin_drag(state: &mut SliderState, bar: BarGeometry, fx: &mut Effects) -> bool {
    if !bar.is_usable() {
        tracing::debug!(?bar, "drag ignored: bar has no usable width");
        return false;
    }
    let was_transiting = state.transiting();
    if !state.apply_interaction(InteractionEvent::TrackStart) {
        return false;
    }
    if was_transiting {
        fx.push(Effect::StopKnobAnimation);
    }
    state.bar = Some(bar);
    state.drag = Some(DragOrigin::new(bar.width, state.ratio));
    true
}

fn update_drag(state: &mut SliderState, dx: f64, bar: BarGeometry, fx: &mut Effects) -> bool {
    if !dx.is_finite() {
        return false;
    }
    if !state.dragging() && !begin_drag(state, bar, fx) {
        return false;
    }
    let Some(mut drag) = state.drag else {
        return false;
    };

    let dx = (dx * state.direction.sign()).clamp(drag.min_dx, drag.max_dx);
    drag.x = drag.start_x + dx;
    state.drag = Some(drag);

    if let Some(immediate) = state.range.stepped_value_at(drag.x / drag.width * 100.0) {
        tracing::trace!(dx, immediate, "slider drag");
        set_immediate(state, immediate, fx);
    }
    true
}

fn end_drag(state: &mut SliderState, fx: &mut Effects) -> bool {
    if !state.apply_interaction(InteractionEvent::TrackEnd) {
        return false;
    }
    state.drag = None;
    reset_knob(state, fx);
    let immediate = state.immediate_value;
    commit(state, immediate, fx);
    fx.push(Effect::Notify(Notification::Change { value: state.value }));
    true
}

fn click_at(state: &mut SliderState, x: f64, bar: BarGeometry, fx: &mut Effects) -> bool {
    if !bar.is_usable() || !x.is_finite() {
        return false;
    }
    let mut ratio = (x - bar.left) / bar.width * 100.0;
    if state.direction.is_rtl() {
        ratio = 100.0 - ratio;
    }
    let ratio = ratio.clamp(0.0, 100.0);
    let Some(target) = state.range.stepped_value_at(ratio) else {
        return false;
    };

    let previous_ratio = state.ratio;
    state.bar = Some(bar);
    state.apply_interaction(InteractionEvent::Jump);
    commit(state, target, fx);

    if state.ratio == previous_ratio {
        // Nothing to animate, so no transition end will ever arrive
        state.apply_interaction(InteractionEvent::Settle);
    } else {
        fx.push(Effect::AnimateKnob {
            from: previous_ratio,
            to: state.ratio,
        });
    }
    fx.push(Effect::DeferChange);
    true
}
