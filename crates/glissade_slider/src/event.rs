//! Slider input events and output notifications

use glissade_core::{KeyCode, PointerKind, TrackPhase};
use serde::{Deserialize, Serialize};

use crate::config::SliderConfig;
use crate::state::BarGeometry;

/// One step of a track gesture on the knob or the bar
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Track {
    pub phase: TrackPhase,
    /// Horizontal distance from the gesture start, in px
    pub dx: f64,
    pub bar: BarGeometry,
}

impl Track {
    pub fn start(bar: BarGeometry) -> Self {
        Self {
            phase: TrackPhase::Start,
            dx: 0.0,
            bar,
        }
    }

    pub fn moved(dx: f64, bar: BarGeometry) -> Self {
        Self {
            phase: TrackPhase::Move,
            dx,
            bar,
        }
    }

    pub fn end(bar: BarGeometry) -> Self {
        Self {
            phase: TrackPhase::End,
            dx: 0.0,
            bar,
        }
    }
}

/// Where a key press was received
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeyOrigin {
    /// The slider itself has focus
    #[default]
    Slider,
    /// The editable number field has focus; the slider leaves the key alone
    TextField,
}

/// Everything that can change a slider
#[derive(Clone, Debug, PartialEq)]
pub enum SliderEvent {
    /// Replace the host configuration and re-derive
    Configure(SliderConfig),
    /// Programmatic value assignment
    SetValue(f64),
    SetSecondaryProgress(f64),
    Increment,
    Decrement,

    KnobDown,
    KnobUp,
    KnobTrack(Track),
    BarDown {
        x: f64,
        bar: BarGeometry,
        pointer: PointerKind,
    },
    BarUp,
    BarTrack {
        track: Track,
        pointer: PointerKind,
    },
    /// Tap on the bar without the press/expand handling
    BarClick {
        x: f64,
        bar: BarGeometry,
    },

    /// The knob's position animation finished
    TransitionEnd,
    /// The expand debounce fired
    ExpandElapsed,

    Key {
        key: KeyCode,
        origin: KeyOrigin,
    },
    /// Committed text from the editable number field
    TextChange(String),
}

/// Notification kinds, used to register listeners
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    ValueChange,
    ImmediateValueChange,
    Change,
}

/// What a slider tells its listeners
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notification {
    /// The committed value changed, for any reason
    ValueChange { value: f64 },
    /// The knob moved during a drag
    ImmediateValueChange { value: f64 },
    /// The user committed a value (drag end, click, key, text)
    Change { value: f64 },
}

impl Notification {
    pub fn kind(&self) -> NotificationKind {
        match self {
            Notification::ValueChange { .. } => NotificationKind::ValueChange,
            Notification::ImmediateValueChange { .. } => NotificationKind::ImmediateValueChange,
            Notification::Change { .. } => NotificationKind::Change,
        }
    }

    pub fn value(&self) -> f64 {
        match self {
            Notification::ValueChange { value }
            | Notification::ImmediateValueChange { value }
            | Notification::Change { value } => *value,
        }
    }
}
