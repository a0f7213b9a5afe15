//! Slider state
//!
//! Everything the reducer reads and writes lives here. Derived fields
//! (`ratio`, `markers`) are kept in sync by the reducer, never by the host.

use std::sync::OnceLock;

use glissade_core::fsm::TransitionTable;

use crate::config::{Direction, SliderConfig};
use crate::markers::marker_count;
use crate::range::Range;

/// What the pointer is doing with the knob
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InteractionState {
    #[default]
    Idle,
    Dragging,
    /// The knob is animating to a position picked by a bar click
    Transiting,
}

/// Inputs to the interaction state table
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionEvent {
    TrackStart,
    TrackEnd,
    /// Discrete jump to a new position (bar click)
    Jump,
    /// Knob animation finished, or nothing needed animating
    Settle,
}

/// The interaction state table shared by every slider
pub fn interaction_table() -> &'static TransitionTable<InteractionState, InteractionEvent> {
    static TABLE: OnceLock<TransitionTable<InteractionState, InteractionEvent>> = OnceLock::new();
    TABLE.get_or_init(|| {
        use InteractionEvent::*;
        use InteractionState::*;
        TransitionTable::builder()
            .on_any(&[Idle, Transiting], TrackStart, Dragging)
            .on(Dragging, TrackEnd, Idle)
            .on_any(&[Idle, Transiting], Jump, Transiting)
            .on(Transiting, Settle, Idle)
            .build()
    })
}

/// Position and size of the track, in host pixels
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BarGeometry {
    pub left: f64,
    pub width: f64,
}

impl BarGeometry {
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    pub fn with_width(width: f64) -> Self {
        Self { left: 0.0, width }
    }

    /// A bar that pointer math can divide by
    pub fn is_usable(&self) -> bool {
        self.width.is_finite() && self.width > 0.0 && self.left.is_finite()
    }
}

/// Reference captured when a drag starts
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragOrigin {
    /// Bar width in px
    pub width: f64,
    /// Knob x in px at drag start
    pub start_x: f64,
    /// Knob x the view is translating from
    pub knob_start_x: f64,
    pub min_dx: f64,
    pub max_dx: f64,
    /// Current (unsnapped) knob x
    pub x: f64,
}

impl DragOrigin {
    pub fn new(width: f64, ratio_percent: f64) -> Self {
        let start_x = ratio_percent * width / 100.0;
        Self {
            width,
            start_x,
            knob_start_x: start_x,
            min_dx: -start_x,
            max_dx: width - start_x,
            x: start_x,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SliderState {
    pub range: Range,
    /// Committed value
    pub value: f64,
    /// Value under the knob; differs from `value` only while dragging
    pub immediate_value: f64,
    /// Percentage position of `immediate_value`
    pub ratio: f64,
    pub secondary_progress: f64,

    pub snaps: bool,
    pub pin: bool,
    pub editable: bool,
    pub disabled: bool,
    pub ignore_bar_touch: bool,
    pub max_markers: u32,
    pub direction: Direction,

    pub markers: usize,
    pub expand: bool,
    pub interaction: InteractionState,
    pub drag: Option<DragOrigin>,
    /// Last bar geometry reported by the host
    pub bar: Option<BarGeometry>,
}

impl SliderState {
    pub fn new(config: &SliderConfig) -> Self {
        let range = config.range();
        let value = range
            .clamp(config.value)
            .or_else(|| range.clamp(range.min))
            .unwrap_or(0.0);
        let secondary_progress = range.clamp(config.secondary_progress).unwrap_or(value);

        Self {
            range,
            value,
            immediate_value: value,
            ratio: range.ratio_percent(value),
            secondary_progress,
            snaps: config.snaps,
            pin: config.pin,
            editable: config.editable,
            disabled: config.disabled,
            ignore_bar_touch: config.ignore_bar_touch,
            max_markers: config.max_markers,
            direction: config.direction,
            markers: marker_count(&range, config.snaps, config.max_markers),
            expand: false,
            interaction: InteractionState::Idle,
            drag: None,
            bar: None,
        }
    }

    pub fn dragging(&self) -> bool {
        self.interaction == InteractionState::Dragging
    }

    pub fn transiting(&self) -> bool {
        self.interaction == InteractionState::Transiting
    }

    /// Knob sits at (or below) the start of the track
    pub fn ring(&self) -> bool {
        self.immediate_value <= self.range.min
    }

    /// Snapshot of the configurable fields
    pub fn config(&self) -> SliderConfig {
        SliderConfig {
            min: self.range.min,
            max: self.range.max,
            step: self.range.step,
            value: self.value,
            snaps: self.snaps,
            pin: self.pin,
            editable: self.editable,
            disabled: self.disabled,
            secondary_progress: self.secondary_progress,
            ignore_bar_touch: self.ignore_bar_touch,
            max_markers: self.max_markers,
            direction: self.direction,
        }
    }

    pub(crate) fn apply_interaction(&mut self, event: InteractionEvent) -> bool {
        let from = self.interaction;
        match interaction_table().next(from, event) {
            Some(to) => {
                if to != from {
                    tracing::debug!(?from, ?event, ?to, "slider interaction");
                }
                self.interaction = to;
                true
            }
            None => false,
        }
    }
}

impl Default for SliderState {
    fn default() -> Self {
        Self::new(&SliderConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = SliderState::default();
        assert_eq!(state.value, 0.0);
        assert_eq!(state.immediate_value, 0.0);
        assert_eq!(state.ratio, 0.0);
        assert_eq!(state.markers, 0);
        assert!(state.ring());
        assert_eq!(state.interaction, InteractionState::Idle);
    }

    #[test]
    fn test_initial_value_is_clamped() {
        let state = SliderState::new(&SliderConfig {
            value: 250.0,
            secondary_progress: -4.0,
            ..Default::default()
        });
        assert_eq!(state.value, 100.0);
        assert_eq!(state.ratio, 100.0);
        assert_eq!(state.secondary_progress, 0.0);
    }

    #[test]
    fn test_nan_initial_value_starts_at_min() {
        let state = SliderState::new(&SliderConfig {
            min: 5.0,
            value: f64::NAN,
            ..Default::default()
        });
        assert_eq!(state.value, 5.0);
    }

    #[test]
    fn test_interaction_table() {
        use InteractionEvent::*;
        use InteractionState::*;
        let table = interaction_table();

        assert_eq!(table.next(Idle, TrackStart), Some(Dragging));
        assert_eq!(table.next(Transiting, TrackStart), Some(Dragging));
        assert_eq!(table.next(Dragging, TrackEnd), Some(Idle));
        assert_eq!(table.next(Idle, Jump), Some(Transiting));
        assert_eq!(table.next(Transiting, Settle), Some(Idle));
        assert_eq!(table.next(Dragging, Jump), None);
        assert_eq!(table.next(Idle, TrackEnd), None);
    }

    #[test]
    fn test_drag_origin_bounds() {
        let origin = DragOrigin::new(200.0, 25.0);
        assert_eq!(origin.start_x, 50.0);
        assert_eq!(origin.min_dx, -50.0);
        assert_eq!(origin.max_dx, 150.0);
    }

    #[test]
    fn test_config_snapshot_roundtrip() {
        let config = SliderConfig {
            min: -1.0,
            max: 1.0,
            step: 0.25,
            value: 0.5,
            pin: true,
            direction: Direction::Rtl,
            ..Default::default()
        };
        assert_eq!(SliderState::new(&config).config(), config);
    }
}
