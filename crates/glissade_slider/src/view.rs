//! View projection
//!
//! A pure function from slider state to the values a renderer draws. Hosts
//! pass the in-flight knob animation position, if any; everything else is
//! read from state.

use smallvec::SmallVec;

use crate::state::SliderState;

/// Knob scale while pressed (without a pin)
pub const KNOB_EXPANDED_SCALE: f32 = 1.5;
/// Knob scale while disabled
pub const KNOB_DISABLED_SCALE: f32 = 0.75;

/// Values a host exposes to assistive technology
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AriaValues {
    pub min: f64,
    pub max: f64,
    pub now: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SliderView {
    /// Container classes, in a stable order
    pub classes: SmallVec<[&'static str; 8]>,
    /// Primary progress fill, percent
    pub progress: f64,
    /// Secondary progress fill, percent
    pub secondary_progress: f64,
    /// Knob left edge, percent of the bar
    pub knob_left: f64,
    /// Extra knob offset while dragging, px
    pub knob_translate_x: f64,
    pub knob_scale: f32,
    /// Pin text, present while the pin is showing
    pub pin_label: Option<String>,
    pub markers: usize,
    /// Contents of the number field, when editable
    pub input_value: Option<String>,
    pub aria: AriaValues,
}

impl SliderView {
    pub fn project(state: &SliderState, knob_animation: Option<f64>) -> Self {
        let range = &state.range;
        let immediate_ratio = range.ratio(state.immediate_value);

        let flags = [
            ("disabled", state.disabled),
            ("pin", state.pin),
            ("snaps", state.snaps),
            ("ring", state.ring()),
            ("expand", state.expand),
            ("dragging", state.dragging()),
            ("transiting", state.transiting()),
            ("editable", state.editable),
        ];
        let classes = flags
            .iter()
            .filter(|(_, on)| *on)
            .map(|(name, _)| *name)
            .collect();

        // During a drag the knob keeps its start position and is translated
        let knob_translate_x = match state.drag {
            Some(drag) if state.dragging() => immediate_ratio * drag.width - drag.knob_start_x,
            _ => 0.0,
        };
        let knob_left = match state.drag {
            Some(drag) if state.dragging() => drag.knob_start_x / drag.width * 100.0,
            _ => knob_animation.unwrap_or(state.ratio),
        };

        let knob_scale = if state.disabled {
            KNOB_DISABLED_SCALE
        } else if state.expand && !state.pin {
            KNOB_EXPANDED_SCALE
        } else {
            1.0
        };

        Self {
            classes,
            progress: immediate_ratio * 100.0,
            secondary_progress: range.ratio_percent(state.secondary_progress),
            knob_left,
            knob_translate_x,
            knob_scale,
            pin_label: (state.pin && state.expand).then(|| format_value(state.immediate_value)),
            markers: if state.snaps { state.markers } else { 0 },
            input_value: state.editable.then(|| format_value(state.immediate_value)),
            aria: AriaValues {
                min: range.min,
                max: range.max,
                now: state.value,
            },
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| *c == class)
    }

    /// Space-separated class attribute
    pub fn class_name(&self) -> String {
        self.classes.join(" ")
    }
}

/// Shortest display form of a value: `50`, `0.3`, `-2.5`
pub fn format_value(value: f64) -> String {
    if value == 0.0 {
        // avoid "-0"
        return "0".to_string();
    }
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SliderConfig;
    use crate::event::{SliderEvent, Track};
    use crate::reducer::reduce;
    use crate::state::BarGeometry;

    fn state(config: SliderConfig) -> SliderState {
        SliderState::new(&config)
    }

    #[test]
    fn test_idle_at_min_shows_ring() {
        let view = SliderView::project(&SliderState::default(), None);
        assert_eq!(view.class_name(), "ring");
        assert_eq!(view.knob_left, 0.0);
        assert_eq!(view.knob_scale, 1.0);
        assert_eq!(view.pin_label, None);
        assert_eq!(view.input_value, None);
    }

    #[test]
    fn test_class_order() {
        let mut s = state(SliderConfig {
            value: 40.0,
            pin: true,
            snaps: true,
            editable: true,
            ..Default::default()
        });
        s.expand = true;
        let view = SliderView::project(&s, None);
        assert_eq!(view.class_name(), "pin snaps expand editable");
        assert_eq!(view.pin_label.as_deref(), Some("40"));
        assert_eq!(view.input_value.as_deref(), Some("40"));
        // a pin replaces the enlarged knob
        assert_eq!(view.knob_scale, 1.0);
    }

    #[test]
    fn test_expanded_and_disabled_scale() {
        let mut s = state(SliderConfig {
            value: 10.0,
            ..Default::default()
        });
        s.expand = true;
        assert_eq!(SliderView::project(&s, None).knob_scale, KNOB_EXPANDED_SCALE);
        s.disabled = true;
        assert_eq!(SliderView::project(&s, None).knob_scale, KNOB_DISABLED_SCALE);
    }

    #[test]
    fn test_drag_translates_knob() {
        let bar = BarGeometry::with_width(200.0);
        let s = state(SliderConfig {
            value: 50.0,
            ..Default::default()
        });
        let r = reduce(&s, &SliderEvent::KnobTrack(Track::start(bar)));
        let r = reduce(&r.state, &SliderEvent::KnobTrack(Track::moved(40.0, bar)));

        let view = SliderView::project(&r.state, None);
        assert!(view.has_class("dragging"));
        assert_eq!(view.knob_left, 50.0);
        // knob moves to 70 (140px) from its 100px start
        assert_eq!(view.knob_translate_x, 40.0);
        assert_eq!(view.progress, 70.0);
        assert_eq!(view.aria.now, 50.0);
    }

    #[test]
    fn test_knob_follows_animation_when_given() {
        let s = state(SliderConfig {
            value: 80.0,
            ..Default::default()
        });
        assert_eq!(SliderView::project(&s, Some(35.5)).knob_left, 35.5);
        assert_eq!(SliderView::project(&s, None).knob_left, 80.0);
    }

    #[test]
    fn test_markers_hidden_without_snaps() {
        let mut s = state(SliderConfig {
            snaps: true,
            max_markers: 10,
            ..Default::default()
        });
        assert_eq!(SliderView::project(&s, None).markers, 10);
        s.snaps = false;
        assert_eq!(SliderView::project(&s, None).markers, 0);
    }

    #[test]
    fn test_secondary_progress_percent() {
        let s = state(SliderConfig {
            min: 100.0,
            max: 200.0,
            secondary_progress: 175.0,
            ..Default::default()
        });
        assert_eq!(SliderView::project(&s, None).secondary_progress, 75.0);
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(50.0), "50");
        assert_eq!(format_value(0.3), "0.3");
        assert_eq!(format_value(-2.5), "-2.5");
        assert_eq!(format_value(-0.0), "0");
    }
}
