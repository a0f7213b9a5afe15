//! Scenario definition for headless slider replays.

use anyhow::{Context, Result};
use glissade_core::PointerKind;
use glissade_slider::{BarGeometry, NotificationKind, SliderConfig};
use serde::Deserialize;
use std::path::Path;

/// Scripted interaction against one slider.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    /// Overrides the config given on the command line
    #[serde(default)]
    pub config: Option<SliderConfig>,
    /// Track geometry used by pointer steps
    #[serde(default)]
    pub bar: BarSpec,
    pub steps: Vec<ScenarioStep>,
}

impl Scenario {
    /// Load a scenario from JSON text.
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Load a scenario from file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read scenario {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("invalid scenario {}", path.display()))
    }
}

/// Track position and width in px.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct BarSpec {
    pub left: f64,
    pub width: f64,
}

impl Default for BarSpec {
    fn default() -> Self {
        Self {
            left: 0.0,
            width: 200.0,
        }
    }
}

impl From<BarSpec> for BarGeometry {
    fn from(spec: BarSpec) -> Self {
        BarGeometry::new(spec.left, spec.width)
    }
}

/// One scripted action or check.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScenarioStep {
    Configure {
        config: SliderConfig,
    },
    SetValue {
        value: f64,
    },
    SetSecondaryProgress {
        value: f64,
    },
    Increment,
    Decrement,
    /// Key press by binding name (`left`, `pageup`, `home`, ...)
    Key {
        key: String,
    },
    Text {
        value: String,
    },
    KnobDown,
    KnobUp,
    DragStart,
    DragMove {
        dx: f64,
    },
    DragEnd,
    /// Start, move by `dx`, and end a knob drag in one step
    Drag {
        dx: f64,
    },
    BarDown {
        x: f64,
        #[serde(default)]
        pointer: PointerKind,
    },
    BarUp,
    Click {
        x: f64,
    },
    Wait {
        ms: u64,
    },
    Flush,

    AssertValue {
        expected: f64,
    },
    AssertImmediate {
        expected: f64,
    },
    AssertState {
        #[serde(default)]
        dragging: Option<bool>,
        #[serde(default)]
        transiting: Option<bool>,
        #[serde(default)]
        expand: Option<bool>,
    },
    AssertClass {
        class: String,
        #[serde(default = "default_present")]
        present: bool,
    },
    AssertMarkers {
        expected: usize,
    },
    /// Checks the most recent notification delivered
    AssertNotified {
        kind: NotificationKind,
        #[serde(default)]
        value: Option<f64>,
    },
}

fn default_present() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tagged_steps() {
        let scenario = Scenario::from_json(
            r#"{
                "bar": { "width": 100 },
                "steps": [
                    { "type": "bar_down", "x": 40, "pointer": "touch" },
                    { "type": "wait", "ms": 100 },
                    { "type": "key", "key": "home" },
                    { "type": "assert_state", "expand": true },
                    { "type": "assert_notified", "kind": "change", "value": 0 }
                ]
            }"#,
        )
        .unwrap();

        assert!(scenario.config.is_none());
        assert_eq!(scenario.bar.width, 100.0);
        assert_eq!(scenario.bar.left, 0.0);
        assert_eq!(scenario.steps.len(), 5);
        assert!(matches!(
            scenario.steps[0],
            ScenarioStep::BarDown {
                pointer: PointerKind::Touch,
                ..
            }
        ));
        assert!(matches!(scenario.steps[1], ScenarioStep::Wait { ms: 100 }));
        assert!(matches!(
            scenario.steps[3],
            ScenarioStep::AssertState {
                expand: Some(true),
                dragging: None,
                ..
            }
        ));
    }

    #[test]
    fn embedded_config_uses_defaults() {
        let scenario =
            Scenario::from_json(r#"{ "config": { "max": 10, "snaps": true }, "steps": [] }"#)
                .unwrap();
        let config = scenario.config.unwrap();
        assert_eq!(config.max, 10.0);
        assert_eq!(config.step, 1.0);
        assert!(config.snaps);
    }

    #[test]
    fn rejects_unknown_step() {
        assert!(Scenario::from_json(r#"{ "steps": [{ "type": "teleport" }] }"#).is_err());
    }
}
