//! Slider configuration (slider.toml)
//!
//! Every field has the widget default, so an empty file is a valid config:
//!
//! ```toml
//! min = 0.0
//! max = 10.0
//! step = 0.5
//! value = 5.0
//! snaps = true
//! max_markers = 20
//! direction = "rtl"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{ConfigError, Result};
use crate::range::Range;

/// Layout direction of the track
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    /// Multiplier applied to horizontal pointer deltas
    pub fn sign(&self) -> f64 {
        match self {
            Direction::Ltr => 1.0,
            Direction::Rtl => -1.0,
        }
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, Direction::Rtl)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub value: f64,
    /// Snap the knob to tick marks spaced by `step`
    pub snaps: bool,
    /// Show the value label above the knob while pressed
    pub pin: bool,
    /// Show a numeric text field next to the track
    pub editable: bool,
    pub disabled: bool,
    pub secondary_progress: f64,
    /// Bar drags from non-mouse pointers scroll the page instead of moving the knob
    pub ignore_bar_touch: bool,
    pub max_markers: u32,
    pub direction: Direction,
}

impl Default for SliderConfig {
    fn default() -> Self {
        let range = Range::default();
        Self {
            min: range.min,
            max: range.max,
            step: range.step,
            value: 0.0,
            snaps: false,
            pin: false,
            editable: false,
            disabled: false,
            secondary_progress: 0.0,
            ignore_bar_touch: false,
            max_markers: 0,
            direction: Direction::Ltr,
        }
    }
}

impl SliderConfig {
    pub fn range(&self) -> Range {
        Range::new(self.min, self.max, self.step)
    }

    /// Parse a config from TOML text
    pub fn from_toml_str(input: &str) -> Result<Self> {
        Ok(toml::from_str(input)?)
    }

    /// Load a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Describe configuration the slider will tolerate but probably should not get.
    ///
    /// The slider still runs with any of these; callers decide whether to log.
    pub fn diagnose(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if !self.min.is_finite() || !self.max.is_finite() {
            warnings.push(format!(
                "range bounds must be finite (min = {}, max = {})",
                self.min, self.max
            ));
        } else if self.min > self.max {
            warnings.push(format!(
                "min ({}) is greater than max ({}); every value collapses to max",
                self.min, self.max
            ));
        }
        if !self.range().has_step() {
            warnings.push(format!(
                "step ({}) is not a positive number; values will not snap",
                self.step
            ));
        }
        if self.value.is_nan() {
            warnings.push("value is NaN; the slider starts at min".to_string());
        } else if self.value < self.min || self.value > self.max {
            warnings.push(format!(
                "value ({}) lies outside [{}, {}] and will be clamped",
                self.value, self.min, self.max
            ));
        }
        if self.snaps && self.max_markers == 0 {
            warnings.push("snaps is set but max_markers is 0; no markers will render".to_string());
        }
        warnings
    }
}
