//! Config inspection: what a slider built from a config starts out as.

use glissade_slider::{Slider, SliderConfig};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Inspection {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    /// Value after clamping and snapping
    pub value: f64,
    pub ratio: f64,
    pub secondary_progress: f64,
    pub markers: usize,
    pub classes: String,
    pub knob_scale: f32,
    pub warnings: Vec<String>,
}

impl Inspection {
    pub fn of(config: &SliderConfig) -> Self {
        let warnings = config.diagnose();
        let slider = Slider::new(config.clone());
        let view = slider.view();
        let state = slider.state();
        Self {
            min: state.range.min,
            max: state.range.max,
            step: state.range.step,
            value: state.value,
            ratio: state.ratio,
            secondary_progress: state.secondary_progress,
            markers: view.markers,
            classes: view.class_name(),
            knob_scale: view.knob_scale,
            warnings,
        }
    }

    /// Human-readable summary, one field per line
    pub fn render(&self) -> String {
        let mut out = format!(
            "range:     [{}, {}] step {}\nvalue:     {} ({}%)\nsecondary: {}\nmarkers:   {}\nclasses:   {}\nknob:      x{}\n",
            self.min,
            self.max,
            self.step,
            self.value,
            self.ratio,
            self.secondary_progress,
            self.markers,
            if self.classes.is_empty() { "-" } else { &self.classes },
            self.knob_scale,
        );
        for warning in &self.warnings {
            out.push_str("warning:   ");
            out.push_str(warning);
            out.push('\n');
        }
        out
    }
}
