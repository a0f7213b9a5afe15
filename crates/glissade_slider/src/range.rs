//! Range math
//!
//! Snapping, clamping and value/ratio conversion for a `[min, max]` range
//! quantized by `step`. Degenerate ranges never panic: a step that is not a
//! positive finite number disables snapping, and a zero-width range maps
//! every value to ratio 0.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Default for Range {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            step: 1.0,
        }
    }
}

impl Range {
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// Whether `step` quantizes values
    pub fn has_step(&self) -> bool {
        self.step.is_finite() && self.step > 0.0
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// Round `value` to the nearest grid point `min + n * step`.
    ///
    /// Sub-unit steps divide by the reciprocal instead of multiplying, which
    /// keeps decimal steps like `0.1` on their printed values.
    pub fn snap(&self, value: f64) -> f64 {
        if !self.has_step() {
            return value;
        }
        let steps = ((value - self.min) / self.step).round();
        if self.step < 1.0 {
            steps / (1.0 / self.step) + self.min
        } else {
            steps * self.step + self.min
        }
    }

    /// Snap, then clamp into `[min, max]`. `None` for NaN.
    pub fn clamp(&self, value: f64) -> Option<f64> {
        if value.is_nan() {
            return None;
        }
        let clamped = self.snap(value).max(self.min).min(self.max);
        if clamped.is_nan() {
            None
        } else {
            Some(clamped)
        }
    }

    /// Fractional position (0.0 to 1.0) of `value` within `[min, max]`
    pub fn ratio(&self, value: f64) -> f64 {
        let width = self.width();
        if !width.is_finite() || width <= 0.0 {
            return 0.0;
        }
        let value = self.clamp(value).unwrap_or(self.min);
        ((value - self.min) / width).clamp(0.0, 1.0)
    }

    /// Percentage position (0 to 100) of `value`
    pub fn ratio_percent(&self, value: f64) -> f64 {
        self.ratio(value) * 100.0
    }

    /// Unsnapped value at a percentage position
    pub fn value_at(&self, ratio_percent: f64) -> f64 {
        self.width() * ratio_percent / 100.0 + self.min
    }

    /// Snapped, clamped value at a percentage position
    pub fn stepped_value_at(&self, ratio_percent: f64) -> Option<f64> {
        self.clamp(self.value_at(ratio_percent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_to_integer_steps() {
        let range = Range::new(0.0, 100.0, 5.0);
        assert_eq!(range.snap(12.0), 10.0);
        assert_eq!(range.snap(12.5), 15.0);
        assert_eq!(range.snap(-3.0), -5.0);
    }

    #[test]
    fn test_snap_offsets_from_min() {
        let range = Range::new(3.0, 23.0, 5.0);
        assert_eq!(range.snap(10.0), 8.0);
        assert_eq!(range.snap(11.0), 13.0);
    }

    #[test]
    fn test_decimal_steps_stay_on_grid() {
        let range = Range::new(0.0, 1.0, 0.1);
        assert_eq!(range.snap(0.3), 0.3);
        assert_eq!(range.snap(0.7000001), 0.7);
    }

    #[test]
    fn test_no_snap_without_step() {
        for step in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let range = Range::new(0.0, 10.0, step);
            assert_eq!(range.snap(3.3), 3.3);
        }
    }

    #[test]
    fn test_clamp() {
        let range = Range::default();
        assert_eq!(range.clamp(-20.0), Some(0.0));
        assert_eq!(range.clamp(200.0), Some(100.0));
        assert_eq!(range.clamp(49.6), Some(50.0));
        assert_eq!(range.clamp(f64::INFINITY), Some(100.0));
        assert_eq!(range.clamp(f64::NEG_INFINITY), Some(0.0));
        assert_eq!(range.clamp(f64::NAN), None);
    }

    #[test]
    fn test_clamp_off_grid_max() {
        // 9 is not on the 4-grid; the top reachable grid point is 8
        let range = Range::new(0.0, 9.0, 4.0);
        assert_eq!(range.clamp(9.0), Some(8.0));
        // 10 snaps to 12 and is then pulled back to max
        let range = Range::new(0.0, 10.0, 4.0);
        assert_eq!(range.clamp(10.0), Some(10.0));
    }

    #[test]
    fn test_ratio() {
        let range = Range::new(10.0, 20.0, 1.0);
        assert_eq!(range.ratio_percent(10.0), 0.0);
        assert_eq!(range.ratio_percent(15.0), 50.0);
        assert_eq!(range.ratio_percent(20.0), 100.0);
        assert_eq!(range.ratio_percent(99.0), 100.0);
    }

    #[test]
    fn test_ratio_spans_full_range_when_max_is_off_grid() {
        let range = Range::new(0.0, 9.0, 4.0);
        assert!((range.ratio_percent(8.0) - 800.0 / 9.0).abs() < 1e-9);
        assert!((range.ratio_percent(9.0) - 800.0 / 9.0).abs() < 1e-9);
        assert!((range.ratio_percent(4.0) - 400.0 / 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_ratio_of_degenerate_range_is_zero() {
        assert_eq!(Range::new(5.0, 5.0, 1.0).ratio(5.0), 0.0);
        assert_eq!(Range::new(10.0, 0.0, 1.0).ratio(5.0), 0.0);
        assert_eq!(Range::new(0.0, f64::INFINITY, 1.0).ratio(5.0), 0.0);
    }

    #[test]
    fn test_value_at() {
        let range = Range::new(-50.0, 50.0, 10.0);
        assert_eq!(range.value_at(0.0), -50.0);
        assert_eq!(range.value_at(50.0), 0.0);
        assert_eq!(range.stepped_value_at(33.0), Some(-20.0));
        assert_eq!(range.stepped_value_at(140.0), Some(50.0));
    }
}
