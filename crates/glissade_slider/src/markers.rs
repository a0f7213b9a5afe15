//! Tick-marker count

use crate::range::Range;

/// Number of tick markers to render for a snapping slider.
///
/// `round((max - min) / step)`, capped at `max_markers`. Zero when snapping
/// is off or the range cannot produce a finite, non-negative count.
pub fn marker_count(range: &Range, snaps: bool, max_markers: u32) -> usize {
    if !snaps || !range.has_step() {
        return 0;
    }
    let steps = (range.width() / range.step).round();
    if !steps.is_finite() || steps < 0.0 {
        return 0;
    }
    steps.min(max_markers as f64) as usize
}
