//! The CSS `ease` timing curve
//!
//! `ease` is `cubic-bezier(0.25, 0.1, 0.25, 1.0)`. The curve is parametric,
//! so progress is first inverted through the x polynomial and the parameter
//! found there is evaluated on the y polynomial.

const X1: f64 = 0.25;
const Y1: f64 = 0.1;
const X2: f64 = 0.25;
const Y2: f64 = 1.0;

const EPSILON: f64 = 1e-7;
const NEWTON_ITERATIONS: usize = 8;

/// Eased progress for linear progress `t`, clamped to 0.0..=1.0
pub fn ease(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    let s = parameter_for(t as f64);
    Axis::new(Y1, Y2).at(s) as f32
}

/// One coordinate of a bezier anchored at 0 and 1
#[derive(Clone, Copy)]
struct Axis {
    a: f64,
    b: f64,
    c: f64,
}

impl Axis {
    fn new(p1: f64, p2: f64) -> Self {
        let c = 3.0 * p1;
        let b = 3.0 * (p2 - p1) - c;
        Self { a: 1.0 - c - b, b, c }
    }

    fn at(self, s: f64) -> f64 {
        ((self.a * s + self.b) * s + self.c) * s
    }

    fn slope(self, s: f64) -> f64 {
        (3.0 * self.a * s + 2.0 * self.b) * s + self.c
    }
}

/// Curve parameter whose x coordinate is `x`
fn parameter_for(x: f64) -> f64 {
    let axis = Axis::new(X1, X2);

    let mut s = x;
    for _ in 0..NEWTON_ITERATIONS {
        let err = axis.at(s) - x;
        if err.abs() < EPSILON {
            return s;
        }
        let slope = axis.slope(s);
        if slope.abs() < EPSILON {
            break;
        }
        s -= err / slope;
    }

    // x(s) is monotonic on [0, 1]
    let (mut lo, mut hi) = (0.0, 1.0);
    s = x;
    while hi - lo > EPSILON {
        let err = axis.at(s) - x;
        if err.abs() < EPSILON {
            break;
        }
        if err < 0.0 {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_are_exact() {
        assert_eq!(ease(0.0), 0.0);
        assert_eq!(ease(1.0), 1.0);
    }

    #[test]
    fn test_out_of_range_progress_is_clamped() {
        assert_eq!(ease(-0.5), 0.0);
        assert_eq!(ease(1.5), 1.0);
    }

    #[test]
    fn test_matches_browser_midpoint() {
        // what browsers report for `ease` halfway through
        assert!((ease(0.5) - 0.8024).abs() < 1e-3, "ease(0.5) = {}", ease(0.5));
    }

    #[test]
    fn test_monotonic() {
        let mut prev = 0.0;
        for i in 0..=100 {
            let v = ease(i as f32 / 100.0);
            assert!(v >= prev - 1e-6, "dips at {i}");
            prev = v;
        }
    }
}
