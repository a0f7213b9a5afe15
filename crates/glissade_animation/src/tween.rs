//! Fixed-duration tweens
//!
//! A tween interpolates between two values over a duration along the CSS
//! `ease` curve. It is the code-side equivalent of a CSS
//! `transition: left 80ms ease`.

use std::time::Duration;

use crate::easing::ease;

#[derive(Clone, Debug)]
pub struct Tween {
    from: f32,
    to: f32,
    duration: Duration,
    elapsed: Duration,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
        }
    }

    /// Advance by `dt`. Returns true once the tween has finished.
    pub fn step(&mut self, dt: Duration) -> bool {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        self.is_finished()
    }

    /// Current eased value
    pub fn value(&self) -> f32 {
        self.from + (self.to - self.from) * ease(self.progress())
    }

    /// Re-aim a running tween from its current value, restarting the clock
    pub fn retarget(&mut self, to: f32) {
        self.from = self.value();
        self.to = to;
        self.elapsed = Duration::ZERO;
    }

    fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}
