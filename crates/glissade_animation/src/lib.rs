//! Glissade Animation System
//!
//! Timing primitives for widget interaction.
//!
//! # Features
//!
//! - **Easing**: the CSS `ease` timing curve
//! - **Tweens**: fixed-duration interpolation between two values
//! - **Timer scheduler**: named debounces and next-tick deferral on a
//!   host-driven logical clock

mod easing;
pub mod scheduler;
pub mod tween;

pub use scheduler::TimerScheduler;
pub use tween::Tween;
