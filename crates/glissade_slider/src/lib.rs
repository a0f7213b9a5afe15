//! Glissade Slider
//!
//! The interaction model of a material-style range slider, independent of
//! any renderer.
//!
//! # Architecture
//!
//! - [`reducer::reduce`] is a pure function from `(state, event)` to the next
//!   state plus a list of effects
//! - [`slider::Slider`] hosts a state, carries out those effects (debounce
//!   timers, deferred notifications, the knob animation) on a logical clock,
//!   and dispatches notifications to listeners
//! - [`view::SliderView`] projects a state into what a renderer draws:
//!   classes, progress fills, knob position and scale, pin label, markers
//!
//! Values are always clamped into `[min, max]` and snapped to the step grid
//! anchored at `min`. While the knob is dragged only the immediate value
//! moves; the committed value follows when the drag ends.
//!
//! # Example
//!
//! ```rust
//! use glissade_slider::prelude::*;
//!
//! let config = SliderConfig::from_toml_str("max = 10\nstep = 0.5\nsnaps = true\nmax_markers = 40").unwrap();
//! let mut slider = Slider::new(config);
//!
//! slider.set_value(3.3);
//! assert_eq!(slider.value(), 3.5);
//! assert_eq!(slider.markers(), 20);
//!
//! slider.key_down(KeyCode::HOME);
//! assert_eq!(slider.value(), 0.0);
//! ```

pub mod config;
pub mod error;
pub mod event;
pub mod keyboard;
pub mod markers;
pub mod range;
pub mod reducer;
pub mod slider;
pub mod state;
pub mod view;

pub use config::{Direction, SliderConfig};
pub use error::{ConfigError, Result};
pub use event::{KeyOrigin, Notification, NotificationKind, SliderEvent, Track};
pub use range::Range;
pub use reducer::{reduce, Effect, Reduction};
pub use slider::{Outcome, Slider};
pub use state::{BarGeometry, InteractionState, SliderState};
pub use view::SliderView;

/// Common imports for hosts
pub mod prelude {
    pub use crate::config::{Direction, SliderConfig};
    pub use crate::event::{Notification, NotificationKind, SliderEvent};
    pub use crate::slider::Slider;
    pub use crate::state::BarGeometry;
    pub use crate::view::SliderView;
    pub use glissade_core::{KeyCode, PointerKind};
}
