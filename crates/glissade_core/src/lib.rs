//! Glissade Core
//!
//! Foundational pieces shared by the Glissade widget crates:
//!
//! - **Input vocabulary**: key codes, pointer kinds and track phases that
//!   hosts translate their platform events into
//! - **Notification dispatch**: a keyed handler registry for widget output
//! - **Transition tables**: flat state machines used by widget reducers
//!
//! # Example
//!
//! ```rust
//! use glissade_core::fsm::TransitionTable;
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq)]
//! enum Press { Up, Down }
//!
//! let table = TransitionTable::builder()
//!     .on(Press::Up, "press", Press::Down)
//!     .on(Press::Down, "release", Press::Up)
//!     .build();
//!
//! assert_eq!(table.next(Press::Up, "press"), Some(Press::Down));
//! assert_eq!(table.next(Press::Up, "release"), None);
//! ```

pub mod events;
pub mod fsm;

pub use events::{Dispatcher, KeyCode, PointerKind, TrackPhase};
pub use fsm::{Transition, TransitionTable, TransitionTableBuilder};
