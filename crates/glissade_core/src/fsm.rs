//! Transition tables
//!
//! Flat state machines for widget interaction states. A table is an
//! immutable lookup `(state, event) -> state`, so reducers can consult it
//! without owning any mutable machine.

use smallvec::SmallVec;

/// A transition in the state machine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition<S, E> {
    pub from_state: S,
    pub event: E,
    pub to_state: S,
}

impl<S, E> Transition<S, E> {
    pub const fn new(from: S, event: E, to: S) -> Self {
        Self {
            from_state: from,
            event,
            to_state: to,
        }
    }
}

/// Builder for transition tables
pub struct TransitionTableBuilder<S, E> {
    transitions: SmallVec<[Transition<S, E>; 8]>,
}

impl<S: Copy + PartialEq, E: Copy + PartialEq> TransitionTableBuilder<S, E> {
    pub fn new() -> Self {
        Self {
            transitions: SmallVec::new(),
        }
    }

    /// Add a simple transition (from, event, to)
    pub fn on(mut self, from: S, event: E, to: S) -> Self {
        self.transitions.push(Transition::new(from, event, to));
        self
    }

    /// Add the same transition from several source states
    pub fn on_any(mut self, from: &[S], event: E, to: S) -> Self {
        for state in from {
            self.transitions.push(Transition::new(*state, event, to));
        }
        self
    }

    pub fn build(self) -> TransitionTable<S, E> {
        TransitionTable {
            transitions: self.transitions,
        }
    }
}

impl<S: Copy + PartialEq, E: Copy + PartialEq> Default for TransitionTableBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable transition lookup
#[derive(Clone, Debug)]
pub struct TransitionTable<S, E> {
    transitions: SmallVec<[Transition<S, E>; 8]>,
}

impl<S: Copy + PartialEq, E: Copy + PartialEq> TransitionTable<S, E> {
    pub fn builder() -> TransitionTableBuilder<S, E> {
        TransitionTableBuilder::new()
    }

    /// The state reached from `from` on `event`, if a transition exists
    pub fn next(&self, from: S, event: E) -> Option<S> {
        self.transitions
            .iter()
            .find(|t| t.from_state == from && t.event == event)
            .map(|t| t.to_state)
    }
}
