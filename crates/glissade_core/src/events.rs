//! Input vocabulary and notification dispatch
//!
//! Platform-agnostic names for the raw input a widget consumes, plus a
//! dispatcher that delivers a widget's output notifications to listeners.

use std::hash::Hash;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Virtual key codes (platform-agnostic)
///
/// Only the navigation keys a range widget binds are named; hosts map
/// everything else to [`KeyCode::UNKNOWN`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct KeyCode(pub u32);

impl KeyCode {
    // Special keys
    pub const TAB: KeyCode = KeyCode(0x09);
    pub const ENTER: KeyCode = KeyCode(0x0D);
    pub const ESCAPE: KeyCode = KeyCode(0x1B);

    // Arrow keys
    pub const LEFT: KeyCode = KeyCode(0x25);
    pub const UP: KeyCode = KeyCode(0x26);
    pub const RIGHT: KeyCode = KeyCode(0x27);
    pub const DOWN: KeyCode = KeyCode(0x28);

    // Navigation keys
    pub const HOME: KeyCode = KeyCode(0x24);
    pub const END: KeyCode = KeyCode(0x23);
    pub const PAGE_UP: KeyCode = KeyCode(0x21);
    pub const PAGE_DOWN: KeyCode = KeyCode(0x22);

    // Unknown/unmapped key
    pub const UNKNOWN: KeyCode = KeyCode(0);

    /// Look up a key by its lowercase binding name (`"left"`, `"pagedown"`, ...)
    pub fn from_name(name: &str) -> KeyCode {
        match name.to_ascii_lowercase().as_str() {
            "tab" => KeyCode::TAB,
            "enter" => KeyCode::ENTER,
            "esc" | "escape" => KeyCode::ESCAPE,
            "left" => KeyCode::LEFT,
            "up" => KeyCode::UP,
            "right" => KeyCode::RIGHT,
            "down" => KeyCode::DOWN,
            "home" => KeyCode::HOME,
            "end" => KeyCode::END,
            "pageup" => KeyCode::PAGE_UP,
            "pagedown" => KeyCode::PAGE_DOWN,
            _ => KeyCode::UNKNOWN,
        }
    }
}

/// The device that produced a pointer event
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerKind {
    #[default]
    Mouse,
    Touch,
    Pen,
}

impl PointerKind {
    pub fn is_mouse(&self) -> bool {
        matches!(self, PointerKind::Mouse)
    }
}

/// Phase of a track (press + move) gesture
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackPhase {
    Start,
    Move,
    End,
}

/// Handler invoked with a dispatched notification
pub type Handler<N> = Box<dyn Fn(&N)>;

/// Delivers notifications to handlers registered under a key
///
/// Handlers run in registration order on the calling thread.
pub struct Dispatcher<K, N> {
    handlers: FxHashMap<K, Vec<Handler<N>>>,
    catch_all: Vec<Handler<N>>,
}

impl<K: Eq + Hash, N> Dispatcher<K, N> {
    pub fn new() -> Self {
        Self {
            handlers: FxHashMap::default(),
            catch_all: Vec::new(),
        }
    }

    /// Register a handler for one notification key
    pub fn register<F>(&mut self, key: K, handler: F)
    where
        F: Fn(&N) + 'static,
    {
        self.handlers.entry(key).or_default().push(Box::new(handler));
    }

    /// Register a handler that sees every notification
    pub fn register_all<F>(&mut self, handler: F)
    where
        F: Fn(&N) + 'static,
    {
        self.catch_all.push(Box::new(handler));
    }

    /// Dispatch a notification to the keyed handlers, then the catch-all ones
    pub fn dispatch(&self, key: &K, notification: &N) {
        if let Some(handlers) = self.handlers.get(key) {
            for handler in handlers {
                handler(notification);
            }
        }
        for handler in &self.catch_all {
            handler(notification);
        }
    }
}

impl<K: Eq + Hash, N> Default for Dispatcher<K, N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_key_names() {
        assert_eq!(KeyCode::from_name("Left"), KeyCode::LEFT);
        assert_eq!(KeyCode::from_name("pagedown"), KeyCode::PAGE_DOWN);
        assert_eq!(KeyCode::from_name("end"), KeyCode::END);
        assert_eq!(KeyCode::from_name("f13"), KeyCode::UNKNOWN);
    }

    #[test]
    fn test_dispatch_by_key() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut dispatcher: Dispatcher<&'static str, i32> = Dispatcher::new();

        let seen_a = seen.clone();
        dispatcher.register("a", move |n| seen_a.borrow_mut().push(("a", *n)));
        let seen_b = seen.clone();
        dispatcher.register("b", move |n| seen_b.borrow_mut().push(("b", *n)));

        dispatcher.dispatch(&"a", &1);
        dispatcher.dispatch(&"b", &2);
        dispatcher.dispatch(&"c", &3);

        assert_eq!(*seen.borrow(), vec![("a", 1), ("b", 2)]);
    }

    #[test]
    fn test_catch_all_runs_after_keyed() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut dispatcher: Dispatcher<u8, ()> = Dispatcher::new();

        let o = order.clone();
        dispatcher.register_all(move |_| o.borrow_mut().push("all"));
        let o = order.clone();
        dispatcher.register(1, move |_| o.borrow_mut().push("keyed"));

        dispatcher.dispatch(&1, &());
        assert_eq!(*order.borrow(), vec!["keyed", "all"]);

        // unkeyed notifications still reach the catch-all
        dispatcher.dispatch(&2, &());
        assert_eq!(*order.borrow(), vec!["keyed", "all", "all"]);
    }
}
