//! Key bindings

use glissade_core::KeyCode;

use crate::config::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Increment,
    Decrement,
    ToMin,
    ToMax,
}

/// Map a key to a slider action. Horizontal arrows follow the layout direction.
pub fn key_action(key: KeyCode, direction: Direction) -> Option<KeyAction> {
    let (left, right) = match direction {
        Direction::Ltr => (KeyAction::Decrement, KeyAction::Increment),
        Direction::Rtl => (KeyAction::Increment, KeyAction::Decrement),
    };
    match key {
        KeyCode::LEFT => Some(left),
        KeyCode::RIGHT => Some(right),
        KeyCode::DOWN | KeyCode::PAGE_DOWN => Some(KeyAction::Decrement),
        KeyCode::UP | KeyCode::PAGE_UP => Some(KeyAction::Increment),
        KeyCode::HOME => Some(KeyAction::ToMin),
        KeyCode::END => Some(KeyAction::ToMax),
        _ => None,
    }
}
