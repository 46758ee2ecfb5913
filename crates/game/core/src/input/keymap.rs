//! Fixed key bindings: arrow/navigation keys, numpad, and vi keys.

use super::Key;
use crate::action::Direction;

/// Movement binding for a key, if it has one.
pub fn direction_for(key: Key) -> Option<Direction> {
    let direction = match key {
        // Arrow and navigation keys.
        Key::Up => Direction::North,
        Key::Down => Direction::South,
        Key::Left => Direction::West,
        Key::Right => Direction::East,
        Key::Home => Direction::NorthWest,
        Key::End => Direction::SouthWest,
        Key::PageUp => Direction::NorthEast,
        Key::PageDown => Direction::SouthEast,
        // Numpad keys.
        Key::Numpad(1) => Direction::SouthWest,
        Key::Numpad(2) => Direction::South,
        Key::Numpad(3) => Direction::SouthEast,
        Key::Numpad(4) => Direction::West,
        Key::Numpad(6) => Direction::East,
        Key::Numpad(7) => Direction::NorthWest,
        Key::Numpad(8) => Direction::North,
        Key::Numpad(9) => Direction::NorthEast,
        // Vi keys.
        Key::Char('h') => Direction::West,
        Key::Char('j') => Direction::South,
        Key::Char('k') => Direction::North,
        Key::Char('l') => Direction::East,
        Key::Char('y') => Direction::NorthWest,
        Key::Char('u') => Direction::NorthEast,
        Key::Char('b') => Direction::SouthWest,
        Key::Char('n') => Direction::SouthEast,
        _ => return None,
    };
    Some(direction)
}

/// Keys that pass the turn.
pub fn is_wait_key(key: Key) -> bool {
    matches!(key, Key::Char('.') | Key::Numpad(5))
}
