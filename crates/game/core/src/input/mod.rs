//! Symbolic input events and the mode-conditioned handler that turns them
//! into actions.
//!
//! This module owns the key-to-intent mapping so the rest of the rules
//! stay agnostic about concrete key bindings or any terminal crate; the
//! raw source translates its own events into [`InputEvent`]s.
mod handler;
mod keymap;

pub use handler::{Disposition, EventHandler, Mode};
pub use keymap::{direction_for, is_wait_key};

/// Symbolic key codes produced by the raw input collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    /// Numpad digit 0-9.
    Numpad(u8),
    /// Printable character.
    Char(char),
    Escape,
}

/// One discrete event from the raw input source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Key(Key),
    /// Close/interrupt signal from the host (window close, Ctrl+C).
    Quit,
}

/// Blocking producer of input events, one at a time.
pub trait EventSource {
    /// Blocks until the next event is available.
    fn next_event(&mut self) -> InputEvent;
}
