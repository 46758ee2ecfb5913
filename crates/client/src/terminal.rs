//! Raw-mode terminal wrapper translating crossterm events into the core's
//! symbolic input.

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use game_core::{EventSource, InputEvent, Key};

/// Keeps the terminal in raw mode for its lifetime and feeds key events to
/// the session loop.
pub struct Terminal {
    _private: (),
}

impl Terminal {
    pub fn enter() -> Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self { _private: () })
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

impl EventSource for Terminal {
    fn next_event(&mut self) -> InputEvent {
        loop {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if let Some(event) = translate(key) {
                        return event;
                    }
                }
                Ok(_) => {}
                // A broken event stream cannot be recovered from inside
                // the loop; treat it as a close signal.
                Err(_) => return InputEvent::Quit,
            }
        }
    }
}

/// Maps a crossterm key event onto the core's symbolic alphabet. Keys the
/// core has no symbol for yield `None` and are read past.
fn translate(key: KeyEvent) -> Option<InputEvent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(InputEvent::Quit);
    }

    let key = match key.code {
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::Esc => Key::Escape,
        KeyCode::Char(ch) => Key::Char(ch),
        _ => return None,
    };
    Some(InputEvent::Key(key))
}
