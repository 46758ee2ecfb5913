//! Minimal ASCII presentation of the map and message log.
//!
//! Deliberately not a UI: one glyph per tile, visibility-masked, with the
//! most recent log lines underneath. Enough to drive the core by hand.

use std::io::{Write, stdout};

use anyhow::Result;
use crossterm::style::{Color, ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use crossterm::{cursor, execute, queue};
use game_core::{GameEngine, MapOracle, MessageColor, Mode, Position};
use game_content::FloorMap;

const LOG_LINES: usize = 5;

pub fn draw(map: &FloorMap, engine: &GameEngine, mode: Mode) -> Result<()> {
    let mut out = stdout();
    execute!(out, Clear(ClearType::All), cursor::MoveTo(0, 0))?;

    let dimensions = map.dimensions();
    for y in 0..dimensions.height as i32 {
        let mut line = String::with_capacity(dimensions.width as usize);
        for x in 0..dimensions.width as i32 {
            line.push(glyph(map, engine, Position::new(x, y)));
        }
        // Raw mode needs explicit carriage returns.
        write!(out, "{line}\r\n")?;
    }

    write!(out, "\r\n")?;
    let recent: Vec<_> = engine.log().recent(LOG_LINES).cloned().collect();
    for message in recent.iter().rev() {
        queue!(out, SetForegroundColor(palette(message.color)))?;
        write!(out, "{}\r\n", message.text)?;
        queue!(out, ResetColor)?;
    }

    if mode == Mode::GameOver {
        write!(out, "\r\nPress Escape to exit.\r\n")?;
    }
    out.flush()?;
    Ok(())
}

fn glyph(map: &FloorMap, engine: &GameEngine, position: Position) -> char {
    let state = engine.state();

    if !state.visibility.is_visible(position) {
        if state.visibility.is_explored(position) {
            return terrain_glyph(map, position);
        }
        return ' ';
    }

    if let Some(actor) = state.entities.actor_at(position) {
        if actor.id.is_player() {
            return '@';
        }
        return actor.name.chars().next().unwrap_or('?');
    }
    // Remains draw under living actors, items under remains.
    if state
        .entities
        .actors()
        .any(|actor| !actor.is_alive() && actor.position == position)
    {
        return '%';
    }
    if state.entities.item_at(position).is_some() {
        return '!';
    }

    terrain_glyph(map, position)
}

fn terrain_glyph(map: &FloorMap, position: Position) -> char {
    if map.is_walkable(position) { '.' } else { '#' }
}

fn palette(color: MessageColor) -> Color {
    match color {
        MessageColor::Info => Color::White,
        MessageColor::PlayerAttack => Color::Green,
        MessageColor::EnemyAttack => Color::Red,
        MessageColor::Invalid => Color::DarkGrey,
        MessageColor::Recovered => Color::Cyan,
        MessageColor::Death => Color::Magenta,
    }
}
