//! In-game message log: a bounded ring of player-facing lines.
//!
//! Gameplay messages are data consumed by whatever presentation layer is
//! attached; only the append/read surface is defined here.
use std::collections::VecDeque;

use crate::config::GameConfig;

/// Palette slot for a log entry; the presentation layer picks the actual
/// colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageColor {
    Info,
    PlayerAttack,
    EnemyAttack,
    /// Feedback for an action that could not happen.
    Invalid,
    Recovered,
    Death,
}

/// A single log entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub color: MessageColor,
}

impl Message {
    pub fn new(text: impl Into<String>, color: MessageColor) -> Self {
        Self {
            text: text.into(),
            color,
        }
    }
}

/// Circular buffer of messages shown to the player.
#[derive(Clone, Debug)]
pub struct MessageLog {
    entries: VecDeque<Message>,
    capacity: usize,
}

impl MessageLog {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends an entry, evicting the oldest when at capacity.
    pub fn add(&mut self, text: impl Into<String>, color: MessageColor) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(Message::new(text, color));
    }

    /// Newest first.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &Message> {
        self.entries.iter().rev().take(limit)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.entries.iter()
    }

    pub fn last(&self) -> Option<&Message> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for MessageLog {
    fn default() -> Self {
        Self::new(GameConfig::MESSAGE_LOG_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evicts_oldest_at_capacity() {
        let mut log = MessageLog::new(2);
        log.add("one", MessageColor::Info);
        log.add("two", MessageColor::Info);
        log.add("three", MessageColor::Info);

        let texts: Vec<_> = log.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, ["two", "three"]);
        assert_eq!(log.last().unwrap().text, "three");
    }
}
