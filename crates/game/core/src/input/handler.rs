use super::keymap;
use super::{EventSource, InputEvent, Key};
use crate::action::{Action, BumpAction, WaitAction};
use crate::engine::GameEngine;
use crate::env::GameEnv;
use crate::log::MessageColor;
use crate::state::EntityId;

/// Interaction mode; decides which intents raw input can produce.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Playing,
    GameOver,
}

/// What a single input event amounts to under the current mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Disposition {
    /// A constructed intent for the bound entity.
    Act(Action),
    /// Terminal request to leave the session.
    Exit,
    /// The event maps to nothing in the current mode.
    Ignored,
}

/// Mode-conditioned translation from input events to actions, plus the
/// blocking session loop that feeds them through the engine.
pub struct EventHandler {
    mode: Mode,
    player: EntityId,
}

impl EventHandler {
    pub fn new(player: EntityId) -> Self {
        Self::with_mode(player, Mode::Playing)
    }

    pub fn with_mode(player: EntityId, mode: Mode) -> Self {
        Self { mode, player }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Translates one event under the current mode. Pure: no world access,
    /// at most one action per event.
    pub fn dispatch(&self, event: InputEvent) -> Disposition {
        match (self.mode, event) {
            // A host close signal is terminal in every mode.
            (_, InputEvent::Quit) => Disposition::Exit,
            (Mode::Playing, InputEvent::Key(key)) => self.dispatch_playing(key),
            (Mode::GameOver, InputEvent::Key(Key::Escape)) => Disposition::Exit,
            (Mode::GameOver, InputEvent::Key(_)) => Disposition::Ignored,
        }
    }

    fn dispatch_playing(&self, key: Key) -> Disposition {
        if let Some(direction) = keymap::direction_for(key) {
            return Disposition::Act(Action::Bump(BumpAction::new(self.player, direction)));
        }
        if keymap::is_wait_key(key) {
            return Disposition::Act(Action::Wait(WaitAction::new(self.player)));
        }
        match key {
            Key::Escape => Disposition::Exit,
            _ => Disposition::Ignored,
        }
    }

    /// Feeds one event through the engine. A failed action becomes a log
    /// entry and advances nothing; a successful one runs the full turn
    /// consequence and may end the game.
    ///
    /// Returns `true` while the session should keep running.
    pub fn process_event(
        &mut self,
        engine: &mut GameEngine,
        env: &GameEnv<'_>,
        event: InputEvent,
    ) -> bool {
        match self.dispatch(event) {
            Disposition::Exit => false,
            Disposition::Ignored => true,
            Disposition::Act(action) => {
                match engine.player_turn(env, &action) {
                    Ok(()) => self.after_turn(engine),
                    Err(impossible) => {
                        engine
                            .log_mut()
                            .add(impossible.to_string(), MessageColor::Invalid);
                    }
                }
                true
            }
        }
    }

    /// Dying flips interaction to GameOver.
    fn after_turn(&mut self, engine: &mut GameEngine) {
        if self.mode == Mode::Playing && !engine.state().entities.player.is_alive() {
            engine.log_mut().add("You died!", MessageColor::Death);
            self.mode = Mode::GameOver;
        }
    }

    /// Blocking session loop: one event is resolved fully before the next
    /// is read. `on_frame` runs once up front and again after every
    /// processed event. Returns when an exit intent or close signal
    /// arrives.
    pub fn run_session<S, F>(
        &mut self,
        engine: &mut GameEngine,
        env: &GameEnv<'_>,
        source: &mut S,
        mut on_frame: F,
    ) where
        S: EventSource,
        F: FnMut(&GameEngine, Mode),
    {
        engine.update_fov(env);
        on_frame(engine, self.mode);

        loop {
            let event = source.next_event();
            if !self.process_event(engine, env, event) {
                break;
            }
            on_frame(engine, self.mode);
        }
    }
}
