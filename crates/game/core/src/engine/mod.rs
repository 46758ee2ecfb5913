//! Turn sequencing: player action, then enemy pass, then visibility.
//!
//! The [`GameEngine`] is the authoritative owner of mutable world state.
//! Every mutation flows through [`GameEngine::perform`]; the sequencing
//! rule (enemies react and visibility refreshes only after a successful
//! player action) lives in [`GameEngine::player_turn`].

use crate::action::{Action, ActionContext, ActionTransition, Impossible};
use crate::config::GameConfig;
use crate::env::GameEnv;
use crate::log::MessageLog;
use crate::state::{EntityId, GameState};

pub struct GameEngine {
    state: GameState,
    log: MessageLog,
}

impl GameEngine {
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            log: MessageLog::default(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn log(&self) -> &MessageLog {
        &self.log
    }

    pub fn log_mut(&mut self) -> &mut MessageLog {
        &mut self.log
    }

    /// Resolves one action for its actor. No sequencing side effects.
    pub fn perform(&mut self, env: &GameEnv<'_>, action: &Action) -> Result<(), Impossible> {
        let mut ctx = ActionContext {
            state: &mut self.state,
            map: env.map(),
            log: &mut self.log,
        };
        action.perform(&mut ctx)
    }

    /// Resolves one player action and, when it succeeds, runs the full
    /// turn consequence: the enemy pass first, the visibility refresh
    /// second. A failed action advances nothing; the error is returned
    /// for the caller to surface.
    pub fn player_turn(&mut self, env: &GameEnv<'_>, action: &Action) -> Result<(), Impossible> {
        self.perform(env, action)?;
        self.state.turn.completed += 1;

        self.handle_enemy_turns(env);
        self.update_fov(env);
        Ok(())
    }

    /// Gives every living NPC one action decided by the policy
    /// collaborator. An NPC's impossible action is dropped.
    pub fn handle_enemy_turns(&mut self, env: &GameEnv<'_>) {
        let ids: Vec<EntityId> = self
            .state
            .entities
            .npcs
            .iter()
            .filter(|npc| npc.is_alive())
            .map(|npc| npc.id)
            .collect();

        for id in ids {
            // An earlier action this pass may have changed the world.
            let alive = self
                .state
                .entities
                .actor(id)
                .is_some_and(|actor| actor.is_alive());
            if !alive {
                continue;
            }

            let action = env.npcs().decide(id, &self.state, env.map());
            let _ = self.perform(env, &action);
        }
    }

    /// Recomputes the player's visible set and extends the explored set.
    pub fn update_fov(&mut self, env: &GameEnv<'_>) {
        let origin = self.state.entities.player.position;
        let visible = env
            .vision()
            .visible_from(env.map(), origin, GameConfig::FOV_RADIUS);
        self.state.visibility.refresh(visible);
    }
}
