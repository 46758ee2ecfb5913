use game_core::{
    Action, Direction, EntityId, GameState, MapOracle, MeleeAction, NpcPolicy, WaitAction,
};

/// Minimal hostile behavior: strike the player when standing next to them
/// (8-way), otherwise hold position. Pathfinding toward the player is a
/// separate concern and does not live here.
pub struct BasicHostile;

impl NpcPolicy for BasicHostile {
    fn decide(&self, npc: EntityId, state: &GameState, _map: &dyn MapOracle) -> Action {
        let Some(actor) = state.entities.actor(npc) else {
            return Action::Wait(WaitAction::new(npc));
        };
        let player = state.player();

        if player.is_alive() {
            let dx = player.position.x - actor.position.x;
            let dy = player.position.y - actor.position.y;
            if let Some(direction) = Direction::from_delta(dx, dy) {
                return Action::Melee(MeleeAction::new(npc, direction));
            }
        }

        Action::Wait(WaitAction::new(npc))
    }
}
