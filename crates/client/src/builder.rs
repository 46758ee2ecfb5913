//! Assembles the demo scenario: map, actors, items, and collaborators.

use game_content::{BasicHostile, FloorMap, RadiusVision, spawn};
use game_core::{
    EntityId, EventHandler, GameEngine, GameEnv, GameState, MessageColor, Position, TerrainKind,
};

/// Owns the collaborator implementations for the session's lifetime.
pub struct World {
    pub map: FloorMap,
    pub vision: RadiusVision,
    pub policy: BasicHostile,
}

impl World {
    pub fn env(&self) -> GameEnv<'_> {
        GameEnv::new(&self.map, &self.vision, &self.policy)
    }
}

/// One hand-laid floor: a walled room with a couple of pillars, two
/// monsters, and a potion near the entrance.
pub fn build_demo() -> (GameEngine, EventHandler, World) {
    let mut map = FloorMap::filled(40, 20, TerrainKind::Wall);
    map.fill_rect(Position::new(1, 1), Position::new(38, 18), TerrainKind::Floor);
    for pillar in [
        Position::new(14, 6),
        Position::new(14, 12),
        Position::new(26, 6),
        Position::new(26, 12),
    ] {
        map.set_terrain(pillar, TerrainKind::Wall);
    }

    let mut state = GameState::new(spawn::player(Position::new(5, 9)));
    state
        .entities
        .npcs
        .push(spawn::orc(EntityId(1), Position::new(18, 7)));
    state
        .entities
        .npcs
        .push(spawn::troll(EntityId(2), Position::new(30, 11)));
    state
        .entities
        .items
        .push(spawn::healing_potion(EntityId(3), Position::new(8, 10)));

    let mut engine = GameEngine::new(state);
    engine.log_mut().add(
        "Hello and welcome, adventurer, to yet another dungeon!",
        MessageColor::Info,
    );

    let handler = EventHandler::new(EntityId::PLAYER);
    let world = World {
        map,
        vision: RadiusVision,
        policy: BasicHostile,
    };
    (engine, handler, world)
}
