//! Sequencer behavior: what runs (and what must not run) around a player
//! action.

mod common;

use common::{Fixture, GridMap, NpcBehavior, actor, fighter, journal_entries};
use game_core::{
    Action, BumpAction, Direction, EntityId, GameEngine, GameState, Impossible, MoveAction,
    Position, WaitAction,
};

fn engine_with_npcs(npcs: Vec<game_core::ActorState>) -> GameEngine {
    let mut state = GameState::new(actor(0, "player", 1, 1, fighter(30, 5, 2)));
    state.entities.npcs = npcs;
    GameEngine::new(state)
}

#[test]
fn failed_action_runs_no_enemy_pass_and_no_fov() {
    let fixture = Fixture::new(GridMap::open(4, 4).wall(2, 1), NpcBehavior::Wait);
    let mut engine = engine_with_npcs(vec![actor(1, "orc", 3, 3, fighter(10, 3, 0))]);

    let result = engine.player_turn(
        &fixture.env(),
        &Action::Move(MoveAction::new(EntityId::PLAYER, Direction::East)),
    );

    assert_eq!(result, Err(Impossible::BlockedTile));
    assert_eq!(engine.state().turn.completed, 0);
    assert!(journal_entries(&fixture.journal).is_empty());
    assert!(engine.state().visibility.visible.is_empty());
}

#[test]
fn successful_action_runs_enemies_then_fov() {
    let fixture = Fixture::new(GridMap::open(6, 6), NpcBehavior::Wait);
    let mut engine = engine_with_npcs(vec![
        actor(1, "orc", 4, 4, fighter(10, 3, 0)),
        actor(2, "troll", 5, 5, fighter(16, 4, 1)),
    ]);

    engine
        .player_turn(
            &fixture.env(),
            &Action::Move(MoveAction::new(EntityId::PLAYER, Direction::East)),
        )
        .unwrap();

    assert_eq!(engine.state().turn.completed, 1);
    assert_eq!(
        journal_entries(&fixture.journal),
        ["npc:#1", "npc:#2", "fov@2,1"]
    );
    assert!(engine.state().visibility.is_visible(Position::new(0, 0)));
}

#[test]
fn dead_npcs_take_no_turns() {
    let fixture = Fixture::new(GridMap::open(6, 6), NpcBehavior::Wait);
    let mut corpse = actor(1, "orc", 4, 4, fighter(10, 3, 0));
    corpse.fighter.hp = 0;
    let mut engine = engine_with_npcs(vec![corpse, actor(2, "troll", 5, 5, fighter(16, 4, 1))]);

    engine
        .player_turn(
            &fixture.env(),
            &Action::Wait(WaitAction::new(EntityId::PLAYER)),
        )
        .unwrap();

    assert_eq!(journal_entries(&fixture.journal), ["npc:#2", "fov@1,1"]);
}

#[test]
fn npc_impossible_actions_are_swallowed() {
    // Every NPC tries to walk east into a wall; the player's turn still
    // completes and visibility still refreshes.
    let fixture = Fixture::new(GridMap::open(6, 6).wall(5, 4), NpcBehavior::MoveEast);
    let mut engine = engine_with_npcs(vec![actor(1, "orc", 4, 4, fighter(10, 3, 0))]);

    engine
        .player_turn(
            &fixture.env(),
            &Action::Wait(WaitAction::new(EntityId::PLAYER)),
        )
        .unwrap();

    assert_eq!(engine.state().turn.completed, 1);
    assert_eq!(
        engine
            .state()
            .entities
            .actor(game_core::EntityId(1))
            .unwrap()
            .position,
        Position::new(4, 4)
    );
    assert_eq!(journal_entries(&fixture.journal), ["npc:#1", "fov@1,1"]);
}

#[test]
fn adjacent_npc_attacks_during_the_enemy_pass() {
    let fixture = Fixture::new(GridMap::open(6, 6), NpcBehavior::AttackPlayer);
    let mut engine = engine_with_npcs(vec![actor(1, "orc", 2, 1, fighter(10, 3, 0))]);

    engine
        .player_turn(
            &fixture.env(),
            &Action::Wait(WaitAction::new(EntityId::PLAYER)),
        )
        .unwrap();

    // Orc power 3 against player defense 2.
    assert_eq!(engine.state().player().fighter.hp, 29);
    assert_eq!(
        engine.log().last().unwrap().text,
        "Orc attacks player for 1 hit points."
    );
}

#[test]
fn each_completed_turn_increments_the_counter() {
    let fixture = Fixture::new(GridMap::open(6, 6), NpcBehavior::Wait);
    let mut engine = engine_with_npcs(Vec::new());
    let env = fixture.env();

    for _ in 0..3 {
        engine
            .player_turn(&env, &Action::Wait(WaitAction::new(EntityId::PLAYER)))
            .unwrap();
    }
    let result = engine.player_turn(
        &env,
        &Action::Bump(BumpAction::new(EntityId::PLAYER, Direction::North)),
    );
    // y == 0 is the top edge; bumping north from (1, 1) moves, from (1, 0) fails.
    assert!(result.is_ok());
    let result = engine.player_turn(
        &env,
        &Action::Bump(BumpAction::new(EntityId::PLAYER, Direction::North)),
    );
    assert_eq!(result, Err(Impossible::OutOfBounds));
    assert_eq!(engine.state().turn.completed, 4);
}
