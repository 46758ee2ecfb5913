//! Shared fixtures: a tiny grid map and recording collaborators.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use game_core::{
    Action, ActorState, ConsumableKind, Direction, EntityId, FighterState, GameEnv, GameState,
    InventoryState, ItemState, MapDimensions, MapOracle, MeleeAction, NpcPolicy, Position,
    StaticTile, TerrainKind, VisionOracle, WaitAction,
};

/// Rectangular all-floor map with individually placed wall cells.
pub struct GridMap {
    width: u32,
    height: u32,
    walls: Vec<Position>,
}

impl GridMap {
    pub fn open(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            walls: Vec::new(),
        }
    }

    pub fn wall(mut self, x: i32, y: i32) -> Self {
        self.walls.push(Position::new(x, y));
        self
    }
}

impl MapOracle for GridMap {
    fn dimensions(&self) -> MapDimensions {
        MapDimensions::new(self.width, self.height)
    }

    fn tile(&self, position: Position) -> Option<StaticTile> {
        if !self.dimensions().contains(position) {
            return None;
        }
        let terrain = if self.walls.contains(&position) {
            TerrainKind::Wall
        } else {
            TerrainKind::Floor
        };
        Some(StaticTile::of(terrain))
    }
}

/// Call journal shared by the recording collaborators, so tests can assert
/// the relative order of the enemy pass and the visibility refresh.
pub type Journal = Rc<RefCell<Vec<String>>>;

pub fn journal() -> Journal {
    Rc::new(RefCell::new(Vec::new()))
}

pub fn journal_entries(journal: &Journal) -> Vec<String> {
    journal.borrow().clone()
}

/// Vision stub: records each refresh and reports every in-bounds cell
/// visible.
pub struct RecordingVision {
    pub journal: Journal,
}

impl VisionOracle for RecordingVision {
    fn visible_from(
        &self,
        map: &dyn MapOracle,
        origin: Position,
        _radius: u32,
    ) -> BTreeSet<Position> {
        self.journal
            .borrow_mut()
            .push(format!("fov@{},{}", origin.x, origin.y));

        let dimensions = map.dimensions();
        (0..dimensions.height as i32)
            .flat_map(|y| (0..dimensions.width as i32).map(move |x| Position::new(x, y)))
            .collect()
    }
}

/// What the scripted policy makes each NPC do.
#[derive(Clone, Copy)]
pub enum NpcBehavior {
    Wait,
    /// Melee toward the player; assumes adjacency in the fixture layout.
    AttackPlayer,
    /// Step east regardless of legality.
    MoveEast,
}

/// Policy stub: records which NPCs were asked and follows one behavior.
pub struct ScriptedPolicy {
    pub journal: Journal,
    pub behavior: NpcBehavior,
}

impl NpcPolicy for ScriptedPolicy {
    fn decide(&self, npc: EntityId, state: &GameState, _map: &dyn MapOracle) -> Action {
        self.journal.borrow_mut().push(format!("npc:{npc}"));

        match self.behavior {
            NpcBehavior::Wait => Action::Wait(WaitAction::new(npc)),
            NpcBehavior::MoveEast => {
                Action::Move(game_core::MoveAction::new(npc, Direction::East))
            }
            NpcBehavior::AttackPlayer => {
                let actor = state.entities.actor(npc).expect("scripted npc exists");
                let player = state.player();
                let dx = player.position.x - actor.position.x;
                let dy = player.position.y - actor.position.y;
                match Direction::from_delta(dx, dy) {
                    Some(direction) => Action::Melee(MeleeAction::new(npc, direction)),
                    None => Action::Wait(WaitAction::new(npc)),
                }
            }
        }
    }
}

/// Bundles the collaborators so a test can borrow one `GameEnv`.
pub struct Fixture {
    pub map: GridMap,
    pub vision: RecordingVision,
    pub policy: ScriptedPolicy,
    pub journal: Journal,
}

impl Fixture {
    pub fn new(map: GridMap, behavior: NpcBehavior) -> Self {
        let journal = journal();
        Self {
            map,
            vision: RecordingVision {
                journal: journal.clone(),
            },
            policy: ScriptedPolicy {
                journal: journal.clone(),
                behavior,
            },
            journal,
        }
    }

    pub fn env(&self) -> GameEnv<'_> {
        GameEnv::new(&self.map, &self.vision, &self.policy)
    }
}

pub fn fighter(max_hp: i32, power: i32, defense: i32) -> FighterState {
    FighterState::new(max_hp, power, defense)
}

pub fn actor(id: u32, name: &str, x: i32, y: i32, fighter: FighterState) -> ActorState {
    ActorState::new(
        EntityId(id),
        name,
        Position::new(x, y),
        fighter,
        InventoryState::with_capacity(3),
    )
}

pub fn potion(id: u32, x: i32, y: i32) -> ItemState {
    ItemState::new(
        EntityId(id),
        "healing potion",
        Position::new(x, y),
        ConsumableKind::Healing { amount: 4 },
    )
}
