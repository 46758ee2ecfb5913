//! Mutable world state: entities, visibility, and turn bookkeeping.
mod actor;
mod common;
mod entities;
mod item;

pub use actor::{ActorState, FighterState, InventoryState};
pub use common::{EntityId, Position};
pub use entities::EntitiesState;
pub use item::{ConsumableKind, ItemState};

use std::collections::BTreeSet;

/// Field-of-view bookkeeping for the player.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibilityState {
    /// Cells currently in view.
    pub visible: BTreeSet<Position>,

    /// Every cell that has ever been in view.
    pub explored: BTreeSet<Position>,
}

impl VisibilityState {
    /// Replaces the visible set and folds it into the explored set.
    pub fn refresh(&mut self, visible: BTreeSet<Position>) {
        self.explored.extend(visible.iter().copied());
        self.visible = visible;
    }

    pub fn is_visible(&self, position: Position) -> bool {
        self.visible.contains(&position)
    }

    pub fn is_explored(&self, position: Position) -> bool {
        self.explored.contains(&position)
    }
}

/// Turn bookkeeping. `completed` counts fully resolved player turns; an
/// action that fails its legality checks leaves it untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnState {
    pub completed: u64,
}

/// Complete mutable game state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub entities: EntitiesState,
    pub visibility: VisibilityState,
    pub turn: TurnState,
}

impl GameState {
    pub fn new(player: ActorState) -> Self {
        Self {
            entities: EntitiesState::new(player),
            visibility: VisibilityState::default(),
            turn: TurnState::default(),
        }
    }

    pub fn player(&self) -> &ActorState {
        &self.entities.player
    }

    pub fn player_mut(&mut self) -> &mut ActorState {
        &mut self.entities.player
    }
}
