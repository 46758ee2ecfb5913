//! Action domain - a closed set of intents resolved against world state.
//!
//! Every intent an actor can attempt (wait, pick up, use or drop an item,
//! attack, move, bump) is one variant of [`Action`]. Each variant is a
//! transient value bound at construction to its acting entity and
//! parameters; resolving it either applies its side effects or fails with
//! the recoverable [`Impossible`] error, leaving the world untouched.
//!
//! # Module Structure
//!
//! - `error`: the [`Impossible`] failure class
//! - `direction`: the eight grid directions
//! - `wait`: pass the turn
//! - `movement`: relocation and the bump (move-or-attack) dispatch
//! - `combat`: melee resolution
//! - `inventory`: pickup, use-item, and drop transfers
mod combat;
mod direction;
mod error;
mod inventory;
mod movement;
mod wait;

pub use combat::MeleeAction;
pub use direction::Direction;
pub use error::Impossible;
pub use inventory::{DropItemAction, PickupAction, UseItemAction};
pub use movement::{BumpAction, MoveAction};
pub use wait::WaitAction;

use crate::env::MapOracle;
use crate::log::MessageLog;
use crate::state::{ActorState, EntityId, GameState};

/// Everything an action may read or mutate while resolving.
///
/// Bundling the collaborators keeps each action's dependencies explicit
/// instead of reaching the map or the log through back-pointers.
pub struct ActionContext<'a> {
    pub state: &'a mut GameState,
    pub map: &'a dyn MapOracle,
    pub log: &'a mut MessageLog,
}

impl ActionContext<'_> {
    /// Resolves the acting entity. Handlers and the enemy pass only build
    /// actions for entities present in the state, so a miss here is a
    /// state defect, not an [`Impossible`].
    pub fn actor(&self, id: EntityId) -> &ActorState {
        self.state
            .entities
            .actor(id)
            .unwrap_or_else(|| panic!("actor {id} missing from state"))
    }

    pub fn actor_mut(&mut self, id: EntityId) -> &mut ActorState {
        self.state
            .entities
            .actor_mut(id)
            .unwrap_or_else(|| panic!("actor {id} missing from state"))
    }
}

/// Defines how a concrete action variant resolves against the world.
pub trait ActionTransition {
    /// Entity performing this action.
    fn actor(&self) -> EntityId;

    /// Attempts the intent. Completes with its side effects applied, or
    /// fails with [`Impossible`] and no observable state change. Single
    /// use: callers must not perform one instance twice.
    fn perform(&self, ctx: &mut ActionContext<'_>) -> Result<(), Impossible>;
}

/// Fieldless action discriminant for dispatch tables and logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionKind {
    Wait,
    Pickup,
    UseItem,
    Drop,
    Melee,
    Move,
    Bump,
}

/// Top-level intent enum covering every action a handler can construct.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Wait(WaitAction),
    Pickup(PickupAction),
    UseItem(UseItemAction),
    Drop(DropItemAction),
    Melee(MeleeAction),
    Move(MoveAction),
    Bump(BumpAction),
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Wait(_) => ActionKind::Wait,
            Action::Pickup(_) => ActionKind::Pickup,
            Action::UseItem(_) => ActionKind::UseItem,
            Action::Drop(_) => ActionKind::Drop,
            Action::Melee(_) => ActionKind::Melee,
            Action::Move(_) => ActionKind::Move,
            Action::Bump(_) => ActionKind::Bump,
        }
    }
}

impl ActionTransition for Action {
    fn actor(&self) -> EntityId {
        match self {
            Action::Wait(action) => action.actor(),
            Action::Pickup(action) => action.actor(),
            Action::UseItem(action) => action.actor(),
            Action::Drop(action) => action.actor(),
            Action::Melee(action) => action.actor(),
            Action::Move(action) => action.actor(),
            Action::Bump(action) => action.actor(),
        }
    }

    fn perform(&self, ctx: &mut ActionContext<'_>) -> Result<(), Impossible> {
        match self {
            Action::Wait(action) => action.perform(ctx),
            Action::Pickup(action) => action.perform(ctx),
            Action::UseItem(action) => action.perform(ctx),
            Action::Drop(action) => action.perform(ctx),
            Action::Melee(action) => action.perform(ctx),
            Action::Move(action) => action.perform(ctx),
            Action::Bump(action) => action.perform(ctx),
        }
    }
}
