//! Deterministic turn-resolution rules for a grid-based roguelike.
//!
//! `game-core` defines the canonical rules (actions, turn sequencing, world
//! state) and exposes pure APIs that can be reused by any frontend. All
//! state mutation flows through [`engine::GameEngine`]; raw input reaches
//! the rules through the mode-conditioned handler in [`input`]. Rendering,
//! map generation, and the concrete terminal live behind the collaborator
//! traits in [`env`] and [`input`].
pub mod action;
pub mod config;
pub mod engine;
pub mod env;
pub mod input;
pub mod log;
pub mod state;

pub use action::{
    Action, ActionContext, ActionKind, ActionTransition, BumpAction, Direction, DropItemAction,
    Impossible, MeleeAction, MoveAction, PickupAction, UseItemAction, WaitAction,
};
pub use config::GameConfig;
pub use engine::GameEngine;
pub use env::{
    GameEnv, MapDimensions, MapOracle, NpcPolicy, StaticTile, TerrainKind, TileFlags, VisionOracle,
};
pub use input::{Disposition, EventHandler, EventSource, InputEvent, Key, Mode};
pub use log::{Message, MessageColor, MessageLog};
pub use state::{
    ActorState, ConsumableKind, EntitiesState, EntityId, FighterState, GameState, InventoryState,
    ItemState, Position, TurnState, VisibilityState,
};
