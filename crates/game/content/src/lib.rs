//! Concrete collaborators for the turn-resolution rules.
//!
//! `game-content` supplies the implementations the core only specifies as
//! traits: a tile-grid map, a line-of-sight field-of-view computer, a
//! minimal hostile NPC policy, and the named spawn templates used by the
//! bundled scenario. Everything here stays deliberately thin; the rules
//! live in `game-core`.
mod map;
mod policy;
mod vision;

pub mod spawn;

pub use map::FloorMap;
pub use policy::BasicHostile;
pub use vision::RadiusVision;
