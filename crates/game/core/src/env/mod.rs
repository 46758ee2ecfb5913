//! Collaborator traits describing the services the rules consume.
//!
//! The map oracle exposes static geometry, the vision oracle computes
//! fields of view, and the NPC policy decides enemy actions. The
//! [`GameEnv`] aggregate bundles them so the engine can reach everything
//! it needs without hard coupling to concrete implementations.
mod map;
mod npc;
mod vision;

pub use map::{MapDimensions, MapOracle, StaticTile, TerrainKind, TileFlags};
pub use npc::NpcPolicy;
pub use vision::VisionOracle;

/// Aggregates the read-only collaborators required by the engine and the
/// session loop. The whole stack is single-threaded, so plain shared
/// references suffice.
#[derive(Clone, Copy)]
pub struct GameEnv<'a> {
    map: &'a dyn MapOracle,
    vision: &'a dyn VisionOracle,
    npcs: &'a dyn NpcPolicy,
}

impl<'a> GameEnv<'a> {
    pub fn new(
        map: &'a dyn MapOracle,
        vision: &'a dyn VisionOracle,
        npcs: &'a dyn NpcPolicy,
    ) -> Self {
        Self { map, vision, npcs }
    }

    pub fn map(&self) -> &'a dyn MapOracle {
        self.map
    }

    pub fn vision(&self) -> &'a dyn VisionOracle {
        self.vision
    }

    pub fn npcs(&self) -> &'a dyn NpcPolicy {
        self.npcs
    }
}
