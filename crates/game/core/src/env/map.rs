use crate::state::Position;

bitflags::bitflags! {
    /// Per-tile capability flags.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct TileFlags: u8 {
        /// Actors may occupy the tile.
        const WALKABLE = 1 << 0;
        /// Sight lines pass through the tile.
        const TRANSPARENT = 1 << 1;
    }
}

/// Canonical terrain classes for static map tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TerrainKind {
    Floor,
    Wall,
}

impl TerrainKind {
    pub fn flags(self) -> TileFlags {
        match self {
            TerrainKind::Floor => TileFlags::WALKABLE | TileFlags::TRANSPARENT,
            TerrainKind::Wall => TileFlags::empty(),
        }
    }
}

/// Immutable descriptor for a tile in the static layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StaticTile {
    flags: TileFlags,
}

impl StaticTile {
    pub const fn new(flags: TileFlags) -> Self {
        Self { flags }
    }

    pub fn of(terrain: TerrainKind) -> Self {
        Self::new(terrain.flags())
    }

    pub fn is_walkable(self) -> bool {
        self.flags.contains(TileFlags::WALKABLE)
    }

    pub fn is_transparent(self) -> bool {
        self.flags.contains(TileFlags::TRANSPARENT)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub width: u32,
    pub height: u32,
}

impl MapDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }
}

/// Static map oracle exposing immutable layout information. Pure queries;
/// entity occupancy is state, not geometry, and lives on the entity set.
pub trait MapOracle {
    fn dimensions(&self) -> MapDimensions;

    fn tile(&self, position: Position) -> Option<StaticTile>;

    fn in_bounds(&self, position: Position) -> bool {
        self.dimensions().contains(position)
    }

    /// Tile-level walkability; out-of-bounds cells are never walkable.
    fn is_walkable(&self, position: Position) -> bool {
        self.tile(position).is_some_and(StaticTile::is_walkable)
    }

    /// Tile-level sight transparency; out-of-bounds cells are opaque.
    fn is_transparent(&self, position: Position) -> bool {
        self.tile(position).is_some_and(StaticTile::is_transparent)
    }
}
