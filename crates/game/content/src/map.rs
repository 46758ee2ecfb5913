use game_core::{MapDimensions, MapOracle, Position, StaticTile, TerrainKind};

/// Rectangular tile grid backing the static map oracle.
///
/// Built by filling with one terrain and carving/painting cells on top;
/// procedural generation is a separate concern and does not live here.
pub struct FloorMap {
    dimensions: MapDimensions,
    tiles: Vec<StaticTile>,
}

impl FloorMap {
    /// Grid of `width` x `height` filled with the given terrain.
    pub fn filled(width: u32, height: u32, terrain: TerrainKind) -> Self {
        let dimensions = MapDimensions::new(width, height);
        Self {
            dimensions,
            tiles: vec![StaticTile::of(terrain); (width * height) as usize],
        }
    }

    fn index(&self, position: Position) -> Option<usize> {
        if !self.dimensions.contains(position) {
            return None;
        }
        Some((position.y as u32 * self.dimensions.width + position.x as u32) as usize)
    }

    /// Repaints a single cell; out-of-bounds positions are ignored.
    pub fn set_terrain(&mut self, position: Position, terrain: TerrainKind) {
        if let Some(index) = self.index(position) {
            self.tiles[index] = StaticTile::of(terrain);
        }
    }

    /// Repaints every cell in the inclusive rectangle spanned by the two
    /// corners.
    pub fn fill_rect(&mut self, from: Position, to: Position, terrain: TerrainKind) {
        for y in from.y.min(to.y)..=from.y.max(to.y) {
            for x in from.x.min(to.x)..=from.x.max(to.x) {
                self.set_terrain(Position::new(x, y), terrain);
            }
        }
    }
}

impl MapOracle for FloorMap {
    fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    fn tile(&self, position: Position) -> Option<StaticTile> {
        self.index(position).map(|index| self.tiles[index])
    }
}
