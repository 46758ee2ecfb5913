use std::collections::BTreeSet;

use game_core::{MapOracle, Position, VisionOracle};

/// Symmetric line-of-sight field of view.
///
/// A cell is visible when it lies within the radius (Euclidean) and every
/// cell on the grid line toward it, excluding the endpoint itself, is
/// transparent. The origin is always visible.
pub struct RadiusVision;

impl VisionOracle for RadiusVision {
    fn visible_from(
        &self,
        map: &dyn MapOracle,
        origin: Position,
        radius: u32,
    ) -> BTreeSet<Position> {
        let mut visible = BTreeSet::new();
        let radius = radius as i32;

        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy > radius * radius {
                    continue;
                }
                let target = origin.translated(dx, dy);
                if !map.in_bounds(target) {
                    continue;
                }
                if line_is_clear(map, origin, target) {
                    visible.insert(target);
                }
            }
        }

        visible.insert(origin);
        visible
    }
}

/// Walks the Bresenham line from `from` toward `to`; every intermediate
/// cell must be transparent for the endpoint to be seen.
fn line_is_clear(map: &dyn MapOracle, from: Position, to: Position) -> bool {
    let dx = (to.x - from.x).abs();
    let dy = -(to.y - from.y).abs();
    let sx = if from.x < to.x { 1 } else { -1 };
    let sy = if from.y < to.y { 1 } else { -1 };
    let mut err = dx + dy;
    let mut current = from;

    loop {
        if current == to {
            return true;
        }
        if current != from && !map.is_transparent(current) {
            return false;
        }
        let doubled = 2 * err;
        if doubled >= dy {
            err += dy;
            current.x += sx;
        }
        if doubled <= dx {
            err += dx;
            current.y += sy;
        }
    }
}
