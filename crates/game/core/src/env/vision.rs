use std::collections::BTreeSet;

use super::map::MapOracle;
use crate::state::Position;

/// Computes the set of cells visible from an origin.
///
/// Implementations own the line-of-sight strategy; the engine only
/// consumes the resulting set when it refreshes visibility after a
/// completed player turn.
pub trait VisionOracle {
    fn visible_from(
        &self,
        map: &dyn MapOracle,
        origin: Position,
        radius: u32,
    ) -> BTreeSet<Position>;
}
