use super::combat::MeleeAction;
use super::{ActionContext, ActionTransition, Direction, Impossible};
use crate::state::EntityId;

/// Relocates the actor one step in a direction.
///
/// Legality is checked in a fixed order: map bounds, then tile
/// walkability, then entity occupancy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveAction {
    pub actor: EntityId,
    pub direction: Direction,
}

impl MoveAction {
    pub fn new(actor: EntityId, direction: Direction) -> Self {
        Self { actor, direction }
    }
}

impl ActionTransition for MoveAction {
    fn actor(&self) -> EntityId {
        self.actor
    }

    fn perform(&self, ctx: &mut ActionContext<'_>) -> Result<(), Impossible> {
        let origin = ctx.actor(self.actor).position;
        let destination = self.direction.step_from(origin);

        if !ctx.map.in_bounds(destination) {
            return Err(Impossible::OutOfBounds);
        }
        if !ctx.map.is_walkable(destination) {
            return Err(Impossible::BlockedTile);
        }
        if ctx.state.entities.blocking_entity_at(destination).is_some() {
            return Err(Impossible::BlockedEntity);
        }

        ctx.actor_mut(self.actor).position = destination;
        Ok(())
    }
}

/// Directional dispatch policy: attack when a living actor occupies the
/// destination, move otherwise. The only place that decides
/// attack-vs-move; failures surface from whichever delegate runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BumpAction {
    pub actor: EntityId,
    pub direction: Direction,
}

impl BumpAction {
    pub fn new(actor: EntityId, direction: Direction) -> Self {
        Self { actor, direction }
    }
}

impl ActionTransition for BumpAction {
    fn actor(&self) -> EntityId {
        self.actor
    }

    fn perform(&self, ctx: &mut ActionContext<'_>) -> Result<(), Impossible> {
        let origin = ctx.actor(self.actor).position;
        let destination = self.direction.step_from(origin);

        if ctx.state.entities.actor_at(destination).is_some() {
            MeleeAction::new(self.actor, self.direction).perform(ctx)
        } else {
            MoveAction::new(self.actor, self.direction).perform(ctx)
        }
    }
}
