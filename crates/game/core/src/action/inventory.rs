use super::{ActionContext, ActionTransition, Impossible};
use crate::log::MessageColor;
use crate::state::{ActorState, ConsumableKind, EntityId, Position};

/// Picks up the item lying at the actor's own cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PickupAction {
    pub actor: EntityId,
}

impl PickupAction {
    pub fn new(actor: EntityId) -> Self {
        Self { actor }
    }
}

impl ActionTransition for PickupAction {
    fn actor(&self) -> EntityId {
        self.actor
    }

    fn perform(&self, ctx: &mut ActionContext<'_>) -> Result<(), Impossible> {
        let here = ctx.actor(self.actor).position;

        if ctx.state.entities.item_at(here).is_none() {
            return Err(Impossible::NothingHere);
        }
        if ctx.actor(self.actor).inventory.is_full() {
            return Err(Impossible::InventoryFull);
        }

        // One owner at a time: the map set gives the item up before the
        // inventory takes it.
        let mut item = ctx
            .state
            .entities
            .take_item_at(here)
            .ok_or(Impossible::NothingHere)?;
        item.position = None;
        let name = item.name.clone();
        ctx.actor_mut(self.actor).inventory.items.push(item);

        ctx.log
            .add(format!("You picked up the {name}!"), MessageColor::Info);
        Ok(())
    }
}

/// Applies an inventory item's consumable, aimed at a target cell.
///
/// The slot index crosses the UI boundary, so it is re-checked here; a
/// failure raised by the consumable propagates unchanged and leaves the
/// item in the inventory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UseItemAction {
    pub actor: EntityId,
    pub slot: usize,
    /// Cell the effect lands on; `None` means the actor's own cell.
    pub target: Option<Position>,
}

impl UseItemAction {
    pub fn new(actor: EntityId, slot: usize) -> Self {
        Self {
            actor,
            slot,
            target: None,
        }
    }

    pub fn targeted(actor: EntityId, slot: usize, target: Position) -> Self {
        Self {
            actor,
            slot,
            target: Some(target),
        }
    }

    /// Cell the effect resolves against.
    pub fn target_cell(&self, ctx: &ActionContext<'_>) -> Position {
        self.target.unwrap_or(ctx.actor(self.actor).position)
    }

    /// Living actor occupying the target cell, if any.
    pub fn target_actor<'s>(&self, ctx: &'s ActionContext<'_>) -> Option<&'s ActorState> {
        let cell = self.target_cell(ctx);
        ctx.state.entities.actor_at(cell)
    }
}

impl ActionTransition for UseItemAction {
    fn actor(&self) -> EntityId {
        self.actor
    }

    fn perform(&self, ctx: &mut ActionContext<'_>) -> Result<(), Impossible> {
        let item = ctx
            .actor(self.actor)
            .inventory
            .items
            .get(self.slot)
            .ok_or(Impossible::NoSuchItem)?;
        let consumable = item.consumable;
        let name = item.name.clone();

        consumable.activate(self, &name, ctx)?;

        // Consumed only after the effect resolved.
        ctx.actor_mut(self.actor).inventory.items.remove(self.slot);
        Ok(())
    }
}

impl ConsumableKind {
    /// Resolves the consumable's effect, reading actor/target/item through
    /// the invoking action.
    fn activate(
        self,
        action: &UseItemAction,
        item_name: &str,
        ctx: &mut ActionContext<'_>,
    ) -> Result<(), Impossible> {
        match self {
            ConsumableKind::Healing { amount } => {
                let fighter = &mut ctx.actor_mut(action.actor).fighter;
                if fighter.hp >= fighter.max_hp {
                    return Err(Impossible::HealthFull);
                }
                let recovered = fighter.heal(amount);
                ctx.log.add(
                    format!("You consume the {item_name}, and recover {recovered} HP!"),
                    MessageColor::Recovered,
                );
                Ok(())
            }
        }
    }
}

/// Returns an inventory item to the map at the actor's feet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DropItemAction {
    pub actor: EntityId,
    pub slot: usize,
}

impl DropItemAction {
    pub fn new(actor: EntityId, slot: usize) -> Self {
        Self { actor, slot }
    }
}

impl ActionTransition for DropItemAction {
    fn actor(&self) -> EntityId {
        self.actor
    }

    fn perform(&self, ctx: &mut ActionContext<'_>) -> Result<(), Impossible> {
        let here = ctx.actor(self.actor).position;

        let inventory = &mut ctx.actor_mut(self.actor).inventory;
        if self.slot >= inventory.items.len() {
            return Err(Impossible::NoSuchItem);
        }
        let mut item = inventory.items.remove(self.slot);
        item.position = Some(here);
        let name = item.name.clone();
        ctx.state.entities.items.push(item);

        ctx.log
            .add(format!("You dropped the {name}."), MessageColor::Info);
        Ok(())
    }
}
