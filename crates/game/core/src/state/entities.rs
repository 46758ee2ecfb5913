use super::actor::ActorState;
use super::common::{EntityId, Position};
use super::item::ItemState;

/// Every entity currently tracked by the session: the player, the NPCs,
/// and the items lying on the map. Items held by an actor live in that
/// actor's inventory, not here.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntitiesState {
    pub player: ActorState,
    pub npcs: Vec<ActorState>,
    pub items: Vec<ItemState>,
}

impl EntitiesState {
    pub fn new(player: ActorState) -> Self {
        Self {
            player,
            npcs: Vec::new(),
            items: Vec::new(),
        }
    }

    /// Looks up an actor (player or NPC) by id.
    pub fn actor(&self, id: EntityId) -> Option<&ActorState> {
        self.actors().find(|actor| actor.id == id)
    }

    pub fn actor_mut(&mut self, id: EntityId) -> Option<&mut ActorState> {
        if self.player.id == id {
            return Some(&mut self.player);
        }
        self.npcs.iter_mut().find(|actor| actor.id == id)
    }

    /// All actors, player first.
    pub fn actors(&self) -> impl Iterator<Item = &ActorState> {
        std::iter::once(&self.player).chain(self.npcs.iter())
    }

    /// Living actor occupying the cell, if any.
    pub fn actor_at(&self, position: Position) -> Option<&ActorState> {
        self.actors()
            .find(|actor| actor.is_alive() && actor.position == position)
    }

    /// Entity preventing movement into the cell. Living actors block;
    /// items and remains do not.
    pub fn blocking_entity_at(&self, position: Position) -> Option<EntityId> {
        self.actor_at(position).map(|actor| actor.id)
    }

    /// Map-owned item lying on the cell, if any.
    pub fn item_at(&self, position: Position) -> Option<&ItemState> {
        self.items
            .iter()
            .find(|item| item.position == Some(position))
    }

    /// Removes and returns the map-owned item at the cell. The single
    /// ownership transfer point for pickups.
    pub fn take_item_at(&mut self, position: Position) -> Option<ItemState> {
        let index = self
            .items
            .iter()
            .position(|item| item.position == Some(position))?;
        Some(self.items.remove(index))
    }
}
