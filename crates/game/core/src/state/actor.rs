use super::common::{EntityId, Position};
use super::item::ItemState;

/// Combat block for an actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FighterState {
    pub hp: i32,
    pub max_hp: i32,
    pub power: i32,
    pub defense: i32,
}

impl FighterState {
    /// Starts at full health.
    pub fn new(max_hp: i32, power: i32, defense: i32) -> Self {
        Self {
            hp: max_hp,
            max_hp,
            power,
            defense,
        }
    }

    /// Restores hp up to the maximum, returning the amount actually
    /// recovered.
    pub fn heal(&mut self, amount: i32) -> i32 {
        let recovered = amount.min(self.max_hp - self.hp).max(0);
        self.hp += recovered;
        recovered
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.hp -= amount;
    }
}

/// Bounded, order-preserving item storage owned by exactly one actor.
///
/// `items.len() <= capacity` is checked at pickup time only; other
/// insertion paths are trusted.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryState {
    pub items: Vec<ItemState>,
    pub capacity: usize,
}

impl InventoryState {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::new(),
            capacity,
        }
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }
}

/// Complete actor state: identity, position, combat block, inventory.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorState {
    pub id: EntityId,
    pub name: String,
    pub position: Position,
    pub fighter: FighterState,
    pub inventory: InventoryState,
}

impl ActorState {
    pub fn new(
        id: EntityId,
        name: impl Into<String>,
        position: Position,
        fighter: FighterState,
        inventory: InventoryState,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            position,
            fighter,
            inventory,
        }
    }

    /// Quick check whether the actor is still alive. Dead actors stay in
    /// the entity set as remains but stop blocking and acting.
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.fighter.hp > 0
    }
}
