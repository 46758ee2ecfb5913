use super::common::{EntityId, Position};

/// Consumable capability carried by an item.
///
/// A closed set; adding a variant forces every activation site to handle
/// it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConsumableKind {
    /// Restores hp to the consumer, up to their maximum.
    Healing { amount: i32 },
}

/// An item entity. Owned either by the map's entity set (`position` is
/// `Some`) or by exactly one actor's inventory (`position` is `None`),
/// never both.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemState {
    pub id: EntityId,
    pub name: String,
    pub position: Option<Position>,
    pub consumable: ConsumableKind,
}

impl ItemState {
    /// Creates an item placed on the map.
    pub fn new(
        id: EntityId,
        name: impl Into<String>,
        position: Position,
        consumable: ConsumableKind,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            position: Some(position),
            consumable,
        }
    }
}
