//! Named stat blocks for the bundled scenario.

use game_core::{
    ActorState, ConsumableKind, EntityId, FighterState, GameConfig, InventoryState, ItemState,
    Position,
};

pub fn player(position: Position) -> ActorState {
    ActorState::new(
        EntityId::PLAYER,
        "player",
        position,
        FighterState::new(30, 5, 2),
        InventoryState::with_capacity(GameConfig::DEFAULT_INVENTORY_CAPACITY),
    )
}

pub fn orc(id: EntityId, position: Position) -> ActorState {
    ActorState::new(
        id,
        "orc",
        position,
        FighterState::new(10, 3, 0),
        InventoryState::with_capacity(0),
    )
}

pub fn troll(id: EntityId, position: Position) -> ActorState {
    ActorState::new(
        id,
        "troll",
        position,
        FighterState::new(16, 4, 1),
        InventoryState::with_capacity(0),
    )
}

pub fn healing_potion(id: EntityId, position: Position) -> ItemState {
    ItemState::new(
        id,
        "healing potion",
        position,
        ConsumableKind::Healing { amount: 4 },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn templates_match_their_stat_blocks() {
        let player = player(Position::new(1, 1));
        assert_eq!(player.fighter.hp, 30);
        assert_eq!(player.fighter.power, 5);
        assert_eq!(player.fighter.defense, 2);
        assert!(player.is_alive());

        let orc = orc(EntityId(1), Position::new(2, 2));
        assert_eq!((orc.fighter.hp, orc.fighter.power, orc.fighter.defense), (10, 3, 0));

        let troll = troll(EntityId(2), Position::new(3, 3));
        assert_eq!(
            (troll.fighter.hp, troll.fighter.power, troll.fighter.defense),
            (16, 4, 1)
        );

        let potion = healing_potion(EntityId(3), Position::new(4, 4));
        assert_eq!(potion.position, Some(Position::new(4, 4)));
        assert_eq!(potion.consumable, ConsumableKind::Healing { amount: 4 });
    }
}
