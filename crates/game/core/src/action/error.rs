/// Recoverable failure: an action's preconditions were not met.
///
/// Surfaced to the player through the message log by the session loop;
/// never terminates the process and never advances the turn. The display
/// forms are the user-facing messages. The three movement failures stay
/// distinct variants so the bounds → tile → entity check order remains
/// observable, even though they share one message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Impossible {
    /// Destination lies outside the map.
    #[error("That way is blocked.")]
    OutOfBounds,

    /// Destination tile is not walkable.
    #[error("That way is blocked.")]
    BlockedTile,

    /// A living entity occupies the destination.
    #[error("That way is blocked.")]
    BlockedEntity,

    #[error("Nothing to attack.")]
    NothingToAttack,

    #[error("There is nothing here to pick up.")]
    NothingHere,

    #[error("Your inventory is full.")]
    InventoryFull,

    #[error("You do not have that item.")]
    NoSuchItem,

    #[error("Your health is already full.")]
    HealthFull,
}
