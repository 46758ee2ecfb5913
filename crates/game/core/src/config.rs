/// Compile-time gameplay constants shared across the workspace.
pub struct GameConfig;

impl GameConfig {
    /// Default bound for actor inventories.
    pub const DEFAULT_INVENTORY_CAPACITY: usize = 26;

    /// Radius used when refreshing the player's field of view.
    pub const FOV_RADIUS: u32 = 8;

    /// Entries retained by the in-game message log before old ones fall off.
    pub const MESSAGE_LOG_CAPACITY: usize = 100;
}
