use super::{ActionContext, ActionTransition, Impossible};
use crate::state::EntityId;

/// Actor passes the turn without doing anything. Always legal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaitAction {
    pub actor: EntityId,
}

impl WaitAction {
    pub fn new(actor: EntityId) -> Self {
        Self { actor }
    }
}

impl ActionTransition for WaitAction {
    fn actor(&self) -> EntityId {
        self.actor
    }

    fn perform(&self, _ctx: &mut ActionContext<'_>) -> Result<(), Impossible> {
        Ok(())
    }
}
