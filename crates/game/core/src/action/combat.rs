use super::{ActionContext, ActionTransition, Direction, Impossible};
use crate::log::MessageColor;
use crate::state::EntityId;

/// Strikes the living actor one step away in the given direction.
///
/// Damage is `attacker.power - defender.defense` with no floor: a
/// non-positive result changes nothing and only the no-damage line is
/// logged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeleeAction {
    pub actor: EntityId,
    pub direction: Direction,
}

impl MeleeAction {
    pub fn new(actor: EntityId, direction: Direction) -> Self {
        Self { actor, direction }
    }
}

impl ActionTransition for MeleeAction {
    fn actor(&self) -> EntityId {
        self.actor
    }

    fn perform(&self, ctx: &mut ActionContext<'_>) -> Result<(), Impossible> {
        let (origin, power, attacker_name) = {
            let attacker = ctx.actor(self.actor);
            (
                attacker.position,
                attacker.fighter.power,
                capitalized(&attacker.name),
            )
        };
        let destination = self.direction.step_from(origin);

        let Some(target) = ctx.state.entities.actor_at(destination) else {
            return Err(Impossible::NothingToAttack);
        };
        let target_id = target.id;
        let damage = power - target.fighter.defense;
        let attack_desc = format!("{attacker_name} attacks {}", target.name);

        let color = if self.actor.is_player() {
            MessageColor::PlayerAttack
        } else {
            MessageColor::EnemyAttack
        };

        if damage > 0 {
            ctx.log
                .add(format!("{attack_desc} for {damage} hit points."), color);
            ctx.actor_mut(target_id).fighter.take_damage(damage);
        } else {
            ctx.log
                .add(format!("{attack_desc} but does no damage."), color);
        }
        Ok(())
    }
}

/// First letter upper-cased; actor names are stored lower-case.
fn capitalized(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
