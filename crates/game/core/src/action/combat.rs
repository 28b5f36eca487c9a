use crate::env::rng::context;
use crate::env::{Journal, RngState};
use crate::error::{ErrorSeverity, GameError};
use crate::state::{EntityId, EntityRegistry};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CombatError {
    #[error("entity {0} is not a creature")]
    NotCreature(EntityId),
}

impl GameError for CombatError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotCreature(_) => "COMBAT_NOT_CREATURE",
        }
    }
}

/// Result of a single resolved attack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttackOutcome {
    pub attacker: EntityId,
    pub defender: EntityId,
    pub damage: i32,
    /// Defender health after the hit; may be zero or negative.
    pub remaining_health: i32,
    /// The defender was removed from the registry.
    pub killed: bool,
}

/// Resolves one attack between two creatures.
///
/// Damage is uniform in `[0, attacker.attack)`. A defender left with
/// health ≤ 0 is destroyed before returning. Either participant lacking a
/// creature payload makes the call a no-op.
pub fn attack(
    registry: &mut EntityRegistry,
    rng: &mut RngState,
    journal: &mut dyn Journal,
    attacker: EntityId,
    defender: EntityId,
) -> Result<AttackOutcome, CombatError> {
    let (attacker_name, attack_stat) = registry
        .creature(attacker)
        .map(|c| (c.name.clone(), c.attack))
        .ok_or(CombatError::NotCreature(attacker))?;
    if !registry.is_creature(defender) {
        return Err(CombatError::NotCreature(defender));
    }

    let bound = u32::try_from(attack_stat).unwrap_or(0);
    let damage = rng.roll_below(attacker, context::DAMAGE, bound) as i32;

    let target = registry
        .creature_mut(defender)
        .ok_or(CombatError::NotCreature(defender))?;
    target.health -= damage;
    let remaining_health = target.health;
    let defender_name = target.name.clone();

    journal.record(format!(
        "Attack: {attacker_name}({}) -> {defender_name}({}): {damage} damage",
        attacker.0, defender.0
    ));
    journal.announce(format!(
        "{attacker_name} attacked {defender_name} dealing {damage} points of damage"
    ));

    let killed = remaining_health <= 0;
    if killed {
        registry.destroy(defender);
    }

    Ok(AttackOutcome {
        attacker,
        defender,
        damage,
        remaining_health,
        killed,
    })
}
