//! Damage application and turn resolution

use super::result::CombatResult;
use crate::attributes::AttributeSet;
use crate::damage::DamageAmount;
use crate::effect;
use crate::entity::{Character, Combatant};
use crate::error::CombatError;
use crate::events::{CombatEvent, EventLog};
use rand::Rng;

/// Mitigate normal-channel damage against a defense percentage:
/// `max(1, normal - ceil(normal * defense / 100))`.
///
/// The floor guarantees a nonzero normal-channel hit always lands for at
/// least 1 point, so a high-defense target is never fully immune. It also
/// applies when `normal == 0` inside a nonzero split pair; only the exact
/// `(0, 0)` pair short-circuits to 0 (see `apply_damage`).
pub fn mitigate_normal(normal: i32, defense: i32) -> i32 {
    let absorbed = ceil_pct(normal, defense);
    (normal - absorbed).max(1)
}

/// `ceil(value * pct / 100)` widened to avoid overflow.
fn ceil_pct(value: i32, pct: i32) -> i32 {
    ((value as i64 * pct as i64 + 99) / 100) as i32
}

/// Apply an incoming damage value to a stat bundle.
///
/// Scalar damage is the legacy single-channel path: subtracted directly
/// with no mitigation and no floor. Split damage mitigates the normal
/// channel against defense and adds the true channel as-is. Returns the
/// total health cost; negative components are rejected.
pub fn apply_damage(
    attrib: &mut AttributeSet,
    target: &str,
    amount: DamageAmount,
    events: &mut EventLog,
) -> Result<i32, CombatError> {
    match amount {
        DamageAmount::Scalar { amount } => {
            if amount < 0 {
                return Err(CombatError::InvalidDamage {
                    reason: format!("scalar amount {amount} is negative"),
                });
            }
            attrib.lose_health(amount);
            Ok(amount)
        }
        DamageAmount::Split {
            normal,
            true_damage,
        } => {
            if normal < 0 || true_damage < 0 {
                return Err(CombatError::InvalidDamage {
                    reason: format!(
                        "split components ({normal}, {true_damage}) must be non-negative"
                    ),
                });
            }
            Ok(apply_split(attrib, target, normal, true_damage, events))
        }
    }
}

/// Split application path, components already validated.
pub(crate) fn apply_split(
    attrib: &mut AttributeSet,
    target: &str,
    normal: i32,
    true_damage: i32,
    events: &mut EventLog,
) -> i32 {
    // A fully empty hit costs nothing; the min-1 floor must not manufacture
    // a phantom point of damage out of (0, 0).
    if normal == 0 && true_damage == 0 {
        return 0;
    }

    let mitigated = mitigate_normal(normal, attrib.defense);
    let total = mitigated + true_damage;
    attrib.lose_health(total);

    events.push(CombatEvent::DamageApplied {
        target: target.to_string(),
        normal,
        mitigated,
        true_damage,
        total,
    });

    total
}

/// Resolve one attack: generate the attacker's damage packet and apply it
/// to the defender.
pub fn resolve_attack(
    attacker: &impl Combatant,
    defender: &mut impl Combatant,
    rng: &mut impl Rng,
    events: &mut EventLog,
) -> CombatResult {
    let packet = attacker.compute_outgoing_damage(rng, events);

    let defender_name = defender.name().to_string();
    let health_before = defender.attributes().health;

    let total_applied = apply_split(
        defender.attributes_mut(),
        &defender_name,
        packet.normal,
        packet.true_damage,
        events,
    );
    let mitigated_normal = total_applied - packet.true_damage;

    let health_after = defender.attributes().health;
    CombatResult {
        attacker: attacker.name().to_string(),
        defender: defender_name,
        packet,
        mitigated_normal,
        total_applied,
        health_before,
        health_after,
        is_killing_blow: health_before > 0 && health_after == 0,
    }
}

/// End-of-turn bookkeeping for a character: tick every active effect once,
/// after all damage for the turn has resolved.
///
/// Returns the damage dealt by damage-over-time effects this turn.
pub fn end_of_turn(character: &mut Character, events: &mut EventLog) -> i32 {
    let name = character.name.clone();
    let Character {
        ref mut effects,
        ref mut attrib,
        ..
    } = *character;
    effect::tick_effects(effects, attrib, &name, events)
}
