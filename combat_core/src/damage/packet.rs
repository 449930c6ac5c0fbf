//! DamagePacket - The output of outgoing damage calculation

use crate::attributes::AttributeSet;
use crate::damage::DamageAmount;
use crate::events::{CombatEvent, EventLog};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// The result of an entity generating an attack.
///
/// Guarantees `normal + true_damage >= 1` (an attack is never a no-op, even
/// at zero attack) and that the split is exact: nothing is lost to rounding
/// on either channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamagePacket {
    /// Damage on the normal channel (mitigated by target defense)
    pub normal: i32,
    /// Damage on the true channel (bypasses defense)
    pub true_damage: i32,
    /// Whether this attack rolled a critical hit
    pub is_critical: bool,
}

impl DamagePacket {
    /// Total damage across both channels
    pub fn total(&self) -> i32 {
        self.normal + self.true_damage
    }

    /// The packet as an incoming damage value
    pub fn amount(&self) -> DamageAmount {
        DamageAmount::Split {
            normal: self.normal,
            true_damage: self.true_damage,
        }
    }
}

/// Compute outgoing damage with a provided RNG (for deterministic testing).
///
/// Steps:
/// 1. base = attack + uniform jitter in `[0, jitter_max]` (0 for player
///    characters, 2 for generic enemies)
/// 2. crit roll: uniform in [0, 100) < crit chance scales the base by
///    `crit_multiplier_pct / 100` with integer truncation and emits a
///    `CriticalHit` event
/// 3. minimum-one-damage floor on the pre-split total
/// 4. split into (normal, true) by `true_damage_ratio_pct`, truncating the
///    true channel so the two channels sum back exactly
///
/// Crit and conversion stats are read from `attrib` at call time, so active
/// buffs are picked up without any caching.
pub fn compute_damage_with_rng(
    source: &str,
    attrib: &AttributeSet,
    jitter_max: i32,
    rng: &mut impl Rng,
    events: &mut EventLog,
) -> DamagePacket {
    let jitter = if jitter_max > 0 {
        rng.gen_range(0..=jitter_max)
    } else {
        0
    };
    let base = attrib.attack + jitter;

    let is_critical = rng.gen_range(0..100) < attrib.effective_crit_chance();
    let mut final_damage = if is_critical {
        events.push(CombatEvent::CriticalHit {
            source: source.to_string(),
        });
        mul_pct(base, attrib.crit_multiplier_pct)
    } else {
        base
    };

    // An attack is never a complete no-op.
    final_damage = final_damage.max(1);

    let true_damage = mul_pct(final_damage, attrib.effective_true_damage_ratio());
    let normal = final_damage - true_damage;

    DamagePacket {
        normal,
        true_damage,
        is_critical,
    }
}

/// Compute outgoing damage using the thread-local RNG.
pub fn compute_damage(source: &str, attrib: &AttributeSet, jitter_max: i32, events: &mut EventLog) -> DamagePacket {
    let mut rng = rand::thread_rng();
    compute_damage_with_rng(source, attrib, jitter_max, &mut rng, events)
}

/// `value * pct / 100` with integer truncation, widened to avoid overflow.
fn mul_pct(value: i32, pct: i32) -> i32 {
    ((value as i64 * pct as i64) / 100) as i32
}
