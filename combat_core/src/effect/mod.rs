//! Status effect engine - timed stat buffs and damage-over-time
//!
//! One abstraction covers both mechanisms: a `StatBuff` carries an additive
//! `StatDelta` that is applied once on activation and subtracted exactly on
//! expiry, and a `DamageOverTime` deals unmitigated damage each turn it
//! survives. Both share the same activate / tick / expire lifecycle.

mod presets;
mod tick;

pub use presets::{arcane_transfusion, bleed, hunters_focus, war_shield};
pub use tick::{apply_effect, tick_effects};

use crate::attributes::AttributeSet;
use serde::{Deserialize, Serialize};

/// Additive stat modification made by a buff.
///
/// Deltas are additive and commutative: any set of active buffs can be
/// reversed in any order and the attribute returns to its exact pre-buff
/// baseline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatDelta {
    #[serde(default)]
    pub defense: i32,
    #[serde(default)]
    pub crit_chance: i32,
    #[serde(default)]
    pub crit_multiplier_pct: i32,
    #[serde(default)]
    pub true_damage_ratio_pct: i32,
}

impl StatDelta {
    /// Add this delta to a stat bundle (activation).
    pub fn apply_to(&self, attrib: &mut AttributeSet) {
        attrib.defense += self.defense;
        attrib.crit_chance += self.crit_chance;
        attrib.crit_multiplier_pct += self.crit_multiplier_pct;
        attrib.true_damage_ratio_pct += self.true_damage_ratio_pct;
    }

    /// Subtract this delta from a stat bundle (expiry). Exact inverse of
    /// `apply_to`.
    pub fn remove_from(&self, attrib: &mut AttributeSet) {
        attrib.defense -= self.defense;
        attrib.crit_chance -= self.crit_chance;
        attrib.crit_multiplier_pct -= self.crit_multiplier_pct;
        attrib.true_damage_ratio_pct -= self.true_damage_ratio_pct;
    }
}

/// What an effect does while active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EffectKind {
    /// Additive stat modification, reversed on expiry
    StatBuff { delta: StatDelta },
    /// Unmitigated damage dealt each turn; nothing to reverse on expiry
    DamageOverTime { damage_per_turn: i32 },
}

/// A timed effect instance attached to a character.
///
/// Lifecycle: created -> activated (delta applied once, instance appended to
/// the owner's list) -> decremented once per completed turn -> expired
/// (delta reversed, instance removed). Duration counts the turns the effect
/// survives, not turns before activation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Effect {
    /// Display name ("War Shield", "Bleed", ...)
    pub name: String,
    /// Turns this effect will still survive
    pub turns_remaining: u32,
    /// What the effect does
    pub kind: EffectKind,
}

impl Effect {
    /// Create a stat buff with the given duration.
    pub fn stat_buff(name: impl Into<String>, duration_turns: u32, delta: StatDelta) -> Self {
        Effect {
            name: name.into(),
            turns_remaining: duration_turns,
            kind: EffectKind::StatBuff { delta },
        }
    }

    /// Create a damage-over-time effect with the given duration.
    pub fn damage_over_time(name: impl Into<String>, duration_turns: u32, damage_per_turn: i32) -> Self {
        Effect {
            name: name.into(),
            turns_remaining: duration_turns,
            kind: EffectKind::DamageOverTime {
                damage_per_turn: damage_per_turn.max(0),
            },
        }
    }

    /// Whether the effect still has turns left.
    pub fn is_active(&self) -> bool {
        self.turns_remaining > 0
    }
}
