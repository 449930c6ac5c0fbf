//! Class effect presets - the concrete buffs the character classes use

use super::{Effect, StatDelta};
use crate::attributes::AttributeSet;
use crate::config::EffectConstants;

/// Name shared by all bleed applications so a reapply overwrites.
const BLEED_EFFECT_NAME: &str = "Bleed";

/// Warrior: "War Shield" - flat defense bonus for the buff duration.
pub fn war_shield(constants: &EffectConstants) -> Effect {
    Effect::stat_buff(
        "War Shield",
        constants.buff_duration_turns,
        StatDelta {
            defense: constants.war_shield_defense_bonus,
            ..Default::default()
        },
    )
}

/// Mage: "Arcane Transfusion" - doubles the caster's effective true damage
/// conversion for the buff duration.
///
/// The delta is captured from the owner's ratio at cast time, so expiry
/// subtracts exactly what activation added even if other conversion buffs
/// come and go in between.
pub fn arcane_transfusion(owner: &AttributeSet, constants: &EffectConstants) -> Effect {
    Effect::stat_buff(
        "Arcane Transfusion",
        constants.buff_duration_turns,
        StatDelta {
            true_damage_ratio_pct: owner.true_damage_ratio_pct,
            ..Default::default()
        },
    )
}

/// Archer: "Hunter's Focus" - flat crit chance and crit damage bonus for
/// the buff duration.
pub fn hunters_focus(constants: &EffectConstants) -> Effect {
    Effect::stat_buff(
        "Hunter's Focus",
        constants.buff_duration_turns,
        StatDelta {
            crit_chance: constants.hunters_focus_crit_chance_bonus,
            crit_multiplier_pct: constants.hunters_focus_crit_multiplier_bonus,
            ..Default::default()
        },
    )
}

/// A bleed: unmitigated true damage each turn for a fixed number of turns.
pub fn bleed(damage_per_turn: i32, turns: u32) -> Effect {
    Effect::damage_over_time(BLEED_EFFECT_NAME, turns, damage_per_turn)
}
