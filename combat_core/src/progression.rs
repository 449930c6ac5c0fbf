//! Progression - experience accumulation and level-ups

use crate::entity::{Character, Combatant};
use crate::events::{CombatEvent, EventLog};
use serde::{Deserialize, Serialize};

/// Experience required to go from the start of `level` to `level + 1`.
const XP_PER_LEVEL: i32 = 100;

/// Per-level stat growth for a character class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthRates {
    #[serde(default)]
    pub health: i32,
    #[serde(default)]
    pub attack: i32,
    #[serde(default)]
    pub defense: i32,
}

/// Experience needed to leave the given level.
///
/// Linear formula (`level * 100`), with a defensive floor of one level's
/// worth for out-of-range input.
pub fn xp_required_for_level(level: i32) -> i32 {
    if level <= 0 {
        return XP_PER_LEVEL;
    }
    level * XP_PER_LEVEL
}

/// Grant experience and resolve any level-ups.
///
/// Non-positive grants are ignored. Level-up resolution loops: each pass
/// consumes the requirement for the level the character is currently at,
/// bumps the level, applies the class growth rates and fully heals, so one
/// large grant can produce several level-ups with the remainder carrying
/// forward.
pub fn grant_xp(character: &mut Character, amount: i32, events: &mut EventLog) {
    if amount <= 0 {
        return;
    }

    character.xp += amount;
    events.push(CombatEvent::XpGained {
        target: character.name.clone(),
        amount,
    });

    let mut required = xp_required_for_level(character.level);
    while character.xp >= required {
        character.xp -= required;
        character.level += 1;

        let growth = character.growth;
        let attrib = character.attributes_mut();
        attrib.health_max += growth.health;
        attrib.attack += growth.attack;
        attrib.defense += growth.defense;
        attrib.heal_full();

        events.push(CombatEvent::LevelUp {
            target: character.name.clone(),
            level: character.level,
        });

        required = xp_required_for_level(character.level);
    }
}
