//! Enemy roster presets - named stat bundles with scaling and loot rolls

use crate::attributes::AttributeSet;
use crate::entity::Enemy;
use crate::inventory::Item;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Difficulty scaling applied to a preset's base stats.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScalingMultipliers {
    #[serde(default = "default_mult")]
    pub health: f64,
    #[serde(default = "default_mult")]
    pub attack: f64,
    #[serde(default = "default_mult")]
    pub defense: f64,
    #[serde(default = "default_mult")]
    pub true_damage: f64,
    #[serde(default = "default_mult")]
    pub xp: f64,
}

impl Default for ScalingMultipliers {
    fn default() -> Self {
        ScalingMultipliers {
            health: 1.0,
            attack: 1.0,
            defense: 1.0,
            true_damage: 1.0,
            xp: 1.0,
        }
    }
}

fn default_mult() -> f64 {
    1.0
}

fn scale(base: i32, multiplier: f64) -> i32 {
    (base as f64 * multiplier) as i32
}

/// Roll a loot drop with the given chance.
fn roll_drop(rng: &mut impl Rng, chance: f64, item: Item) -> Option<Item> {
    if rng.gen::<f64>() < chance {
        Some(item)
    } else {
        None
    }
}

/// Baseline melee goblin. 50% chance to drop a minor healing potion.
pub fn goblin_grunt(mult: &ScalingMultipliers, rng: &mut impl Rng) -> Enemy {
    let loot = roll_drop(rng, 0.5, Item::minor_healing_potion());
    Enemy::new(
        "Goblin Grunt",
        AttributeSet::new(scale(100, mult.health), scale(5, mult.attack), scale(10, mult.defense))
            .with_xp_reward(scale(10, mult.xp)),
        loot,
    )
}

/// Ranged goblin, higher attack. 70% chance to drop a bandage.
pub fn goblin_archer(mult: &ScalingMultipliers, rng: &mut impl Rng) -> Enemy {
    let loot = roll_drop(rng, 0.7, Item::simple_bandage());
    Enemy::new(
        "Goblin Archer",
        AttributeSet::new(scale(100, mult.health), scale(10, mult.attack), scale(10, mult.defense))
            .with_xp_reward(scale(10, mult.xp)),
        loot,
    )
}

/// Caster goblin: hits hard and converts a quarter of its damage to the
/// true channel. 30% chance to drop a healing potion.
pub fn goblin_mage(mult: &ScalingMultipliers, rng: &mut impl Rng) -> Enemy {
    let loot = roll_drop(rng, 0.3, Item::healing_potion());
    Enemy::new(
        "Goblin Mage",
        AttributeSet::new(scale(100, mult.health), scale(20, mult.attack), scale(10, mult.defense))
            .with_true_damage_ratio(scale(25, mult.true_damage))
            .with_xp_reward(scale(10, mult.xp)),
        loot,
    )
}

/// Defensive goblin: low attack, doubled defense. 70% chance to drop a
/// bandage.
pub fn goblin_shieldbearer(mult: &ScalingMultipliers, rng: &mut impl Rng) -> Enemy {
    let loot = roll_drop(rng, 0.7, Item::simple_bandage());
    Enemy::new(
        "Goblin Shieldbearer",
        AttributeSet::new(scale(100, mult.health), scale(3, mult.attack), scale(20, mult.defense))
            .with_xp_reward(scale(10, mult.xp)),
        loot,
    )
}
