//! AttributeSet - Per-entity numeric stat bundle

use serde::{Deserialize, Serialize};

/// The stat bundle owned by a single entity.
///
/// All stats are non-negative integers. `health` is always kept inside
/// `[0, health_max]` by saturation; out-of-range inputs are clamped, never
/// rejected. Buffs may push `crit_chance` or `true_damage_ratio_pct` above
/// 100 while active - the damage resolver clamps those at read time so that
/// expiry can subtract the exact delta back out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeSet {
    /// Current health, `0 <= health <= health_max`
    pub health: i32,
    /// Maximum health
    pub health_max: i32,
    /// Base attack power
    pub attack: i32,
    /// Defense, as a percentage of normal damage mitigated
    pub defense: i32,
    /// Critical hit chance, percent [0, 100]
    pub crit_chance: i32,
    /// Damage multiplier applied on a critical hit (150 = 1.5x)
    pub crit_multiplier_pct: i32,
    /// Percentage of outgoing damage converted to true damage [0, 100]
    pub true_damage_ratio_pct: i32,
    /// Experience awarded when this entity is defeated (enemies)
    #[serde(default)]
    pub xp_reward: i32,
}

impl AttributeSet {
    /// Create a stat bundle at full health with no crit or conversion stats.
    pub fn new(health_max: i32, attack: i32, defense: i32) -> Self {
        AttributeSet {
            health: health_max.max(0),
            health_max: health_max.max(0),
            attack: attack.max(0),
            defense: defense.max(0),
            crit_chance: 0,
            crit_multiplier_pct: 100,
            true_damage_ratio_pct: 0,
            xp_reward: 0,
        }
    }

    /// Set crit chance and crit multiplier (builder style)
    pub fn with_crit(mut self, chance: i32, multiplier_pct: i32) -> Self {
        self.crit_chance = chance;
        self.crit_multiplier_pct = multiplier_pct;
        self
    }

    /// Set the true damage conversion ratio (builder style)
    pub fn with_true_damage_ratio(mut self, ratio_pct: i32) -> Self {
        self.true_damage_ratio_pct = ratio_pct;
        self
    }

    /// Set the xp reward for defeating this entity (builder style)
    pub fn with_xp_reward(mut self, xp: i32) -> Self {
        self.xp_reward = xp;
        self
    }

    /// Check if the entity is alive (health > 0)
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Subtract damage from health, clamped at 0.
    pub fn lose_health(&mut self, amount: i32) {
        self.health = (self.health - amount.max(0)).max(0);
    }

    /// Restore health, clamped at `health_max`.
    ///
    /// Returns the amount actually restored.
    pub fn heal(&mut self, amount: i32) -> i32 {
        let before = self.health;
        self.health = (self.health + amount.max(0)).min(self.health_max);
        self.health - before
    }

    /// Restore health to the maximum.
    pub fn heal_full(&mut self) {
        self.health = self.health_max;
    }

    /// Crit chance as read by the damage resolver, clamped to [0, 100].
    pub fn effective_crit_chance(&self) -> i32 {
        self.crit_chance.clamp(0, 100)
    }

    /// True damage conversion ratio as read by the damage resolver,
    /// clamped to [0, 100].
    pub fn effective_true_damage_ratio(&self) -> i32 {
        self.true_damage_ratio_pct.clamp(0, 100)
    }
}
