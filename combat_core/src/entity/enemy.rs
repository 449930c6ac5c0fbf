//! Enemy - generic opposing entity
//!
//! No AI and no leveling; an enemy is a stat bundle with an xp reward, an
//! optional loot drop and the small attack jitter generic enemies roll.

use super::Combatant;
use crate::attributes::AttributeSet;
use crate::config::EnemyConstants;
use crate::inventory::Item;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    pub name: String,
    /// Item dropped on defeat, if the loot roll succeeded
    #[serde(default)]
    pub loot: Option<Item>,
    /// Upper bound of the uniform damage jitter rolled on attack
    pub damage_jitter_max: i32,
    pub attrib: AttributeSet,
}

impl Enemy {
    /// Create an enemy with the default damage jitter.
    pub fn new(name: impl Into<String>, attrib: AttributeSet, loot: Option<Item>) -> Self {
        Enemy {
            name: name.into(),
            loot,
            damage_jitter_max: EnemyConstants::default().damage_jitter_max,
            attrib,
        }
    }

    /// Experience awarded for defeating this enemy.
    pub fn xp_reward(&self) -> i32 {
        self.attrib.xp_reward
    }

    /// Take the loot drop, leaving nothing behind.
    pub fn take_loot(&mut self) -> Option<Item> {
        self.loot.take()
    }
}

impl Combatant for Enemy {
    fn name(&self) -> &str {
        &self.name
    }

    fn attributes(&self) -> &AttributeSet {
        &self.attrib
    }

    fn attributes_mut(&mut self) -> &mut AttributeSet {
        &mut self.attrib
    }

    fn damage_jitter_max(&self) -> i32 {
        self.damage_jitter_max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loot_can_only_be_taken_once() {
        let mut enemy = Enemy::new(
            "goblin",
            AttributeSet::new(100, 5, 10).with_xp_reward(10),
            Some(Item::minor_healing_potion()),
        );
        assert!(enemy.take_loot().is_some());
        assert!(enemy.take_loot().is_none());
        assert_eq!(enemy.xp_reward(), 10);
    }

    #[test]
    fn test_default_jitter() {
        let enemy = Enemy::new("goblin", AttributeSet::new(100, 5, 10), None);
        assert_eq!(Combatant::damage_jitter_max(&enemy), 2);
    }
}
