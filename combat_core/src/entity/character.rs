//! Character - the player-controlled entity

use super::Combatant;
use crate::attributes::AttributeSet;
use crate::effect::{self, Effect};
use crate::error::CombatError;
use crate::events::{CombatEvent, EventLog};
use crate::inventory::{Item, ItemKind};
use crate::progression::GrowthRates;
use serde::{Deserialize, Serialize};

/// A wired special ability: a flat damage payload the class implementation
/// provides. A character without one fails loudly when the ability is
/// invoked, so callers can tell "dealt 0" from "not implemented".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialAbility {
    pub name: String,
    /// Flat damage dealt when the ability fires
    pub damage: i32,
}

/// The player-controlled entity: stat bundle plus level, experience,
/// inventory and the active status-effect list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub level: i32,
    pub xp: i32,
    /// Per-level stat growth for this character's class
    pub growth: GrowthRates,
    #[serde(default)]
    pub inventory: Vec<Item>,
    #[serde(default)]
    pub effects: Vec<Effect>,
    #[serde(default)]
    pub ability: Option<SpecialAbility>,
    pub attrib: AttributeSet,
}

impl Character {
    /// Create a level-1 character with an empty inventory.
    pub fn new(name: impl Into<String>, attrib: AttributeSet, growth: GrowthRates) -> Self {
        Character {
            name: name.into(),
            level: 1,
            xp: 0,
            growth,
            inventory: Vec::new(),
            effects: Vec::new(),
            ability: None,
            attrib,
        }
    }

    /// Wire a special ability (builder style).
    pub fn with_ability(mut self, ability: SpecialAbility) -> Self {
        self.ability = Some(ability);
        self
    }

    /// Activate a status effect on this character.
    pub fn apply_effect(&mut self, effect: Effect, events: &mut EventLog) {
        effect::apply_effect(&mut self.effects, &mut self.attrib, &self.name, effect, events);
    }

    /// Apply (or overwrite) a bleed: unmitigated damage per turn for the
    /// given number of turns. Last application wins.
    pub fn apply_bleed(&mut self, damage_per_turn: i32, turns: u32, events: &mut EventLog) {
        self.apply_effect(effect::bleed(damage_per_turn, turns), events);
    }

    /// Invoke the special ability, if one is wired.
    pub fn special_ability(&self) -> Result<i32, CombatError> {
        match &self.ability {
            Some(ability) => Ok(ability.damage),
            None => Err(CombatError::AbilityNotImplemented {
                name: self.name.clone(),
            }),
        }
    }

    /// Add an item to the inventory.
    pub fn collect_item(&mut self, item: Item, events: &mut EventLog) {
        events.push(CombatEvent::ItemCollected {
            target: self.name.clone(),
            item: item.name.clone(),
        });
        self.inventory.push(item);
    }

    /// Use a consumable by name (case-insensitive). The item is removed and
    /// its healing applied, clamped to max health; returns the amount
    /// actually restored.
    pub fn use_item(&mut self, item_name: &str, events: &mut EventLog) -> Result<i32, CombatError> {
        let index = self
            .inventory
            .iter()
            .position(|item| item.name.eq_ignore_ascii_case(item_name))
            .ok_or_else(|| CombatError::ItemNotFound {
                name: item_name.to_string(),
            })?;

        let item = self.inventory.remove(index);
        let ItemKind::Consumable { restores_health } = item.kind;
        let healed = self.attrib.heal(restores_health);

        events.push(CombatEvent::ItemUsed {
            target: self.name.clone(),
            item: item.name,
            healed,
        });
        Ok(healed)
    }
}

impl Combatant for Character {
    fn name(&self) -> &str {
        &self.name
    }

    fn attributes(&self) -> &AttributeSet {
        &self.attrib
    }

    fn attributes_mut(&mut self) -> &mut AttributeSet {
        &mut self.attrib
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hero() -> Character {
        Character::new("hero", AttributeSet::new(100, 10, 5), GrowthRates::default())
    }

    #[test]
    fn test_use_item_heals_and_consumes() {
        let mut hero = hero();
        hero.attrib.health = 50;
        let mut events = EventLog::new();

        hero.collect_item(Item::minor_healing_potion(), &mut events);
        let healed = hero.use_item("minor healing potion", &mut events).unwrap();

        assert_eq!(healed, 25);
        assert_eq!(hero.attrib.health, 75);
        assert!(hero.inventory.is_empty());
        assert!(events.contains(|e| matches!(e, CombatEvent::ItemUsed { healed: 25, .. })));
    }

    #[test]
    fn test_use_item_healing_clamps_at_max() {
        let mut hero = hero();
        hero.attrib.health = 90;
        let mut events = EventLog::new();

        hero.collect_item(Item::minor_healing_potion(), &mut events);
        let healed = hero.use_item("Minor Healing Potion", &mut events).unwrap();

        assert_eq!(healed, 10);
        assert_eq!(hero.attrib.health, 100);
    }

    #[test]
    fn test_use_missing_item_fails() {
        let mut hero = hero();
        let mut events = EventLog::new();

        let result = hero.use_item("Elixir", &mut events);
        assert!(matches!(result, Err(CombatError::ItemNotFound { .. })));
    }

    #[test]
    fn test_unwired_special_ability_is_a_hard_failure() {
        let hero = hero();
        assert!(matches!(
            hero.special_ability(),
            Err(CombatError::AbilityNotImplemented { .. })
        ));
    }

    #[test]
    fn test_wired_special_ability_can_deal_zero() {
        let hero = hero().with_ability(SpecialAbility {
            name: "Feint".to_string(),
            damage: 0,
        });
        assert_eq!(hero.special_ability().unwrap(), 0);
    }
}
