//! Integration test: a full seeded encounter
//!
//! Drives the whole engine end to end: buffs, dual-channel attacks, bleed
//! ticks, enemy defeat, loot pickup and the xp grant.

use combat_core::config::{goblin_grunt, goblin_mage, GameConstants, ScalingMultipliers};
use combat_core::effect::{hunters_focus, war_shield};
use combat_core::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn make_hero() -> Character {
    Character::new(
        "Aria",
        AttributeSet::new(120, 15, 10)
            .with_crit(10, 150)
            .with_true_damage_ratio(20),
        GrowthRates {
            health: 20,
            attack: 3,
            defense: 2,
        },
    )
}

#[test]
fn test_full_encounter() {
    let constants = GameConstants::default();
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut events = EventLog::new();

    let mut hero = make_hero();
    let mut goblin = goblin_grunt(&ScalingMultipliers::default(), &mut rng);
    let baseline_defense = hero.attrib.defense;

    hero.apply_effect(war_shield(&constants.effects), &mut events);
    assert_eq!(
        hero.attrib.defense,
        baseline_defense + constants.effects.war_shield_defense_bonus
    );

    let mut turns = 0;
    while goblin.attributes().is_alive() {
        let result = resolve_attack(&hero, &mut goblin, &mut rng, &mut events);
        assert_eq!(
            result.packet.normal + result.packet.true_damage,
            result.packet.total()
        );
        assert!(result.total_applied >= 1);

        if goblin.attributes().is_alive() {
            let counter = resolve_attack(&goblin, &mut hero, &mut rng, &mut events);
            assert!(counter.total_applied >= 1);
            assert!(hero.attrib.health >= 0);
        }

        end_of_turn(&mut hero, &mut events);
        turns += 1;
        assert!(turns < 100, "encounter did not terminate");
    }

    // Buff ran out during the fight and reversed exactly.
    assert_eq!(hero.attrib.defense, baseline_defense);
    assert!(events.contains(|e| matches!(e, CombatEvent::EffectExpired { .. })));

    // Defeat: loot and experience.
    if let Some(item) = goblin.take_loot() {
        hero.collect_item(item, &mut events);
        assert_eq!(hero.inventory.len(), 1);
    }
    let xp = goblin.xp_reward();
    assert_eq!(xp, 10);
    grant_xp(&mut hero, xp, &mut events);
    assert_eq!(hero.xp, 10);
    assert_eq!(hero.level, 1);
}

#[test]
fn test_mage_true_damage_ignores_war_shield() {
    let constants = GameConstants::default();
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut events = EventLog::new();

    let mut hero = make_hero();
    hero.apply_effect(war_shield(&constants.effects), &mut events);
    let mage = goblin_mage(&ScalingMultipliers::default(), &mut rng);

    let result = resolve_attack(&mage, &mut hero, &mut rng, &mut events);

    // A quarter of the mage's damage arrives on the true channel untouched.
    assert!(result.packet.true_damage >= 1);
    assert!(result.total_applied >= result.packet.true_damage + 1);
}

#[test]
fn test_hunters_focus_raises_crit_for_its_duration() {
    let constants = GameConstants::default();
    let mut events = EventLog::new();

    let mut hero = make_hero();
    let base_crit = hero.attrib.crit_chance;
    let base_mult = hero.attrib.crit_multiplier_pct;

    hero.apply_effect(hunters_focus(&constants.effects), &mut events);
    assert_eq!(hero.attrib.crit_chance, base_crit + 20);
    assert_eq!(hero.attrib.crit_multiplier_pct, base_mult + 50);

    end_of_turn(&mut hero, &mut events);
    end_of_turn(&mut hero, &mut events);
    assert_eq!(hero.attrib.crit_chance, base_crit);
    assert_eq!(hero.attrib.crit_multiplier_pct, base_mult);
}

#[test]
fn test_bleed_runs_alongside_buffs() {
    let mut events = EventLog::new();
    let mut hero = make_hero();
    let constants = GameConstants::default();

    hero.apply_effect(war_shield(&constants.effects), &mut events);
    hero.apply_bleed(10, 3, &mut events);
    let health_before = hero.attrib.health;

    let mut bleed_total = 0;
    for _ in 0..4 {
        bleed_total += end_of_turn(&mut hero, &mut events);
    }

    // Bleed bypasses the shield entirely.
    assert_eq!(bleed_total, 30);
    assert_eq!(hero.attrib.health, health_before - 30);
    assert!(hero.effects.is_empty());
    assert!(events.contains(|e| matches!(e, CombatEvent::BleedEnded { .. })));
}

#[test]
fn test_defeating_mage_levels_a_seasoned_hero() {
    let mut events = EventLog::new();
    let mut hero = make_hero();
    hero.xp = 95;

    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mage = goblin_mage(
        &ScalingMultipliers {
            xp: 1.0,
            ..Default::default()
        },
        &mut rng,
    );

    grant_xp(&mut hero, mage.xp_reward(), &mut events);
    assert_eq!(hero.level, 2);
    assert_eq!(hero.xp, 5);
    assert_eq!(hero.attrib.health, hero.attrib.health_max);
    assert!(events.contains(|e| matches!(e, CombatEvent::LevelUp { level: 2, .. })));
}
