//! Example battle - a seeded console encounter demonstrating combat_core
//!
//! Runs a hero through the goblin roster, printing the structured event
//! stream the engine emits. All randomness comes from one seeded RNG, so
//! the battle replays identically for a given seed.
//!
//! Usage: `example_battle [seed] [constants.toml]`

use combat_core::config::{
    goblin_archer, goblin_grunt, goblin_mage, goblin_shieldbearer, GameConstants,
    ScalingMultipliers,
};
use combat_core::effect::{hunters_focus, war_shield};
use combat_core::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn render(event: &CombatEvent) -> String {
    match event {
        CombatEvent::CriticalHit { source } => format!("{source} lands a critical hit!"),
        CombatEvent::DamageApplied {
            target,
            normal,
            mitigated,
            true_damage,
            total,
        } => format!(
            "{target} takes {total} damage (normal {normal} -> {mitigated}, true {true_damage})"
        ),
        CombatEvent::EffectApplied { target, effect } => format!("{target} gains {effect}"),
        CombatEvent::EffectExpired { target, effect } => {
            format!("{target}: {effect} wore off")
        }
        CombatEvent::BleedApplied {
            target,
            damage_per_turn,
            turns,
        } => format!("{target} is bleeding: {damage_per_turn}/turn for {turns} turns"),
        CombatEvent::BleedTick {
            target,
            damage,
            turns_remaining,
        } => format!("{target} bleeds for {damage} ({turns_remaining} turns left)"),
        CombatEvent::BleedEnded { target } => format!("{target}'s bleeding stops"),
        CombatEvent::XpGained { target, amount } => format!("{target} gains {amount} xp"),
        CombatEvent::LevelUp { target, level } => {
            format!("*** {target} reaches level {level}! ***")
        }
        CombatEvent::ItemCollected { target, item } => format!("{target} picks up {item}"),
        CombatEvent::ItemUsed {
            target,
            item,
            healed,
        } => format!("{target} uses {item} and recovers {healed} hp"),
    }
}

fn flush(events: &mut EventLog) {
    for event in events.drain() {
        println!("  {}", render(&event));
    }
}

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(42u64);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let constants = match std::env::args().nth(2) {
        Some(path) => GameConstants::load(std::path::Path::new(&path)).unwrap_or_else(|err| {
            eprintln!("failed to load constants from {path}: {err}");
            std::process::exit(1);
        }),
        None => GameConstants::default(),
    };
    let mut events = EventLog::new();

    let mut hero = Character::new(
        "Aria",
        AttributeSet::new(120, 15, 10)
            .with_crit(10, 150)
            .with_true_damage_ratio(20),
        GrowthRates {
            health: 20,
            attack: 3,
            defense: 2,
        },
    );

    let mult = ScalingMultipliers::default();
    let roster = [
        goblin_grunt(&mult, &mut rng),
        goblin_archer(&mult, &mut rng),
        goblin_shieldbearer(&mult, &mut rng),
        goblin_mage(&mult, &mut rng),
    ];

    println!("=== Battle (seed {seed}) ===");
    for mut enemy in roster {
        println!("\n--- {} appears ---", enemy.name);

        let mut turn = 1;
        while enemy.attributes().is_alive() && hero.attrib.is_alive() {
            println!("[turn {turn}]");

            // Open with the shield, refresh focus a couple of turns in.
            if turn == 1 {
                hero.apply_effect(war_shield(&constants.effects), &mut events);
            } else if turn == 3 {
                hero.apply_effect(hunters_focus(&constants.effects), &mut events);
            }

            resolve_attack(&hero, &mut enemy, &mut rng, &mut events);
            if enemy.attributes().is_alive() {
                resolve_attack(&enemy, &mut hero, &mut rng, &mut events);
            }
            end_of_turn(&mut hero, &mut events);
            flush(&mut events);

            // Drink something before it gets dangerous.
            if hero.attrib.health < hero.attrib.health_max / 3 {
                if hero.use_item("Minor Healing Potion", &mut events).is_ok()
                    || hero.use_item("Simple Bandage", &mut events).is_ok()
                    || hero.use_item("Healing Potion", &mut events).is_ok()
                {
                    flush(&mut events);
                }
            }
            turn += 1;
        }

        if !hero.attrib.is_alive() {
            println!("\n{} has fallen. Game over.", hero.name);
            return;
        }

        println!("{} is defeated!", enemy.name);
        if let Some(item) = enemy.take_loot() {
            hero.collect_item(item, &mut events);
        }
        grant_xp(&mut hero, enemy.xp_reward(), &mut events);
        flush(&mut events);
        println!(
            "{}: level {}, {}/{} hp, {} xp banked",
            hero.name, hero.level, hero.attrib.health, hero.attrib.health_max, hero.xp
        );
    }

    println!("\n=== The roster is cleared. ===");
}
