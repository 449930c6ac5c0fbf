//! Effect lifecycle processing - activation and per-turn ticking

use super::{Effect, EffectKind};
use crate::attributes::AttributeSet;
use crate::events::{CombatEvent, EventLog};

/// Activate an effect on a character's effect list.
///
/// Stat buffs are appended and their delta applied exactly once; stacking
/// the same buff twice stacks additively and stays reversible. A
/// damage-over-time effect with the same name overwrites the existing
/// instance instead - reapplying a bleed resets it, last application wins.
pub fn apply_effect(
    effects: &mut Vec<Effect>,
    attrib: &mut AttributeSet,
    owner: &str,
    effect: Effect,
    events: &mut EventLog,
) {
    match effect.kind {
        EffectKind::StatBuff { delta } => {
            delta.apply_to(attrib);
            events.push(CombatEvent::EffectApplied {
                target: owner.to_string(),
                effect: effect.name.clone(),
            });
            effects.push(effect);
        }
        EffectKind::DamageOverTime { damage_per_turn } => {
            events.push(CombatEvent::BleedApplied {
                target: owner.to_string(),
                damage_per_turn,
                turns: effect.turns_remaining,
            });
            if let Some(existing) = effects
                .iter_mut()
                .find(|e| e.name == effect.name && matches!(e.kind, EffectKind::DamageOverTime { .. }))
            {
                *existing = effect;
            } else {
                effects.push(effect);
            }
        }
    }
}

/// Tick every active effect once. Must be called exactly once per completed
/// turn, after all damage for that turn has resolved.
///
/// Damage-over-time effects deal their per-turn damage (unmitigated, health
/// clamped at 0) before the decrement. Effects that reach zero turns have
/// their stat delta reversed, emit an expiry event and are removed.
///
/// Returns the total damage dealt by damage-over-time effects this tick.
pub fn tick_effects(
    effects: &mut Vec<Effect>,
    attrib: &mut AttributeSet,
    owner: &str,
    events: &mut EventLog,
) -> i32 {
    let mut dot_damage = 0;

    for effect in effects.iter_mut() {
        if let EffectKind::DamageOverTime { damage_per_turn } = effect.kind {
            if effect.is_active() {
                attrib.lose_health(damage_per_turn);
                dot_damage += damage_per_turn;
                effect.turns_remaining -= 1;
                events.push(CombatEvent::BleedTick {
                    target: owner.to_string(),
                    damage: damage_per_turn,
                    turns_remaining: effect.turns_remaining,
                });
            }
        } else {
            effect.turns_remaining = effect.turns_remaining.saturating_sub(1);
        }
    }

    // Reverse and report everything that just ran out, then drop it.
    for effect in effects.iter().filter(|e| !e.is_active()) {
        match effect.kind {
            EffectKind::StatBuff { delta } => {
                delta.remove_from(attrib);
                events.push(CombatEvent::EffectExpired {
                    target: owner.to_string(),
                    effect: effect.name.clone(),
                });
            }
            EffectKind::DamageOverTime { .. } => {
                events.push(CombatEvent::BleedEnded {
                    target: owner.to_string(),
                });
            }
        }
    }
    effects.retain(|e| e.is_active());

    dot_damage
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::StatDelta;

    fn setup() -> (Vec<Effect>, AttributeSet, EventLog) {
        (Vec::new(), AttributeSet::new(100, 10, 10), EventLog::new())
    }

    #[test]
    fn test_buff_expires_after_its_duration() {
        let (mut effects, mut attrib, mut events) = setup();
        let delta = StatDelta {
            defense: 5,
            ..Default::default()
        };

        apply_effect(
            &mut effects,
            &mut attrib,
            "hero",
            Effect::stat_buff("War Shield", 2, delta),
            &mut events,
        );
        assert_eq!(attrib.defense, 15);

        tick_effects(&mut effects, &mut attrib, "hero", &mut events);
        assert_eq!(attrib.defense, 15);
        assert_eq!(effects.len(), 1);

        tick_effects(&mut effects, &mut attrib, "hero", &mut events);
        assert_eq!(attrib.defense, 10);
        assert!(effects.is_empty());
        assert!(events.contains(|e| matches!(e, CombatEvent::EffectExpired { .. })));
    }

    #[test]
    fn test_expiry_is_order_independent() {
        let (mut effects, mut attrib, mut events) = setup();
        let baseline = attrib.clone();

        apply_effect(
            &mut effects,
            &mut attrib,
            "hero",
            Effect::stat_buff(
                "A",
                1,
                StatDelta {
                    defense: 3,
                    ..Default::default()
                },
            ),
            &mut events,
        );
        apply_effect(
            &mut effects,
            &mut attrib,
            "hero",
            Effect::stat_buff(
                "B",
                3,
                StatDelta {
                    defense: 7,
                    crit_chance: 10,
                    ..Default::default()
                },
            ),
            &mut events,
        );
        assert_eq!(attrib.defense, 20);

        // A expires first, B two ticks later; baseline must come back exactly.
        for _ in 0..3 {
            tick_effects(&mut effects, &mut attrib, "hero", &mut events);
        }
        assert!(effects.is_empty());
        assert_eq!(attrib, baseline);
    }

    #[test]
    fn test_dot_deals_exact_total_and_stops() {
        let (mut effects, mut attrib, mut events) = setup();

        apply_effect(
            &mut effects,
            &mut attrib,
            "hero",
            Effect::damage_over_time("Bleed", 3, 10),
            &mut events,
        );

        let mut total = 0;
        for _ in 0..3 {
            total += tick_effects(&mut effects, &mut attrib, "hero", &mut events);
        }
        assert_eq!(total, 30);
        assert_eq!(attrib.health, 70);
        assert!(effects.is_empty());
        assert!(events.contains(|e| matches!(e, CombatEvent::BleedEnded { .. })));

        // A fourth tick deals nothing.
        assert_eq!(tick_effects(&mut effects, &mut attrib, "hero", &mut events), 0);
        assert_eq!(attrib.health, 70);
    }

    #[test]
    fn test_reapplied_dot_overwrites() {
        let (mut effects, mut attrib, mut events) = setup();

        apply_effect(
            &mut effects,
            &mut attrib,
            "hero",
            Effect::damage_over_time("Bleed", 3, 10),
            &mut events,
        );
        apply_effect(
            &mut effects,
            &mut attrib,
            "hero",
            Effect::damage_over_time("Bleed", 1, 2),
            &mut events,
        );
        assert_eq!(effects.len(), 1);

        let total = tick_effects(&mut effects, &mut attrib, "hero", &mut events);
        assert_eq!(total, 2);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_dot_damage_clamps_health_at_zero() {
        let (mut effects, mut attrib, mut events) = setup();
        attrib.health = 5;

        apply_effect(
            &mut effects,
            &mut attrib,
            "hero",
            Effect::damage_over_time("Bleed", 2, 10),
            &mut events,
        );
        tick_effects(&mut effects, &mut attrib, "hero", &mut events);
        assert_eq!(attrib.health, 0);
    }
}
