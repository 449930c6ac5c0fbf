//! Structured combat events
//!
//! Every observable state transition in the engine (crit announcements,
//! effect expiry, bleed ticks, level-up banners, loot drops) is emitted as a
//! `CombatEvent` instead of being printed. A presentation layer drains the
//! `EventLog` and renders however it likes; the core never writes to stdout.

use serde::{Deserialize, Serialize};

/// A single observable combat event (kind + payload).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CombatEvent {
    /// An attack rolled a critical hit
    CriticalHit { source: String },
    /// Damage was applied to a target
    DamageApplied {
        target: String,
        /// Normal-channel damage before mitigation
        normal: i32,
        /// Normal-channel damage after defense
        mitigated: i32,
        /// True damage (bypasses defense)
        true_damage: i32,
        /// Total health lost
        total: i32,
    },
    /// A status effect was activated on a character
    EffectApplied { target: String, effect: String },
    /// A status effect ran out and its stat delta was reversed
    EffectExpired { target: String, effect: String },
    /// A damage-over-time effect was applied (or overwritten)
    BleedApplied {
        target: String,
        damage_per_turn: i32,
        turns: u32,
    },
    /// A damage-over-time effect dealt its per-turn damage
    BleedTick {
        target: String,
        damage: i32,
        turns_remaining: u32,
    },
    /// A damage-over-time effect ran its course
    BleedEnded { target: String },
    /// Experience was granted
    XpGained { target: String, amount: i32 },
    /// A character reached a new level
    LevelUp { target: String, level: i32 },
    /// An item was added to a character's inventory
    ItemCollected { target: String, item: String },
    /// A consumable was used
    ItemUsed {
        target: String,
        item: String,
        healed: i32,
    },
}

/// An append-only collection of combat events for one resolution sequence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventLog {
    events: Vec<CombatEvent>,
}

impl EventLog {
    /// Create an empty log
    pub fn new() -> Self {
        EventLog::default()
    }

    /// Record an event
    pub fn push(&mut self, event: CombatEvent) {
        self.events.push(event);
    }

    /// Iterate over recorded events in order
    pub fn iter(&self) -> impl Iterator<Item = &CombatEvent> {
        self.events.iter()
    }

    /// Remove and return all recorded events
    pub fn drain(&mut self) -> Vec<CombatEvent> {
        std::mem::take(&mut self.events)
    }

    /// Number of recorded events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the log is empty
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Check whether any recorded event matches a predicate
    pub fn contains(&self, predicate: impl Fn(&CombatEvent) -> bool) -> bool {
        self.events.iter().any(predicate)
    }
}
