//! combat_core - Turn-based combat resolution and status effect engine
//!
//! This library provides:
//! - AttributeSet: per-entity stat bundle with saturation clamps
//! - Damage generation: dual-channel (normal/true) packets with crit rolls
//! - Combat resolution: defense mitigation and turn orchestration
//! - Status effects: unified timed buffs and damage-over-time lifecycle
//! - Progression: experience accumulation and level-ups
//!
//! All randomness is drawn from injected `rand::Rng` sources so outcomes
//! are reproducible; all notifications are structured `CombatEvent`s.

pub mod attributes;
pub mod combat;
pub mod config;
pub mod damage;
pub mod effect;
pub mod entity;
pub mod error;
pub mod events;
pub mod inventory;
pub mod prelude;
pub mod progression;

// Re-export core types for convenience
pub use attributes::AttributeSet;
pub use combat::{apply_damage, end_of_turn, mitigate_normal, resolve_attack, CombatResult};
pub use damage::{compute_damage, compute_damage_with_rng, DamageAmount, DamagePacket};
pub use effect::{Effect, EffectKind, StatDelta};
pub use entity::{Character, Combatant, Enemy, SpecialAbility};
pub use error::CombatError;
pub use events::{CombatEvent, EventLog};
pub use inventory::{Item, ItemKind};
pub use progression::{grant_xp, xp_required_for_level, GrowthRates};
