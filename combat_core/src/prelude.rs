//! Prelude module for convenient imports
//!
//! ```rust
//! use combat_core::prelude::*;
//! ```

// Core types
pub use crate::attributes::AttributeSet;
pub use crate::entity::{Character, Combatant, Enemy, SpecialAbility};
pub use crate::error::CombatError;
pub use crate::events::{CombatEvent, EventLog};

// Damage system
pub use crate::damage::{compute_damage_with_rng, DamageAmount, DamagePacket};

// Combat
pub use crate::combat::{apply_damage, end_of_turn, mitigate_normal, resolve_attack, CombatResult};

// Status effects
pub use crate::effect::{arcane_transfusion, bleed, hunters_focus, war_shield, Effect, EffectKind, StatDelta};

// Progression
pub use crate::progression::{grant_xp, xp_required_for_level, GrowthRates};

// Inventory
pub use crate::inventory::{Item, ItemKind};

// Config
pub use crate::config::{GameConstants, ScalingMultipliers};
