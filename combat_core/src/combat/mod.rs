//! Combat resolution - apply damage amounts to entities, run attack turns

mod resolution;
mod result;

pub use resolution::{apply_damage, end_of_turn, mitigate_normal, resolve_attack};
pub use result::CombatResult;
