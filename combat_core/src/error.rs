//! Combat engine errors

use thiserror::Error;

/// Errors surfaced by the combat engine.
///
/// Normal combat flow never fails; these cover boundary violations
/// (malformed damage values) and capabilities that are declared but not
/// wired, which callers must be able to tell apart from "dealt 0 damage".
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CombatError {
    /// Damage value with a negative component rejected at the boundary
    #[error("invalid damage amount: {reason}")]
    InvalidDamage { reason: String },
    /// A special ability was invoked with no implementation wired
    #[error("special ability is not implemented for `{name}`")]
    AbilityNotImplemented { name: String },
    /// An inventory lookup failed
    #[error("item `{name}` not found in inventory")]
    ItemNotFound { name: String },
}
