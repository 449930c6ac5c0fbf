//! DamageAmount - tagged incoming damage value
//!
//! Incoming damage is either a legacy single-channel scalar or a
//! (normal, true) split resolved against defense. The tag makes the
//! resolution path an exhaustive match instead of runtime type inspection.

use crate::error::CombatError;
use serde::{Deserialize, Serialize};

/// A damage value handed to `apply_damage`.
///
/// Deserialization routes through the checked constructors, so a negative
/// component is rejected at the wire boundary too, not just in code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[serde(try_from = "RawDamageAmount")]
pub enum DamageAmount {
    /// Legacy single-channel damage: applied directly, no mitigation
    Scalar { amount: i32 },
    /// Dual-channel damage: `normal` is mitigated by defense,
    /// `true_damage` bypasses it
    Split { normal: i32, true_damage: i32 },
}

/// Wire shape of `DamageAmount` before validation.
#[derive(Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum RawDamageAmount {
    Scalar { amount: i32 },
    Split { normal: i32, true_damage: i32 },
}

impl TryFrom<RawDamageAmount> for DamageAmount {
    type Error = CombatError;

    fn try_from(raw: RawDamageAmount) -> Result<Self, Self::Error> {
        match raw {
            RawDamageAmount::Scalar { amount } => DamageAmount::scalar(amount),
            RawDamageAmount::Split {
                normal,
                true_damage,
            } => DamageAmount::split(normal, true_damage),
        }
    }
}

impl DamageAmount {
    /// Build a scalar damage value, rejecting negative amounts.
    pub fn scalar(amount: i32) -> Result<Self, CombatError> {
        if amount < 0 {
            return Err(CombatError::InvalidDamage {
                reason: format!("scalar amount {amount} is negative"),
            });
        }
        Ok(DamageAmount::Scalar { amount })
    }

    /// Build a split damage value, rejecting negative components.
    pub fn split(normal: i32, true_damage: i32) -> Result<Self, CombatError> {
        if normal < 0 || true_damage < 0 {
            return Err(CombatError::InvalidDamage {
                reason: format!("split components ({normal}, {true_damage}) must be non-negative"),
            });
        }
        Ok(DamageAmount::Split {
            normal,
            true_damage,
        })
    }

    /// Total raw damage carried, before any mitigation.
    pub fn total(&self) -> i32 {
        match *self {
            DamageAmount::Scalar { amount } => amount,
            DamageAmount::Split {
                normal,
                true_damage,
            } => normal + true_damage,
        }
    }

    /// Whether this value carries no damage at all.
    pub fn is_zero(&self) -> bool {
        self.total() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_constructor_accepts_non_negative() {
        let amount = DamageAmount::split(10, 5).unwrap();
        assert_eq!(amount.total(), 15);
        assert!(!amount.is_zero());
    }

    #[test]
    fn test_negative_components_rejected() {
        assert!(matches!(
            DamageAmount::scalar(-1),
            Err(CombatError::InvalidDamage { .. })
        ));
        assert!(matches!(
            DamageAmount::split(-3, 2),
            Err(CombatError::InvalidDamage { .. })
        ));
        assert!(matches!(
            DamageAmount::split(3, -2),
            Err(CombatError::InvalidDamage { .. })
        ));
    }

    #[test]
    fn test_zero_split_is_zero() {
        assert!(DamageAmount::split(0, 0).unwrap().is_zero());
        assert!(!DamageAmount::split(0, 1).unwrap().is_zero());
    }

    #[test]
    fn test_serialization_is_tagged() {
        let amount = DamageAmount::split(7, 3).unwrap();
        let json = serde_json::to_string(&amount).unwrap();
        assert!(json.contains("split"));

        let back: DamageAmount = serde_json::from_str(&json).unwrap();
        assert_eq!(back, amount);
    }

    #[test]
    fn test_deserialization_rejects_negative_components() {
        let result: Result<DamageAmount, _> =
            serde_json::from_str(r#"{"kind":"split","normal":-5,"true_damage":3}"#);
        assert!(result.is_err());

        let result: Result<DamageAmount, _> =
            serde_json::from_str(r#"{"kind":"scalar","amount":-1}"#);
        assert!(result.is_err());
    }
}
