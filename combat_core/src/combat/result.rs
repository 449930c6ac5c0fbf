//! CombatResult - the outcome of one resolved attack

use crate::damage::DamagePacket;
use serde::{Deserialize, Serialize};

/// Everything a caller needs to report one attack: the generated packet,
/// what survived mitigation, and the defender's health transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatResult {
    /// Who attacked
    pub attacker: String,
    /// Who was hit
    pub defender: String,
    /// The outgoing damage packet (pre-mitigation)
    pub packet: DamagePacket,
    /// Normal-channel damage that got through defense
    pub mitigated_normal: i32,
    /// Total health the defender lost
    pub total_applied: i32,
    /// Defender health before the hit
    pub health_before: i32,
    /// Defender health after the hit
    pub health_after: i32,
    /// Whether this hit dropped the defender to 0 health
    pub is_killing_blow: bool,
}
