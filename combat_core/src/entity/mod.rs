//! Entities - the things that fight

mod character;
mod enemy;

pub use character::{Character, SpecialAbility};
pub use enemy::Enemy;

use crate::attributes::AttributeSet;
use crate::combat;
use crate::damage::{compute_damage_with_rng, DamageAmount, DamagePacket};
use crate::error::CombatError;
use crate::events::EventLog;
use rand::Rng;

/// Capability shared by everything that can take part in combat: one owned
/// stat bundle plus the two damage operations.
pub trait Combatant {
    /// Display name used in events
    fn name(&self) -> &str;

    /// The owned stat bundle
    fn attributes(&self) -> &AttributeSet;

    /// Mutable access to the owned stat bundle
    fn attributes_mut(&mut self) -> &mut AttributeSet;

    /// Upper bound of the uniform damage jitter this entity rolls on
    /// attack. Player characters roll none.
    fn damage_jitter_max(&self) -> i32 {
        0
    }

    /// Generate an outgoing damage packet (crit roll, jitter, true damage
    /// split), reading crit and conversion stats at call time.
    fn compute_outgoing_damage(&self, rng: &mut impl Rng, events: &mut EventLog) -> DamagePacket
    where
        Self: Sized,
    {
        compute_damage_with_rng(
            self.name(),
            self.attributes(),
            self.damage_jitter_max(),
            rng,
            events,
        )
    }

    /// Apply an incoming damage value, returning the total health cost.
    fn apply_incoming_damage(
        &mut self,
        amount: DamageAmount,
        events: &mut EventLog,
    ) -> Result<i32, CombatError>
    where
        Self: Sized,
    {
        let name = self.name().to_string();
        combat::apply_damage(self.attributes_mut(), &name, amount, events)
    }
}
