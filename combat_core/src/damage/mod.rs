//! Damage generation - outgoing damage packets and the damage amount type

mod amount;
mod packet;

pub use amount::DamageAmount;
pub use packet::{compute_damage, compute_damage_with_rng, DamagePacket};
