//! Tunable combat constants

use super::{load_toml, ConfigError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunable game constants
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameConstants {
    #[serde(default)]
    pub effects: EffectConstants,
    #[serde(default)]
    pub enemy: EnemyConstants,
}

impl GameConstants {
    /// Load constants from a TOML file and validate them.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let constants: GameConstants = load_toml(path)?;
        constants.validate()?;
        Ok(constants)
    }

    /// Check that the tunable values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.effects.buff_duration_turns == 0 {
            return Err(ConfigError::ValidationError(
                "effects.buff_duration_turns must be at least 1".to_string(),
            ));
        }
        if self.effects.war_shield_defense_bonus < 0 {
            return Err(ConfigError::ValidationError(
                "effects.war_shield_defense_bonus must be non-negative".to_string(),
            ));
        }
        if self.enemy.damage_jitter_max < 0 {
            return Err(ConfigError::ValidationError(
                "enemy.damage_jitter_max must be non-negative".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectConstants {
    /// How many turns a class buff survives
    #[serde(default = "default_buff_duration")]
    pub buff_duration_turns: u32,
    /// Flat defense added by War Shield
    #[serde(default = "default_war_shield_defense")]
    pub war_shield_defense_bonus: i32,
    /// Flat crit chance added by Hunter's Focus
    #[serde(default = "default_focus_crit_chance")]
    pub hunters_focus_crit_chance_bonus: i32,
    /// Flat crit multiplier added by Hunter's Focus
    #[serde(default = "default_focus_crit_multiplier")]
    pub hunters_focus_crit_multiplier_bonus: i32,
}

impl Default for EffectConstants {
    fn default() -> Self {
        EffectConstants {
            buff_duration_turns: 2,
            war_shield_defense_bonus: 5,
            hunters_focus_crit_chance_bonus: 20,
            hunters_focus_crit_multiplier_bonus: 50,
        }
    }
}

fn default_buff_duration() -> u32 {
    2
}
fn default_war_shield_defense() -> i32 {
    5
}
fn default_focus_crit_chance() -> i32 {
    20
}
fn default_focus_crit_multiplier() -> i32 {
    50
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyConstants {
    /// Upper bound of the uniform damage jitter enemies roll on attack
    #[serde(default = "default_jitter_max")]
    pub damage_jitter_max: i32,
}

impl Default for EnemyConstants {
    fn default() -> Self {
        EnemyConstants {
            damage_jitter_max: 2,
        }
    }
}

fn default_jitter_max() -> i32 {
    2
}
