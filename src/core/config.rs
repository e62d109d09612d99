//! Battle configuration.
//!
//! Every tunable number the resolver uses lives here:
//! - Player baselines (health, mana, rest and heal amounts)
//! - Enemy baselines and level scaling
//! - Passive and buff magnitudes
//! - Presentation delays for the timing layer
//!
//! The resolver never hardcodes these - callers pass a `BattleConfig`.
//! `BattleConfig::default()` reproduces the shipped game.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while loading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{field} must be greater than zero")]
    NonPositive { field: &'static str },

    #[error("dodge bonus {0} exceeds 100%")]
    DodgeOutOfRange(u32),
}

/// Ceiling applied by the Heal action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealCap {
    /// Clamp to the player's current maximum health.
    MaxHealth,
    /// Clamp to a fixed value regardless of max health.
    Fixed(u32),
}

/// How the enemy changes when the player advances a level.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum LevelScaling {
    /// Same enemy, stats grow linearly with the level:
    /// `base * (1 + (level - 1) * step)`, floored.
    Multiplier { health_step: f64, damage_step: f64 },

    /// From level 2 on, a second named enemy replaces the first with stats
    /// `base * factor^(level - 1)`, floored.
    SecondEnemy { name: String, factor: f64 },
}

impl Default for LevelScaling {
    fn default() -> Self {
        LevelScaling::Multiplier {
            health_step: 0.5,
            damage_step: 0.3,
        }
    }
}

/// Delays used by the presentation timeline, in milliseconds.
///
/// These only decide when an already-resolved event is shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresentationDelays {
    /// Elemental projectile travel (Boulder, Fireball, ...).
    pub elemental_ms: u64,
    /// Dash-in, hold and return of a choreographed slash.
    pub choreographed_ms: u64,
    /// Pause between the player's hit and the enemy's counter.
    pub pre_counter_ms: u64,
    /// Enemy wind-up before damage lands.
    pub enemy_attack_ms: u64,
}

impl Default for PresentationDelays {
    fn default() -> Self {
        Self {
            elemental_ms: 1_000,
            choreographed_ms: 2_500,
            pre_counter_ms: 500,
            enemy_attack_ms: 2_000,
        }
    }
}

/// Complete battle configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleConfig {
    /// Player health and max health at battle start.
    pub starting_health: u32,
    /// Player mana at battle start, also the mana ceiling.
    pub max_mana: u32,
    /// Mana restored by the Rest action.
    pub rest_mana: u32,
    /// Health restored by the Heal action.
    pub heal_amount: u32,
    /// Ceiling applied by the Heal action.
    pub heal_cap: HealCap,

    /// Name of the level 1 enemy.
    pub enemy_name: String,
    /// Damage per enemy attack at level 1.
    pub enemy_base_damage: u32,
    /// Enemy health used when the launch parameter is missing or unparsable.
    pub default_enemy_health: u32,
    /// Enemy progression between levels.
    pub level_scaling: LevelScaling,
    /// Clear the cooldown map on level-up.
    pub reset_cooldowns_on_level_up: bool,

    /// Number of combat log lines retained.
    pub log_capacity: usize,
    /// Seconds on the per-turn countdown display.
    pub turn_timer_secs: u32,

    /// Max health granted by the "More Health" passive.
    pub more_health_max: u32,
    /// Dodge chance (percent) granted by the "Swift" passive.
    pub swift_dodge_bonus: u32,

    pub delays: PresentationDelays,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            starting_health: 100,
            max_mana: 100,
            rest_mana: 50,
            heal_amount: 20,
            heal_cap: HealCap::MaxHealth,
            enemy_name: "Samurai".to_string(),
            enemy_base_damage: 25,
            default_enemy_health: 100,
            level_scaling: LevelScaling::default(),
            reset_cooldowns_on_level_up: false,
            log_capacity: 5,
            turn_timer_secs: 30,
            more_health_max: 150,
            swift_dodge_bonus: 20,
            delays: PresentationDelays::default(),
        }
    }
}

impl BattleConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a configuration from JSON.
    ///
    /// Missing fields fall back to their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the values the resolver relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.starting_health == 0 {
            return Err(ConfigError::NonPositive { field: "starting_health" });
        }
        if self.max_mana == 0 {
            return Err(ConfigError::NonPositive { field: "max_mana" });
        }
        if self.default_enemy_health == 0 {
            return Err(ConfigError::NonPositive { field: "default_enemy_health" });
        }
        if self.log_capacity == 0 {
            return Err(ConfigError::NonPositive { field: "log_capacity" });
        }
        if self.more_health_max == 0 {
            return Err(ConfigError::NonPositive { field: "more_health_max" });
        }
        if self.swift_dodge_bonus > 100 {
            return Err(ConfigError::DodgeOutOfRange(self.swift_dodge_bonus));
        }
        Ok(())
    }

    /// Set the heal ceiling.
    #[must_use]
    pub fn with_heal_cap(mut self, cap: HealCap) -> Self {
        self.heal_cap = cap;
        self
    }

    /// Set the level scaling mode.
    #[must_use]
    pub fn with_level_scaling(mut self, scaling: LevelScaling) -> Self {
        self.level_scaling = scaling;
        self
    }

    /// Clear cooldowns when advancing a level.
    #[must_use]
    pub fn reset_cooldowns_on_level_up(mut self, reset: bool) -> Self {
        self.reset_cooldowns_on_level_up = reset;
        self
    }

    /// Set the enemy's base damage.
    #[must_use]
    pub fn with_enemy_base_damage(mut self, damage: u32) -> Self {
        self.enemy_base_damage = damage;
        self
    }

    /// Set the combat log capacity.
    #[must_use]
    pub fn with_log_capacity(mut self, capacity: usize) -> Self {
        self.log_capacity = capacity;
        self
    }

    /// Set the presentation delays.
    #[must_use]
    pub fn with_delays(mut self, delays: PresentationDelays) -> Self {
        self.delays = delays;
        self
    }
}
