//! Core battle types: combatants, state, actions, RNG, configuration.
//!
//! This module holds plain data. The rules that move it live in `battle`.

pub mod action;
pub mod combat_log;
pub mod combatant;
pub mod config;
pub mod rng;
pub mod state;

pub use action::{ActionRecord, BattleAction};
pub use combat_log::CombatLog;
pub use combatant::{CharacterType, Enemy, Player};
pub use config::{BattleConfig, ConfigError, HealCap, LevelScaling, PresentationDelays};
pub use rng::{BattleRng, BattleRngState};
pub use state::{BattleOutcome, BattleState, TurnPhase};
