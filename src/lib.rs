//! # plushie-battle
//!
//! Turn-based battle engine for a plushie fighting game.
//!
//! ## Design Principles
//!
//! 1. **Pure Resolution**: `resolve(&state, action, &config)` returns a new
//!    state and the events that produced it. Nothing is mutated in place.
//!
//! 2. **Tagged Skills**: Every skill carries a `SkillEffect` decided once,
//!    when the loadout is built. The resolver never matches on names.
//!
//! 3. **Configuration Over Constants**: Tunables live in `BattleConfig`,
//!    which can be loaded from JSON.
//!
//! ## Architecture
//!
//! - **Seeded RNG**: The dodge roll stream lives in the state, so a seed
//!   plus an action sequence replays a battle exactly.
//!
//! - **Persistent Data Structures**: The combat log, cooldowns and action
//!   history use `im-rs`, making state snapshots cheap.
//!
//! - **Presentation Timeline**: Animation delays are applied to the event
//!   stream after resolution and never affect the outcome.
//!
//! ## Modules
//!
//! - `core`: Combatants, state, actions, RNG, configuration
//! - `skills`: Skill definitions, the catalog, payload parsing
//! - `battle`: Resolver, level transitions, timers, the live session

pub mod core;
pub mod skills;
pub mod battle;

// Re-export commonly used types
pub use crate::core::{
    ActionRecord, BattleAction,
    BattleConfig, ConfigError, HealCap, LevelScaling, PresentationDelays,
    BattleRng, BattleRngState,
    CharacterType, CombatLog, Enemy, Player,
    BattleOutcome, BattleState, TurnPhase,
};

pub use crate::skills::{
    Delivery, PassiveBoost, Skill, SkillEffect,
    CatalogEntry, SkillCatalog,
    Loadout, SkillPayloadError, MAX_SELECTED_SKILLS,
};

pub use crate::battle::{
    ActionError, BattleEvent, ModalChoice,
    BattleParams, Difficulty,
    Resolution, resolve, start_battle,
    LevelError, next_level, retry,
    BattleSession, Timeline,
};
