//! Battle state: everything one encounter knows.
//!
//! ## BattleState
//!
//! A single value record replacing the screen's scattered flags:
//! - Turn phase, turn-lock and exchange flags
//! - Player and enemy stats
//! - Loadout, cooldown map, combat log
//! - Action history and the RNG stream
//!
//! Uses `im` persistent collections so the resolver can hand back a new
//! state per action without copying the log or cooldown map.

use im::{HashMap as ImHashMap, Vector};
use serde::{Deserialize, Serialize};

use super::action::ActionRecord;
use super::combat_log::CombatLog;
use super::combatant::{Enemy, Player};
use super::config::BattleConfig;
use super::rng::BattleRng;
use crate::skills::{Loadout, Skill};

/// Where the encounter is in its turn cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Waiting for the player's action.
    PlayerTurn,
    /// The player has acted; the enemy counter is pending.
    EnemyAttack,
    /// Enemy health reached zero. Terminal.
    Victory,
    /// Player health reached zero. Terminal.
    Defeat,
}

impl TurnPhase {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, TurnPhase::Victory | TurnPhase::Defeat)
    }
}

/// Terminal result of an encounter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BattleOutcome {
    Victory,
    Defeat,
}

/// Complete state of one encounter.
#[derive(Clone, Debug, PartialEq)]
pub struct BattleState {
    // === Progression ===
    /// Current level (starts at 1).
    pub level: u32,

    /// Player turn number within the level (starts at 1).
    pub turn: u32,

    pub phase: TurnPhase,

    // === Exchange flags ===
    /// Set once the player's action for this turn has resolved.
    pub has_acted: bool,

    /// The player rested this exchange.
    pub is_resting: bool,

    /// The next enemy attack is negated unconditionally.
    pub is_dodging: bool,

    // === Combatants ===
    pub player: Player,
    pub enemy: Enemy,

    /// The level 1 enemy; level scaling is relative to it.
    pub base_enemy: Enemy,

    // === Skills ===
    pub skills: Loadout,

    /// Skill name -> seconds until usable again.
    pub cooldowns: ImHashMap<String, u32>,

    // === Display ===
    pub log: CombatLog,

    /// Seconds left on the per-turn countdown display.
    pub turn_timer: u32,

    /// Resolved actions, oldest first.
    pub history: Vector<ActionRecord>,

    /// Dodge roll stream.
    pub rng: BattleRng,
}

impl BattleState {
    /// Create a fresh level 1 encounter.
    ///
    /// Passive skills are not applied here; see `resolver::start_battle`.
    #[must_use]
    pub fn new(player: Player, enemy: Enemy, skills: Loadout, config: &BattleConfig, seed: u64) -> Self {
        Self {
            level: 1,
            turn: 1,
            phase: TurnPhase::PlayerTurn,
            has_acted: false,
            is_resting: false,
            is_dodging: false,
            player,
            base_enemy: enemy.clone(),
            enemy,
            skills,
            cooldowns: ImHashMap::new(),
            log: CombatLog::new(config.log_capacity),
            turn_timer: config.turn_timer_secs,
            history: Vector::new(),
            rng: BattleRng::new(seed),
        }
    }

    /// Whether a player action would be accepted right now.
    #[must_use]
    pub fn can_act(&self) -> bool {
        self.phase == TurnPhase::PlayerTurn && !self.has_acted && self.player.is_alive()
    }

    /// Terminal result, if the encounter has ended.
    #[must_use]
    pub fn outcome(&self) -> Option<BattleOutcome> {
        match self.phase {
            TurnPhase::Victory => Some(BattleOutcome::Victory),
            TurnPhase::Defeat => Some(BattleOutcome::Defeat),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Skill in a loadout slot.
    #[must_use]
    pub fn skill(&self, slot: usize) -> Option<&Skill> {
        self.skills.get(slot)
    }

    /// Remaining cooldown for a skill (0 when ready).
    #[must_use]
    pub fn cooldown_remaining(&self, name: &str) -> u32 {
        self.cooldowns.get(name).copied().unwrap_or(0)
    }

    /// Start a skill's cooldown.
    pub fn set_cooldown(&mut self, name: &str, seconds: u32) {
        self.cooldowns.insert(name.to_string(), seconds);
    }

    /// One elapsed second: every running cooldown drops by one, floor 0.
    ///
    /// Returns true if any cooldown changed.
    pub fn tick_cooldowns(&mut self) -> bool {
        if self.cooldowns.values().all(|&remaining| remaining == 0) {
            return false;
        }
        self.cooldowns = self
            .cooldowns
            .iter()
            .map(|(name, &remaining)| (name.clone(), remaining.saturating_sub(1)))
            .collect();
        true
    }

    /// One elapsed second on the turn countdown, floor 0.
    pub fn tick_turn_timer(&mut self) {
        self.turn_timer = self.turn_timer.saturating_sub(1);
    }

    /// Record a resolved action.
    pub fn record_action(&mut self, record: ActionRecord) {
        self.history.push_back(record);
    }
}
