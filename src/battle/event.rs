//! Battle events.
//!
//! The resolver reports what happened as an ordered list of events. Each
//! event carries the resulting numbers, so the rendering layer can show it
//! whenever the presentation timeline releases it without reading state.

use serde::{Deserialize, Serialize};

use super::error::ActionError;
use crate::core::BattleOutcome;
use crate::skills::{Delivery, PassiveBoost};

/// Something that happened during resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BattleEvent {
    /// A passive skill took effect at battle start.
    PassiveApplied { skill: String, boost: PassiveBoost },

    /// The chosen action was refused; nothing else changed.
    ActionRejected(ActionError),

    /// A damaging skill hit the enemy.
    SkillUsed {
        skill: String,
        delivery: Delivery,
        damage: u32,
        enemy_health: u32,
    },

    /// A one-time skill restored the player to full health.
    HealthRestored { skill: String, health: u32 },

    /// Rest recovered mana.
    Rested { restored: u32, mana: u32 },

    /// The player braced for the next attack.
    DodgePrepared,

    /// Heal recovered health.
    Healed { restored: u32, health: u32 },

    /// The enemy hit the player.
    EnemyAttacked { damage: u32, player_health: u32 },

    /// The enemy attack was negated.
    AttackDodged { guaranteed: bool },

    /// Control is back with the player.
    TurnStarted { turn: u32 },

    /// Enemy health reached zero.
    Victory,

    /// Player health reached zero.
    Defeat,

    /// A new level began after a victory.
    LevelStarted {
        level: u32,
        enemy: String,
        enemy_health: u32,
        enemy_damage: u32,
    },
}

impl BattleEvent {
    /// Terminal outcome signalled by this event, if any.
    #[must_use]
    pub fn outcome(&self) -> Option<BattleOutcome> {
        match self {
            BattleEvent::Victory => Some(BattleOutcome::Victory),
            BattleEvent::Defeat => Some(BattleOutcome::Defeat),
            _ => None,
        }
    }

    /// Whether this is part of the enemy's counter-attack.
    #[must_use]
    pub fn is_enemy_attack(&self) -> bool {
        matches!(self, BattleEvent::EnemyAttacked { .. } | BattleEvent::AttackDodged { .. })
    }
}

/// Navigation target the surrounding app should offer once a modal shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModalChoice {
    NextLevel,
    Retry,
    MainMenu,
}

/// Choices offered by the modal for an outcome.
#[must_use]
pub fn modal_choices(outcome: BattleOutcome) -> &'static [ModalChoice] {
    match outcome {
        BattleOutcome::Victory => &[ModalChoice::NextLevel, ModalChoice::MainMenu],
        BattleOutcome::Defeat => &[ModalChoice::Retry, ModalChoice::MainMenu],
    }
}
