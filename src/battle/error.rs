//! Rejected-action reasons.
//!
//! The `Display` text of each variant is exactly the line the combat log
//! shows when the action is refused.

use thiserror::Error;

/// Why a player action was refused. A refused action changes nothing
/// except appending one combat log line.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ActionError {
    #[error("It is not your turn!")]
    NotYourTurn,

    #[error("You have already acted this turn!")]
    AlreadyActed,

    #[error("You cannot act while defeated!")]
    PlayerDefeated,

    #[error("The battle is already over!")]
    BattleOver,

    #[error("Wait for the current exchange to finish!")]
    ExchangeInProgress,

    #[error("There is no skill in slot {0}!")]
    NoSuchSkill(usize),

    #[error("{0} is a passive skill and cannot be used in battle!")]
    PassiveSkill(String),

    #[error("{0} has already been used this battle!")]
    AlreadyUsed(String),

    #[error("Not enough mana! You need {cost} MP to use {skill}.")]
    InsufficientMana { skill: String, cost: u32 },

    #[error("{skill} is on cooldown for {remaining} more turns!")]
    OnCooldown { skill: String, remaining: u32 },
}
