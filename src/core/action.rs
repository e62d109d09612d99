//! Player actions.
//!
//! On their turn the player picks exactly one of:
//! - Use a skill from the loadout (by slot)
//! - Rest to recover mana
//! - Prepare to dodge the next attack
//! - Heal a flat amount
//!
//! Every action that does not end the battle is answered by one enemy attack.

use serde::{Deserialize, Serialize};

/// A player action.
///
/// ## Example
///
/// ```
/// use plushie_battle::core::BattleAction;
///
/// let attack = BattleAction::use_skill(0);
/// assert!(attack.is_skill());
/// assert!(!BattleAction::Rest.is_skill());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BattleAction {
    /// Use the skill in the given loadout slot.
    UseSkill { slot: usize },
    /// Recover mana.
    Rest,
    /// Guarantee the next enemy attack misses.
    Dodge,
    /// Recover a flat amount of health.
    Heal,
}

impl BattleAction {
    /// Use the skill in `slot`.
    #[must_use]
    pub const fn use_skill(slot: usize) -> Self {
        BattleAction::UseSkill { slot }
    }

    #[must_use]
    pub fn is_skill(&self) -> bool {
        matches!(self, BattleAction::UseSkill { .. })
    }
}

/// A resolved action with metadata for history tracking.
///
/// Only actions that passed validation are recorded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The action taken.
    pub action: BattleAction,

    /// Level the action was taken on.
    pub level: u32,

    /// Player turn number within the level (starts at 1).
    pub turn: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(action: BattleAction, level: u32, turn: u32) -> Self {
        Self { action, level, turn }
    }
}
