//! Skill definitions.
//!
//! A `Skill` is one entry of the player's loadout. What it does is decided
//! once, when the loadout is built, by attaching a `SkillEffect`. The
//! resolver switches on the effect kind and never inspects skill names.

use serde::{Deserialize, Serialize};

/// How a damaging skill is staged by the presentation layer.
///
/// Resolution is identical for all three; only the display delay differs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Delivery {
    /// Damage shows up immediately.
    Immediate,
    /// A projectile travels to the enemy first (Boulder, Fireball, ...).
    Elemental,
    /// The hero dashes in, holds, and returns (Heavy Slash, ...).
    Choreographed,
}

/// A stat boost applied once at battle start.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PassiveBoost {
    /// Raise max health to the given value and fully heal.
    MaxHealth(u32),
    /// Add the given percentage to dodge chance.
    DodgeChance(u32),
}

/// What a skill does when it resolves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillEffect {
    /// `damage + raw_damage_bonus` to the enemy.
    FlatDamage { delivery: Delivery },
    /// Restore health to max. One use per battle.
    FullRestore,
    /// Same damage formula as `FlatDamage`, but one use per battle.
    SingleUseDamage { delivery: Delivery },
    /// Applied at battle start; never usable directly.
    Passive(PassiveBoost),
}

impl SkillEffect {
    /// Plain immediate damage, the fallback for unknown skills.
    pub const GENERIC: SkillEffect = SkillEffect::FlatDamage {
        delivery: Delivery::Immediate,
    };

    #[must_use]
    pub fn is_passive(&self) -> bool {
        matches!(self, SkillEffect::Passive(_))
    }

    #[must_use]
    pub fn is_one_time_use(&self) -> bool {
        matches!(self, SkillEffect::FullRestore | SkillEffect::SingleUseDamage { .. })
    }
}

/// Mana cost derived from damage: half, rounded down.
#[must_use]
pub const fn mana_cost_for(damage: u32) -> u32 {
    damage / 2
}

/// One skill in the player's loadout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    /// Display name; also the cooldown map key.
    pub name: String,
    pub damage: u32,
    pub mana_cost: u32,
    /// Cooldown in seconds once used.
    pub cooldown: u32,
    pub description: String,
    pub image_url: Option<String>,
    pub effect: SkillEffect,
    /// Set when a one-time skill has been spent.
    pub has_been_used: bool,
}

impl Skill {
    /// Create a skill; mana cost is derived from damage.
    pub fn new(name: impl Into<String>, damage: u32, cooldown: u32, effect: SkillEffect) -> Self {
        Self {
            name: name.into(),
            damage,
            mana_cost: mana_cost_for(damage),
            cooldown,
            description: String::new(),
            image_url: None,
            effect,
            has_been_used: false,
        }
    }

    /// Set the description (builder pattern).
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the icon reference (builder pattern).
    #[must_use]
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn is_passive(&self) -> bool {
        self.effect.is_passive()
    }

    #[must_use]
    pub fn is_one_time_use(&self) -> bool {
        self.effect.is_one_time_use()
    }

    /// A one-time skill that has already fired.
    #[must_use]
    pub fn is_spent(&self) -> bool {
        self.is_one_time_use() && self.has_been_used
    }
}
