//! The two sides of an encounter.
//!
//! `Player` and `Enemy` are plain value types. Every mutation clamps:
//! health and mana never go below zero or above their maxima.

use serde::{Deserialize, Serialize};

/// Hero colour variant, picked on the customization screen.
///
/// Only the presentation layer cares about this; it selects sprite sets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterType {
    Cyan,
    Purple,
    Pink,
    Blue,
    #[default]
    White,
}

impl CharacterType {
    /// Derive the variant from a hero image URL by keyword.
    ///
    /// Matching is case-insensitive and checked in order:
    /// "cyan" (or "fly"), "purp", "pink", "blue"; anything else is white.
    #[must_use]
    pub fn from_image_url(url: Option<&str>) -> Self {
        let Some(url) = url else {
            return CharacterType::White;
        };
        let url = url.to_ascii_lowercase();

        if url.contains("cyan") || url.contains("fly") {
            CharacterType::Cyan
        } else if url.contains("purp") {
            CharacterType::Purple
        } else if url.contains("pink") {
            CharacterType::Pink
        } else if url.contains("blue") {
            CharacterType::Blue
        } else {
            CharacterType::White
        }
    }
}

/// The player's combatant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub character: CharacterType,
    pub health: u32,
    pub max_health: u32,
    pub mana: u32,
    pub max_mana: u32,
    /// Percent chance to negate an enemy attack.
    pub dodge_chance: u32,
    /// Flat add-on to every outgoing hit.
    pub raw_damage_bonus: u32,
}

impl Player {
    /// Create a player at full health and mana.
    pub fn new(name: impl Into<String>, max_health: u32, max_mana: u32) -> Self {
        Self {
            name: name.into(),
            character: CharacterType::default(),
            health: max_health,
            max_health,
            mana: max_mana,
            max_mana,
            dodge_chance: 0,
            raw_damage_bonus: 0,
        }
    }

    /// Set the character variant (builder pattern).
    #[must_use]
    pub fn with_character(mut self, character: CharacterType) -> Self {
        self.character = character;
        self
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Subtract damage, clamped at zero. Returns the health lost.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let before = self.health;
        self.health = self.health.saturating_sub(amount);
        before - self.health
    }

    /// Add health up to `cap` (never above max health). Returns the gain.
    pub fn heal(&mut self, amount: u32, cap: u32) -> u32 {
        let cap = cap.min(self.max_health);
        let before = self.health;
        self.health = self.health.saturating_add(amount).min(cap).max(before);
        self.health - before
    }

    /// Restore health to max.
    pub fn restore_full(&mut self) {
        self.health = self.max_health;
    }

    /// Add mana up to max. Returns the gain.
    pub fn restore_mana(&mut self, amount: u32) -> u32 {
        let before = self.mana;
        self.mana = self.mana.saturating_add(amount).min(self.max_mana);
        self.mana - before
    }

    /// Deduct mana if affordable.
    pub fn spend_mana(&mut self, cost: u32) -> bool {
        if self.mana < cost {
            return false;
        }
        self.mana -= cost;
        true
    }
}

/// The opponent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    pub name: String,
    pub health: u32,
    pub max_health: u32,
    /// Damage dealt by each attack.
    pub damage: u32,
}

impl Enemy {
    /// Create an enemy at full health.
    pub fn new(name: impl Into<String>, max_health: u32, damage: u32) -> Self {
        Self {
            name: name.into(),
            health: max_health,
            max_health,
            damage,
        }
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Subtract damage, clamped at zero. Returns the health lost.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let before = self.health;
        self.health = self.health.saturating_sub(amount);
        before - self.health
    }
}
