//! Skill catalog for effect lookup.
//!
//! The `SkillCatalog` holds every skill the selection screen offers and
//! decides each one's `SkillEffect`. Loadouts are classified against it
//! once, at load time.

use rustc_hash::FxHashMap;

use super::definition::{Delivery, PassiveBoost, Skill, SkillEffect};
use crate::core::BattleConfig;

/// Static data for one catalog skill.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: String,
    pub damage: u32,
    pub cooldown: u32,
    pub description: String,
    pub effect: SkillEffect,
}

/// Registry of known skills keyed by name.
///
/// ## Example
///
/// ```
/// use plushie_battle::core::BattleConfig;
/// use plushie_battle::skills::{Delivery, SkillCatalog, SkillEffect};
///
/// let catalog = SkillCatalog::standard(&BattleConfig::default());
///
/// assert_eq!(
///     catalog.classify("Fireball"),
///     SkillEffect::FlatDamage { delivery: Delivery::Elemental }
/// );
/// assert_eq!(catalog.classify("Homebrew Punch"), SkillEffect::GENERIC);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SkillCatalog {
    entries: FxHashMap<String, CatalogEntry>,
}

impl SkillCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The skills offered by the selection screen.
    ///
    /// Passive and buff magnitudes come from `config`.
    #[must_use]
    pub fn standard(config: &BattleConfig) -> Self {
        let elemental = SkillEffect::FlatDamage { delivery: Delivery::Elemental };
        let choreographed = SkillEffect::FlatDamage { delivery: Delivery::Choreographed };

        let mut catalog = Self::new();
        let rows: [(&str, u32, u32, &str, SkillEffect); 14] = [
            ("Boulder", 120, 8, "Summon a massive boulder to crush enemies", elemental),
            ("Cryo Crystals", 80, 6, "Create ice crystals that freeze enemies", elemental),
            ("Elemental Sword Master", 100, 4, "Master the art of elemental sword combat", choreographed),
            ("Enlightenment", 0, 10, "Gain deep understanding of combat techniques", SkillEffect::GENERIC),
            ("Fireball", 90, 5, "Launch a powerful fireball at enemies", elemental),
            ("Flurries", 60, 3, "Execute rapid sword strikes", SkillEffect::GENERIC),
            ("Heavy Slash", 150, 7, "Perform a devastating sword slash", choreographed),
            (
                "More Health",
                0,
                0,
                "Increase your maximum health",
                SkillEffect::Passive(PassiveBoost::MaxHealth(config.more_health_max)),
            ),
            ("Quick Slash", 40, 2, "Execute a fast sword slash", SkillEffect::GENERIC),
            ("Quick Step", 0, 4, "Move quickly to dodge attacks", SkillEffect::GENERIC),
            ("Replenish", 0, 12, "Restore health and energy", SkillEffect::FullRestore),
            (
                "Swift",
                0,
                0,
                "Increase movement speed",
                SkillEffect::Passive(PassiveBoost::DodgeChance(config.swift_dodge_bonus)),
            ),
            (
                "Sword Blessing",
                0,
                15,
                "Enhance sword damage",
                SkillEffect::SingleUseDamage { delivery: Delivery::Immediate },
            ),
            ("Thrust", 110, 5, "Perform a powerful thrust attack", SkillEffect::GENERIC),
        ];

        for (name, damage, cooldown, description, effect) in rows {
            catalog.register(CatalogEntry {
                name: name.to_string(),
                damage,
                cooldown,
                description: description.to_string(),
                effect,
            });
        }
        catalog.register(CatalogEntry {
            name: "Water Shot".to_string(),
            damage: 70,
            cooldown: 5,
            description: "Fire a pressurised jet of water".to_string(),
            effect: elemental,
        });

        catalog
    }

    /// Register a skill.
    ///
    /// Panics if a skill with the same name already exists.
    pub fn register(&mut self, entry: CatalogEntry) {
        if self.entries.contains_key(&entry.name) {
            panic!("Skill {:?} already registered", entry.name);
        }
        self.entries.insert(entry.name.clone(), entry);
    }

    /// Look up a skill by exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.get(name)
    }

    /// Effect for a skill name; unknown names deal immediate damage.
    #[must_use]
    pub fn classify(&self, name: &str) -> SkillEffect {
        self.get(name).map_or(SkillEffect::GENERIC, |entry| entry.effect)
    }

    /// Build a fresh loadout skill from a catalog entry.
    #[must_use]
    pub fn instantiate(&self, name: &str) -> Option<Skill> {
        self.get(name).map(|entry| {
            Skill::new(entry.name.clone(), entry.damage, entry.cooldown, entry.effect)
                .with_description(entry.description.clone())
        })
    }

    /// Iterate over all entries (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> SkillCatalog {
        SkillCatalog::standard(&BattleConfig::default())
    }

    #[test]
    fn test_standard_catalog_contents() {
        let catalog = catalog();

        assert_eq!(catalog.len(), 15);
        let heavy = catalog.get("Heavy Slash").unwrap();
        assert_eq!(heavy.damage, 150);
        assert_eq!(heavy.cooldown, 7);
    }

    #[test]
    fn test_classification() {
        let catalog = catalog();

        assert_eq!(
            catalog.classify("Heavy Slash"),
            SkillEffect::FlatDamage { delivery: Delivery::Choreographed }
        );
        assert_eq!(
            catalog.classify("Elemental Sword Master"),
            SkillEffect::FlatDamage { delivery: Delivery::Choreographed }
        );
        for name in ["Boulder", "Cryo Crystals", "Fireball", "Water Shot"] {
            assert_eq!(
                catalog.classify(name),
                SkillEffect::FlatDamage { delivery: Delivery::Elemental },
                "{name}"
            );
        }
        assert_eq!(catalog.classify("Replenish"), SkillEffect::FullRestore);
        assert_eq!(
            catalog.classify("More Health"),
            SkillEffect::Passive(PassiveBoost::MaxHealth(150))
        );
        assert_eq!(
            catalog.classify("Swift"),
            SkillEffect::Passive(PassiveBoost::DodgeChance(20))
        );
        assert_eq!(catalog.classify("Thrust"), SkillEffect::GENERIC);
    }

    #[test]
    fn test_classification_is_exact_match() {
        let catalog = catalog();

        assert_eq!(catalog.classify("swift"), SkillEffect::GENERIC);
        assert_eq!(catalog.classify("Replenish "), SkillEffect::GENERIC);
    }

    #[test]
    fn test_magnitudes_follow_config() {
        let mut config = BattleConfig::default();
        config.swift_dodge_bonus = 35;
        let catalog = SkillCatalog::standard(&config);

        assert_eq!(
            catalog.classify("Swift"),
            SkillEffect::Passive(PassiveBoost::DodgeChance(35))
        );
    }

    #[test]
    fn test_instantiate() {
        let skill = catalog().instantiate("Fireball").unwrap();

        assert_eq!(skill.damage, 90);
        assert_eq!(skill.mana_cost, 45);
        assert_eq!(skill.cooldown, 5);
        assert!(!skill.has_been_used);
        assert!(catalog().instantiate("Nope").is_none());
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_registration_panics() {
        let mut catalog = catalog();
        catalog.register(CatalogEntry {
            name: "Thrust".to_string(),
            damage: 1,
            cooldown: 1,
            description: String::new(),
            effect: SkillEffect::GENERIC,
        });
    }
}
