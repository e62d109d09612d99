//! Launch parameters handed over by the preceding screens.
//!
//! They arrive as a loosely typed key/value payload. Parsing is lenient:
//! missing or malformed values fall back to defaults rather than failing.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::{BattleConfig, CharacterType};

/// Difficulty picked on the difficulty screen. Informational only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Case-insensitive parse; unknown values give `Medium`.
    #[must_use]
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            Some("easy") => Difficulty::Easy,
            Some("hard") => Difficulty::Hard,
            _ => Difficulty::Medium,
        }
    }
}

/// Raw launch parameters for one battle.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleParams {
    pub player_name: String,
    /// JSON array from the skill selection screen.
    pub selected_skills: Option<String>,
    pub player_image_url: Option<String>,
    pub difficulty: Difficulty,
    /// Unparsed enemy health.
    pub enemy_health: Option<String>,
    /// Background reference; presentation only.
    pub selected_map: Option<String>,
}

impl BattleParams {
    /// Empty parameters for a named player.
    pub fn new(player_name: impl Into<String>) -> Self {
        Self {
            player_name: player_name.into(),
            ..Self::default()
        }
    }

    /// Build from navigation key/value pairs.
    ///
    /// Recognized keys: `playerName`, `selectedSkills`, `playerImageUrl`,
    /// `difficulty`, `enemyHealth`, `selectedMap`. Others are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = Self::default();
        let mut difficulty = None;

        for (key, value) in pairs {
            let value = value.into();
            match key.as_ref() {
                "playerName" => params.player_name = value,
                "selectedSkills" => params.selected_skills = Some(value),
                "playerImageUrl" => params.player_image_url = Some(value),
                "difficulty" => difficulty = Some(value),
                "enemyHealth" => params.enemy_health = Some(value),
                "selectedMap" => params.selected_map = Some(value),
                other => debug!("ignoring unknown launch parameter {other:?}"),
            }
        }

        params.difficulty = Difficulty::parse(difficulty.as_deref());
        params
    }

    /// Set the skill payload (builder pattern).
    #[must_use]
    pub fn with_skills(mut self, json: impl Into<String>) -> Self {
        self.selected_skills = Some(json.into());
        self
    }

    /// Set the raw enemy health (builder pattern).
    #[must_use]
    pub fn with_enemy_health(mut self, health: impl Into<String>) -> Self {
        self.enemy_health = Some(health.into());
        self
    }

    /// Set the hero image URL (builder pattern).
    #[must_use]
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.player_image_url = Some(url.into());
        self
    }

    /// Hero colour derived from the image URL.
    #[must_use]
    pub fn character(&self) -> CharacterType {
        CharacterType::from_image_url(self.player_image_url.as_deref())
    }

    /// Starting enemy health.
    ///
    /// Takes the leading integer of the raw value; missing, unparsable or
    /// zero values silently fall back to `config.default_enemy_health`.
    #[must_use]
    pub fn enemy_health(&self, config: &BattleConfig) -> u32 {
        let parsed = self.enemy_health.as_deref().and_then(parse_leading_int);
        match parsed {
            Some(health) if health > 0 => health,
            _ => {
                debug!(
                    "enemy health {:?} unusable, defaulting to {}",
                    self.enemy_health, config.default_enemy_health
                );
                config.default_enemy_health
            }
        }
    }
}

/// Leading decimal digits after optional whitespace, e.g. `"150hp"` -> 150.
fn parse_leading_int(raw: &str) -> Option<u32> {
    let trimmed = raw.trim_start();
    let digits = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .map_or(trimmed, |end| &trimmed[..end]);
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pairs() {
        let params = BattleParams::from_pairs([
            ("playerName", "Mochi"),
            ("selectedSkills", "[]"),
            ("playerImageUrl", "https://cdn/pink_idle.gif"),
            ("difficulty", "HARD"),
            ("enemyHealth", "250"),
            ("selectedMap", "forest"),
            ("somethingElse", "x"),
        ]);

        assert_eq!(params.player_name, "Mochi");
        assert_eq!(params.selected_skills.as_deref(), Some("[]"));
        assert_eq!(params.difficulty, Difficulty::Hard);
        assert_eq!(params.selected_map.as_deref(), Some("forest"));
        assert_eq!(params.character(), CharacterType::Pink);
        assert_eq!(params.enemy_health(&BattleConfig::default()), 250);
    }

    #[test]
    fn test_enemy_health_defaults() {
        let config = BattleConfig::default();

        for raw in ["", "abc", "0", "-40"] {
            let params = BattleParams::new("p").with_enemy_health(raw);
            assert_eq!(params.enemy_health(&config), 100, "{raw:?}");
        }
        assert_eq!(BattleParams::new("p").enemy_health(&config), 100);
    }

    #[test]
    fn test_enemy_health_leading_digits() {
        let config = BattleConfig::default();

        assert_eq!(BattleParams::new("p").with_enemy_health(" 150hp").enemy_health(&config), 150);
        assert_eq!(BattleParams::new("p").with_enemy_health("80.5").enemy_health(&config), 80);
    }

    #[test]
    fn test_difficulty_parse() {
        assert_eq!(Difficulty::parse(Some("easy")), Difficulty::Easy);
        assert_eq!(Difficulty::parse(Some(" Medium ")), Difficulty::Medium);
        assert_eq!(Difficulty::parse(Some("nightmare")), Difficulty::Medium);
        assert_eq!(Difficulty::parse(None), Difficulty::Medium);
    }
}
