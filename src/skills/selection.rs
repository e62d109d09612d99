//! Parsing the `selectedSkills` launch payload.
//!
//! The selection screen hands over a JSON array of
//! `{name, damage, description, cooldown, imageUrl}` objects. Damage and
//! cooldown are taken from the payload; the effect is classified against
//! the catalog by name.

use log::{error, warn};
use serde::Deserialize;
use smallvec::SmallVec;
use thiserror::Error;

use super::catalog::SkillCatalog;
use super::definition::Skill;

/// Maximum number of skills a player may bring into battle.
pub const MAX_SELECTED_SKILLS: usize = 3;

/// The player's skills for one battle.
pub type Loadout = SmallVec<[Skill; MAX_SELECTED_SKILLS]>;

/// Errors that can occur when decoding the skill payload.
#[derive(Debug, Error)]
pub enum SkillPayloadError {
    #[error("malformed skill payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("skill entry {index} has an empty name")]
    EmptyName { index: usize },
}

/// One entry as sent by the selection screen.
#[derive(Clone, Debug, Deserialize)]
struct SelectedSkill {
    name: String,
    #[serde(default)]
    damage: u32,
    #[serde(default)]
    description: String,
    #[serde(default)]
    cooldown: u32,
    #[serde(default, rename = "imageUrl")]
    image_url: Option<String>,
}

/// Decode the payload into a loadout.
///
/// Entries beyond `MAX_SELECTED_SKILLS` are dropped with a warning.
pub fn parse_selected_skills(json: &str, catalog: &SkillCatalog) -> Result<Loadout, SkillPayloadError> {
    let entries: Vec<SelectedSkill> = serde_json::from_str(json)?;

    if entries.len() > MAX_SELECTED_SKILLS {
        warn!(
            "skill payload carries {} skills, keeping the first {}",
            entries.len(),
            MAX_SELECTED_SKILLS
        );
    }

    let mut loadout = Loadout::new();
    for (index, entry) in entries.into_iter().take(MAX_SELECTED_SKILLS).enumerate() {
        if entry.name.trim().is_empty() {
            return Err(SkillPayloadError::EmptyName { index });
        }

        let effect = catalog.classify(&entry.name);
        let mut skill = Skill::new(entry.name, entry.damage, entry.cooldown, effect)
            .with_description(entry.description);
        skill.image_url = entry.image_url;
        loadout.push(skill);
    }

    Ok(loadout)
}

/// Decode the payload, falling back to an empty loadout on any error.
pub fn load_selected_skills(json: Option<&str>, catalog: &SkillCatalog) -> Loadout {
    let Some(json) = json else {
        return Loadout::new();
    };

    match parse_selected_skills(json, catalog) {
        Ok(loadout) => loadout,
        Err(err) => {
            error!("error parsing skills: {err}");
            Loadout::new()
        }
    }
}
