//! Skills: definitions, effect kinds, the catalog, and payload parsing.
//!
//! Each skill carries a `SkillEffect` decided when the loadout is built.
//! The resolver dispatches on that tag rather than on skill names.

pub mod catalog;
pub mod definition;
pub mod selection;

pub use catalog::{CatalogEntry, SkillCatalog};
pub use definition::{mana_cost_for, Delivery, PassiveBoost, Skill, SkillEffect};
pub use selection::{load_selected_skills, parse_selected_skills, Loadout, SkillPayloadError, MAX_SELECTED_SKILLS};
