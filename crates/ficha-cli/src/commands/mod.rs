pub mod check;
pub mod learn;
pub mod odds;
pub mod roll;
pub mod sheet;
pub mod spells;

use std::path::Path;

use ficha_core::{Character, SkillId};
use ficha_mechanics::{CharacterSheet, Check, DicePoolSpec};

/// Load a character snapshot from a JSON file.
fn load_character(path: &Path) -> Result<Character, String> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    let character =
        Character::from_json(&json).map_err(|e| format!("invalid character file: {e}"))?;
    tracing::debug!(name = %character.name, skills = character.skills.len(), "loaded character");
    Ok(character)
}

/// What a command rolls: a skill or a spellcasting ability.
enum Target {
    Skill(SkillId),
    Ability(String),
}

impl Target {
    fn parse(character: &Character, name: &str) -> Result<Self, String> {
        if let Some(id) = SkillId::from_name(name) {
            return Ok(Self::Skill(id));
        }
        if character.spellcasting.ability(name).is_some() {
            return Ok(Self::Ability(name.to_string()));
        }
        Err(format!("unknown skill or ability: \"{name}\""))
    }

    fn label(&self) -> String {
        match self {
            Self::Skill(id) => id.to_string(),
            Self::Ability(id) => format!("cast ({id})"),
        }
    }

    fn pool(&self, sheet: &CharacterSheet<'_>) -> Result<DicePoolSpec, String> {
        match self {
            Self::Skill(id) => sheet.skill_pool(*id),
            Self::Ability(id) => sheet.casting_pool(id),
        }
        .map_err(|e| e.to_string())
    }

    fn check(&self, sheet: &CharacterSheet<'_>) -> Result<Check, String> {
        match self {
            Self::Skill(id) => sheet.check(*id),
            Self::Ability(id) => sheet.casting_check(id),
        }
        .map_err(|e| e.to_string())
    }
}
