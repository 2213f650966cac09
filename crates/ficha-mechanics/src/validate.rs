//! Consistency checks on a character snapshot.
//!
//! The engine trusts its inputs; these checks let a caller find the gaps a
//! user can create by hand-editing a sheet before they turn into odd rolls.

use std::collections::HashSet;

use ficha_core::{Character, SkillId};

/// A warning or error found during validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// The part of the sheet where the issue was found.
    pub entity: String,
    /// A human-readable description of the issue.
    pub message: String,
    /// Whether this is an error (true) or a warning (false).
    pub is_error: bool,
}

impl ValidationIssue {
    fn error(entity: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            message: message.into(),
            is_error: true,
        }
    }

    fn warning(entity: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            is_error: false,
            ..Self::error(entity, message)
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let level = if self.is_error { "error" } else { "warning" };
        write!(f, "{level}: {}: {}", self.entity, self.message)
    }
}

/// Validate a character snapshot.
///
/// Returns every issue found, errors and warnings interleaved in the order
/// the sheet is walked.
pub fn validate_character(character: &Character) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    validate_skills(character, &mut issues);
    validate_spellcasting(character, &mut issues);
    issues
}

fn validate_skills(character: &Character, issues: &mut Vec<ValidationIssue>) {
    let mut seen = HashSet::new();
    for skill in &character.skills {
        if !seen.insert(skill.id) {
            issues.push(ValidationIssue::error(
                format!("skill '{}'", skill.id),
                "listed more than once",
            ));
        }
    }

    let signatures: Vec<String> = character
        .skills
        .iter()
        .filter(|s| s.is_signature)
        .map(|s| s.id.to_string())
        .collect();
    if signatures.len() > 1 {
        issues.push(ValidationIssue::error(
            character.name.clone(),
            format!("more than one signature skill: {}", signatures.join(", ")),
        ));
    }

    if let Some(craft_skill) = character.skill(SkillId::Craft) {
        match craft_skill.selected_craft {
            None => issues.push(ValidationIssue::warning(
                format!("skill '{}'", SkillId::Craft),
                "no craft selected; the skill cannot be rolled",
            )),
            Some(id) if character.craft(id).is_none() => issues.push(ValidationIssue::error(
                format!("skill '{}'", SkillId::Craft),
                format!("selected craft {id} does not exist"),
            )),
            Some(_) => {}
        }
    }
}

fn validate_spellcasting(character: &Character, issues: &mut Vec<ValidationIssue>) {
    let state = &character.spellcasting;

    for spell in &state.known_spells {
        if character.skill(spell.spellcasting_skill).is_none() {
            issues.push(ValidationIssue::warning(
                format!("spell '{}'", spell.name),
                format!("casting skill '{}' is not on the sheet", spell.spellcasting_skill),
            ));
        }
    }

    for ability in &state.abilities {
        if character.skill(ability.skill).is_none() {
            issues.push(ValidationIssue::warning(
                format!("ability '{}'", ability.id),
                format!("casting skill '{}' is not on the sheet", ability.skill),
            ));
        }
    }

    if state.spell_points > state.power_points.max {
        issues.push(ValidationIssue::warning(
            character.name.clone(),
            format!(
                "spell points ({}) above the power-point maximum ({})",
                state.spell_points, state.power_points.max
            ),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ficha_core::{
        AttributeKey, Craft, CraftId, KnownSpell, PowerPoints, Skill, SpellCircle,
        SpellcastingAbility,
    };

    #[test]
    fn clean_character_has_no_issues() {
        let craft = Craft::new("Smithing", AttributeKey::Might);
        let mut craft_skill = Skill::new(SkillId::Craft);
        craft_skill.selected_craft = Some(craft.id);
        let character = Character::new("Ana")
            .with_craft(craft)
            .with_skill(craft_skill)
            .with_skill(Skill::new(SkillId::Melee).signature());
        let issues = validate_character(&character);
        assert!(issues.is_empty(), "unexpected issues: {issues:?}");
    }

    #[test]
    fn two_signature_skills_error() {
        let character = Character::new("Ana")
            .with_skill(Skill::new(SkillId::Melee).signature())
            .with_skill(Skill::new(SkillId::Stealth).signature());
        let issues = validate_character(&character);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error);
        assert!(issues[0].message.contains("melee, stealth"));
    }

    #[test]
    fn duplicate_skill_error() {
        let character = Character::new("Ana")
            .with_skill(Skill::new(SkillId::Lore))
            .with_skill(Skill::new(SkillId::Lore));
        let issues = validate_character(&character);
        assert!(
            issues
                .iter()
                .any(|i| i.is_error && i.message.contains("more than once"))
        );
    }

    #[test]
    fn craft_selection_checks() {
        let unselected = Character::new("Ana").with_skill(Skill::new(SkillId::Craft));
        let issues = validate_character(&unselected);
        assert_eq!(issues.len(), 1);
        assert!(!issues[0].is_error);

        let mut dangling = Skill::new(SkillId::Craft);
        dangling.selected_craft = Some(CraftId::new());
        let issues = validate_character(&Character::new("Ana").with_skill(dangling));
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error);
        assert!(issues[0].message.contains("does not exist"));
    }

    #[test]
    fn spell_without_casting_skill_warns() {
        let mut character = Character::new("Ana");
        character.spellcasting.known_spells.push(KnownSpell {
            spell_id: "spark".to_string(),
            name: "Spark".to_string(),
            circle: SpellCircle::FIRST,
            matrix: "arcane".to_string(),
            spellcasting_skill: SkillId::Arcana,
            notes: None,
            tags: vec![],
        });
        character.spellcasting.abilities.push(SpellcastingAbility {
            id: "wizardry".to_string(),
            skill: SkillId::Arcana,
            attribute: AttributeKey::Intellect,
            casting_bonus: 0,
        });
        let issues = validate_character(&character);
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| !i.is_error));
        assert_eq!(
            issues[0].to_string(),
            "warning: spell 'Spark': casting skill 'arcana' is not on the sheet"
        );
    }

    #[test]
    fn spell_points_over_max_warns() {
        let mut character = Character::new("Ana");
        character.spellcasting.power_points = PowerPoints { current: 4, max: 4 };
        character.spellcasting.spell_points = 6;
        let issues = validate_character(&character);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("(6) above the power-point maximum (4)"));
    }
}
