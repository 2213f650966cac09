//! Pool builders.
//!
//! Skills, crafts, luck, and casting tests each compute a raw dice total in
//! their own way, then share one finishing rule: a total of zero or less
//! becomes a penalty roll (two dice, keep the lower), and a total above the
//! configured cap rolls only the cap while the formula still shows the full
//! total.

use ficha_core::{AttributeKey, Attributes, Craft, Luck, Skill, SpellcastingAbility};
use serde::{Deserialize, Serialize};

use crate::config::RulesConfig;
use crate::dice::Die;
use crate::modifier::{self, Situation};
use crate::signature::skill_signature_bonus;
use crate::table::{craft_multiplier_for, die_size_for, luck_data_for};

/// Name of the custom use consulted by casting pools.
pub const CASTING_USE: &str = "casting";
/// Name of the custom use consulted by spell learning.
pub const LEARNING_USE: &str = "learning";

/// Dice rolled for a penalty roll.
pub const PENALTY_DICE: u32 = 2;

/// A dice pool ready to roll.
///
/// `dice_count` is what is physically rolled and is never below 1. Pools
/// larger than the configured cap (8 by default) are rolled at the cap,
/// while `formula_text` keeps the uncapped total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DicePoolSpec {
    /// Dice to roll.
    pub dice_count: u32,
    /// The total before the penalty and cap rules.
    pub raw_total: i32,
    /// Die size.
    pub die: Die,
    /// Roll two, keep the lower.
    pub is_penalty_roll: bool,
    /// Human-readable pool, e.g. `"3d10"` or `"2d8 (menor)"`.
    pub formula_text: String,
}

impl DicePoolSpec {
    /// Apply the penalty and cap rules to a raw total.
    pub fn from_raw(raw_total: i32, die: Die, config: &RulesConfig) -> Self {
        if raw_total <= 0 {
            return Self {
                dice_count: PENALTY_DICE,
                raw_total,
                die,
                is_penalty_roll: true,
                formula_text: format!("{PENALTY_DICE}{die} (menor)"),
            };
        }
        let raw = raw_total.unsigned_abs();
        Self {
            dice_count: raw.min(config.max_pool_size),
            raw_total,
            die,
            is_penalty_roll: false,
            formula_text: format!("{raw}{die}"),
        }
    }

    /// Returns true if dice were dropped by the pool cap.
    pub fn is_capped(&self) -> bool {
        !self.is_penalty_roll && self.raw_total.unsigned_abs() > self.dice_count
    }
}

impl std::fmt::Display for DicePoolSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.formula_text)
    }
}

/// A skill's modifier as seen through one of its named uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UseResolution {
    /// Attribute the use substitutes, if any.
    pub attribute: Option<AttributeKey>,
    /// Dice the skill contributes.
    pub dice: i32,
}

/// Resolve a skill's modifier for a named use.
///
/// If the skill declares a use with exactly this name, its dice modifiers
/// and bonus replace the general modifiers. Otherwise the general dice
/// modifiers apply.
pub fn resolve_use(skill: &Skill, use_name: &str) -> UseResolution {
    match skill.custom_use(use_name) {
        Some(custom) => UseResolution {
            attribute: custom.attribute,
            dice: modifier::dice_sum(&custom.modifiers).saturating_add(custom.bonus),
        },
        None => UseResolution {
            attribute: None,
            dice: modifier::dice_sum(&skill.modifiers),
        },
    }
}

/// Pool for a standard skill test.
pub fn build_skill_pool(
    skill: &Skill,
    attributes: &Attributes,
    level: u32,
    situation: &Situation,
    config: &RulesConfig,
) -> DicePoolSpec {
    let aggregate = modifier::aggregate(skill, situation);
    let raw = attributes
        .get(skill.key_attribute)
        .saturating_add(aggregate.dice)
        .saturating_add(skill_signature_bonus(skill, level));
    let spec = DicePoolSpec::from_raw(raw, die_size_for(skill.proficiency), config);
    tracing::debug!(skill = %skill.id, raw, formula = %spec, "built skill pool");
    spec
}

/// Pool for a craft test. The die comes from the wrapping skill's rank.
pub fn build_craft_pool(
    craft: &Craft,
    skill: &Skill,
    attributes: &Attributes,
    level: u32,
    config: &RulesConfig,
) -> DicePoolSpec {
    let raw = attributes
        .get(craft.attribute)
        .saturating_add(craft.dice_modifier)
        .saturating_add(skill_signature_bonus(skill, level));
    let spec = DicePoolSpec::from_raw(raw, die_size_for(skill.proficiency), config);
    tracing::debug!(craft = %craft.name, raw, formula = %spec, "built craft pool");
    spec
}

/// The legacy flat craft modifier: attribute times level multiplier plus
/// the numeric modifier.
pub fn legacy_craft_modifier(craft: &Craft, attributes: &Attributes) -> i32 {
    attributes
        .get(craft.attribute)
        .saturating_mul(craft_multiplier_for(craft.level))
        .saturating_add(craft.numeric_modifier)
}

/// Pool for a luck roll. `skill` is the luck skill, consulted for the
/// signature bonus only.
pub fn build_luck_pool(
    luck: &Luck,
    skill: &Skill,
    level: u32,
    config: &RulesConfig,
) -> DicePoolSpec {
    let data = luck_data_for(luck.level);
    let raw = data
        .dice
        .saturating_add(luck.dice_modifier)
        .saturating_add(skill_signature_bonus(skill, level));
    let spec = DicePoolSpec::from_raw(raw, data.die, config);
    tracing::debug!(luck = luck.level, raw, formula = %spec, "built luck pool");
    spec
}

/// Pool for a spell-casting test.
///
/// The die follows the casting skill's rank. A skill missing from `skills`
/// contributes no dice and rolls d6.
pub fn build_casting_pool(
    ability: &SpellcastingAbility,
    skills: &[Skill],
    attributes: &Attributes,
    config: &RulesConfig,
) -> DicePoolSpec {
    let skill = skills.iter().find(|s| s.id == ability.skill);
    let resolved = skill.map(|s| resolve_use(s, CASTING_USE)).unwrap_or_default();
    let attribute = resolved.attribute.unwrap_or(ability.attribute);
    let raw = attributes
        .get(attribute)
        .saturating_add(resolved.dice)
        .saturating_add(ability.casting_bonus);
    let die = die_size_for(skill.map(|s| s.proficiency).unwrap_or_default());
    let spec = DicePoolSpec::from_raw(raw, die, config);
    tracing::debug!(ability = %ability.id, raw, formula = %spec, "built casting pool");
    spec
}

#[cfg(test)]
mod tests {
    use super::*;
    use ficha_core::{CraftLevel, CustomUse, Modifier, ProficiencyLevel, SkillId};

    fn attrs() -> Attributes {
        Attributes {
            might: 3,
            agility: 2,
            vigor: 1,
            intellect: 4,
            perception: 2,
            essence: 3,
        }
    }

    fn plain_pool(skill: &Skill, level: u32) -> DicePoolSpec {
        build_skill_pool(
            skill,
            &attrs(),
            level,
            &Situation::default(),
            &RulesConfig::default(),
        )
    }

    #[test]
    fn plain_skill_pool() {
        let skill = Skill::new(SkillId::Acrobatics).with_proficiency(ProficiencyLevel::Versed);
        let spec = plain_pool(&skill, 1);
        assert_eq!(
            spec,
            DicePoolSpec {
                dice_count: 2,
                raw_total: 2,
                die: Die::D10,
                is_penalty_roll: false,
                formula_text: "2d10".to_string(),
            }
        );
    }

    #[test]
    fn overload_drives_pool_to_penalty() {
        let skill = Skill::new(SkillId::Acrobatics).with_proficiency(ProficiencyLevel::Versed);
        let situation = Situation {
            is_overloaded: true,
            ..Situation::default()
        };
        let spec = build_skill_pool(&skill, &attrs(), 1, &situation, &RulesConfig::default());
        assert_eq!(spec.raw_total, 0);
        assert_eq!(spec.dice_count, 2);
        assert!(spec.is_penalty_roll);
        assert_eq!(spec.formula_text, "2d10 (menor)");
    }

    #[test]
    fn deeply_negative_still_two_dice() {
        let spec = DicePoolSpec::from_raw(-9, Die::D6, &RulesConfig::default());
        assert!(spec.is_penalty_roll);
        assert_eq!(spec.dice_count, 2);
        assert_eq!(spec.formula_text, "2d6 (menor)");
    }

    #[test]
    fn cap_keeps_formula_uncapped() {
        let spec = DicePoolSpec::from_raw(11, Die::D12, &RulesConfig::default());
        assert_eq!(spec.dice_count, 8);
        assert_eq!(spec.formula_text, "11d12");
        assert!(spec.is_capped());

        let exact = DicePoolSpec::from_raw(8, Die::D12, &RulesConfig::default());
        assert_eq!(exact.dice_count, 8);
        assert!(!exact.is_capped());
    }

    #[test]
    fn signature_adds_dice() {
        let skill = Skill::new(SkillId::Melee)
            .with_proficiency(ProficiencyLevel::Adept)
            .signature();
        let spec = plain_pool(&skill, 10);
        assert_eq!(spec.raw_total, 3 + 2);
        assert_eq!(spec.formula_text, "5d8");
    }

    #[test]
    fn numeric_modifiers_do_not_touch_pool() {
        let skill = Skill::new(SkillId::Lore)
            .with_modifier(Modifier::numeric("library", 5))
            .with_modifier(Modifier::dice("notes", 1));
        let spec = plain_pool(&skill, 0);
        assert_eq!(spec.raw_total, 5);
    }

    #[test]
    fn craft_pool_uses_skill_rank_and_craft_attribute() {
        let mut craft = Craft::new("Smithing", AttributeKey::Might)
            .with_level(CraftLevel::try_from(5).unwrap());
        craft.dice_modifier = 1;
        let skill = Skill::new(SkillId::Craft)
            .with_proficiency(ProficiencyLevel::Master)
            .signature();
        let spec = build_craft_pool(&craft, &skill, &attrs(), 5, &RulesConfig::default());
        assert_eq!(spec.raw_total, 3 + 1 + 1);
        assert_eq!(spec.die, Die::D12);
    }

    #[test]
    fn legacy_craft_modifier_example() {
        let mut craft = Craft::new("Carving", AttributeKey::Intellect)
            .with_level(CraftLevel::try_from(3).unwrap());
        craft.numeric_modifier = 2;
        assert_eq!(legacy_craft_modifier(&craft, &attrs()), 4 * 2 + 2);
    }

    #[test]
    fn luck_pool() {
        let luck = Luck {
            level: 4,
            dice_modifier: -1,
            numeric_modifier: 0,
        };
        let skill = Skill::new(SkillId::Luck);
        let spec = build_luck_pool(&luck, &skill, 3, &RulesConfig::default());
        assert_eq!(spec.formula_text, "3d8");

        let zero = Luck::default();
        let spec = build_luck_pool(&zero, &skill, 3, &RulesConfig::default());
        assert!(spec.is_penalty_roll);
        assert_eq!(spec.die, Die::D6);
    }

    #[test]
    fn extreme_totals_saturate_and_cap() {
        let luck = Luck {
            level: 800_000_000,
            dice_modifier: i32::MAX,
            numeric_modifier: 0,
        };
        let skill = Skill::new(SkillId::Luck).signature();
        let spec = build_luck_pool(&luck, &skill, 30, &RulesConfig::default());
        assert_eq!(spec.raw_total, i32::MAX);
        assert_eq!(spec.dice_count, 8);

        let cursed = Skill::new(SkillId::Lore).with_modifier(Modifier::dice("curse", i32::MIN));
        let spec = plain_pool(&cursed, 1);
        assert!(spec.is_penalty_roll);
        assert_eq!(spec.dice_count, 2);
    }

    #[test]
    fn casting_pool_falls_back_to_general_modifiers() {
        let arcana = Skill::new(SkillId::Arcana)
            .with_proficiency(ProficiencyLevel::Versed)
            .with_modifier(Modifier::dice("focus", 1));
        let ability = SpellcastingAbility {
            id: "wizardry".to_string(),
            skill: SkillId::Arcana,
            attribute: AttributeKey::Intellect,
            casting_bonus: 1,
        };
        let spec = build_casting_pool(&ability, &[arcana], &attrs(), &RulesConfig::default());
        assert_eq!(spec.raw_total, 4 + 1 + 1);
        assert_eq!(spec.die, Die::D10);
    }

    #[test]
    fn casting_use_supersedes_general_modifiers() {
        let arcana = Skill::new(SkillId::Arcana)
            .with_modifier(Modifier::dice("focus", 1))
            .with_custom_use(CustomUse {
                name: CASTING_USE.to_string(),
                attribute: Some(AttributeKey::Essence),
                modifiers: vec![Modifier::dice("wand", 2)],
                bonus: 1,
            });
        let ability = SpellcastingAbility {
            id: "wizardry".to_string(),
            skill: SkillId::Arcana,
            attribute: AttributeKey::Intellect,
            casting_bonus: 0,
        };
        let spec = build_casting_pool(&ability, &[arcana], &attrs(), &RulesConfig::default());
        assert_eq!(spec.raw_total, 3 + 2 + 1);
    }

    #[test]
    fn casting_without_skill() {
        let ability = SpellcastingAbility {
            id: "prayer".to_string(),
            skill: SkillId::Mysticism,
            attribute: AttributeKey::Essence,
            casting_bonus: 0,
        };
        let spec = build_casting_pool(&ability, &[], &attrs(), &RulesConfig::default());
        assert_eq!(spec.raw_total, 3);
        assert_eq!(spec.die, Die::D6);
    }

    #[test]
    fn resolve_use_exact_name_only() {
        let skill = Skill::new(SkillId::Arcana)
            .with_modifier(Modifier::dice("focus", 2))
            .with_custom_use(CustomUse {
                name: LEARNING_USE.to_string(),
                attribute: None,
                modifiers: vec![],
                bonus: 5,
            });
        assert_eq!(resolve_use(&skill, LEARNING_USE).dice, 5);
        assert_eq!(resolve_use(&skill, CASTING_USE).dice, 2);
        assert_eq!(resolve_use(&skill, "Learning").dice, 2);
    }
}
