//! Flat d20 checks of the legacy revision.
//!
//! The legacy revision ignores dice modifiers and situational penalties.
//! It reads only attribute multipliers, numeric modifiers, and the flat
//! signature bonus.

use ficha_core::{Attributes, Craft, Luck, Skill, SpellcastingAbility};

use super::FlatCheck;
use crate::builder::{CASTING_USE, legacy_craft_modifier};
use crate::modifier::aggregate_numeric;
use crate::signature::legacy_signature_bonus;
use crate::table::{legacy_proficiency_multiplier, luck_data_for};

fn signature_points(skill: &Skill, level: u32) -> i32 {
    if skill.is_signature {
        legacy_signature_bonus(level)
    } else {
        0
    }
}

/// Skill check: attribute times rank multiplier, plus numeric modifiers and
/// the signature bonus.
pub fn legacy_skill_check(skill: &Skill, attributes: &Attributes, level: u32) -> FlatCheck {
    let modifier = attributes
        .get(skill.key_attribute)
        .saturating_mul(legacy_proficiency_multiplier(skill.proficiency))
        .saturating_add(aggregate_numeric(&skill.modifiers))
        .saturating_add(signature_points(skill, level));
    tracing::debug!(skill = %skill.id, modifier, "built legacy skill check");
    FlatCheck::d20(modifier)
}

/// Craft check from the legacy craft modifier.
pub fn legacy_craft_check(
    craft: &Craft,
    skill: &Skill,
    attributes: &Attributes,
    level: u32,
) -> FlatCheck {
    let modifier =
        legacy_craft_modifier(craft, attributes).saturating_add(signature_points(skill, level));
    tracing::debug!(craft = %craft.name, modifier, "built legacy craft check");
    FlatCheck::d20(modifier)
}

/// Luck check from the luck table's flat bonus.
pub fn legacy_luck_check(luck: &Luck, skill: &Skill, level: u32) -> FlatCheck {
    let modifier = luck_data_for(luck.level)
        .bonus
        .saturating_add(luck.numeric_modifier)
        .saturating_add(signature_points(skill, level));
    FlatCheck::d20(modifier)
}

/// Casting check. A missing casting skill counts as lay rank with no
/// modifiers.
///
/// The skill's `casting` use applies as in the dice-pool revision: its
/// attribute replaces the ability's, its numeric modifiers replace the
/// skill's general ones, and its bonus is added as flat points.
pub fn legacy_casting_check(
    ability: &SpellcastingAbility,
    skills: &[Skill],
    attributes: &Attributes,
) -> FlatCheck {
    let skill = skills.iter().find(|s| s.id == ability.skill);
    let casting = skill.and_then(|s| s.custom_use(CASTING_USE));
    let attribute = casting.and_then(|u| u.attribute).unwrap_or(ability.attribute);
    let numeric = match (casting, skill) {
        (Some(u), _) => aggregate_numeric(&u.modifiers).saturating_add(u.bonus),
        (None, Some(s)) => aggregate_numeric(&s.modifiers),
        (None, None) => 0,
    };
    let proficiency = skill.map(|s| s.proficiency).unwrap_or_default();
    let modifier = attributes
        .get(attribute)
        .saturating_mul(legacy_proficiency_multiplier(proficiency))
        .saturating_add(numeric)
        .saturating_add(ability.casting_bonus);
    tracing::debug!(ability = %ability.id, %attribute, modifier, "built legacy casting check");
    FlatCheck::d20(modifier)
}
