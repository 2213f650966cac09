//! Spell learning chance.
//!
//! The chance is a percentage: five points per point of the mental
//! attribute, shifted by the skill, the spell's circle, and free-form
//! modifiers, then clamped to 1..=99 so learning is never certain and never
//! hopeless.

use ficha_core::{Character, Skill, SpellCircle, SpellcastingAbility};
use serde::{Deserialize, Serialize};

use crate::builder::{LEARNING_USE, resolve_use};

/// Lowest possible chance.
pub const MIN_CHANCE: u8 = 1;
/// Highest possible chance.
pub const MAX_CHANCE: u8 = 99;

const CIRCLE_MODIFIERS: [i32; SpellCircle::MAX as usize] = [30, 10, 0, -10, -20, -30, -50, -70];

/// Everything the learning roll depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningInput {
    /// Value of the mental attribute used to learn.
    pub mental_attribute: i32,
    /// Skill modifier, in percentage points.
    pub skill_modifier: i32,
    /// Circle of the spell being learned.
    pub circle: SpellCircle,
    /// Whether this would be the character's first spell.
    pub is_first_spell: bool,
    /// Bonus or penalty from spells already known.
    pub known_spells_modifier: i32,
    /// Bonus or penalty from the spell's matrix.
    pub matrix_modifier: i32,
    /// Anything else.
    pub other_modifiers: i32,
}

impl LearningInput {
    /// Input with no free-form modifiers.
    pub fn new(mental_attribute: i32, skill_modifier: i32, circle: SpellCircle) -> Self {
        Self {
            mental_attribute,
            skill_modifier,
            circle,
            is_first_spell: false,
            known_spells_modifier: 0,
            matrix_modifier: 0,
            other_modifiers: 0,
        }
    }

    /// Input for learning through `ability`.
    ///
    /// The casting skill's `learning` use may substitute the attribute. A
    /// character with no known spells is learning their first.
    pub fn for_ability(
        character: &Character,
        ability: &SpellcastingAbility,
        circle: SpellCircle,
    ) -> Self {
        let skill = character.skill(ability.skill);
        let attribute = skill
            .and_then(|s| s.custom_use(LEARNING_USE))
            .and_then(|u| u.attribute)
            .unwrap_or(ability.attribute);
        Self {
            is_first_spell: character.spellcasting.known_spells.is_empty(),
            ..Self::new(
                character.attributes.get(attribute),
                learning_skill_modifier(skill),
                circle,
            )
        }
    }
}

/// Modifier for the spell's circle. First-circle spells lose their bonus
/// when they would be the first spell learned.
pub fn circle_modifier(circle: SpellCircle, is_first_spell: bool) -> i32 {
    if circle == SpellCircle::FIRST && is_first_spell {
        return 0;
    }
    CIRCLE_MODIFIERS[usize::from(circle.get() - 1)]
}

/// The skill's learning modifier.
///
/// This is the dice value of the skill's `learning` use (or its general
/// dice modifiers), reused directly as percentage points.
pub fn learning_skill_modifier(skill: Option<&Skill>) -> i32 {
    skill.map(|s| resolve_use(s, LEARNING_USE).dice).unwrap_or(0)
}

/// Percentage chance to learn a spell, in `1..=99`.
pub fn spell_learning_chance(input: &LearningInput) -> u8 {
    // Summed in i64 so any combination of i32 inputs still clamps.
    let raw = i64::from(input.mental_attribute) * 5
        + i64::from(input.skill_modifier)
        + i64::from(circle_modifier(input.circle, input.is_first_spell))
        + i64::from(input.known_spells_modifier)
        + i64::from(input.matrix_modifier)
        + i64::from(input.other_modifiers);
    let chance = raw.clamp(i64::from(MIN_CHANCE), i64::from(MAX_CHANCE));
    tracing::debug!(raw, chance, circle = %input.circle, "learning chance");
    u8::try_from(chance).unwrap_or(MAX_CHANCE)
}
