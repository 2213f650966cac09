//! Modifier aggregation.
//!
//! A skill pool's dice count is shifted by the skill's own dice modifiers
//! and by situational penalties (overload, armor, missing instrument,
//! missing training, conditions, size). Every source contributes at most
//! one signed delta and all deltas are summed, so the order sources are
//! collected in never changes the result.

use ficha_core::{
    ActiveCondition, ArmorClass, Character, Modifier, ModifierTarget, ProficiencyLevel,
    SizeCategory, Skill, SkillId, SkillTraits,
};
use serde::{Deserialize, Serialize};

/// Dice lost to overload on carry-sensitive skills.
pub const OVERLOAD_PENALTY: i32 = -2;
/// Dice lost when an instrument skill is used without its instrument.
pub const MISSING_INSTRUMENT_PENALTY: i32 = -2;
/// Dice lost when a training-gated skill is attempted untrained.
pub const MISSING_PROFICIENCY_PENALTY: i32 = -1;

/// Where a dice delta came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModifierSource {
    /// A modifier listed on the skill.
    Explicit(String),
    /// Carrying too much.
    Overloaded,
    /// Worn armor.
    Armor(ArmorClass),
    /// Instrument skill without an instrument.
    MissingInstrument,
    /// Training-gated skill at lay rank.
    MissingProficiency,
    /// The worst active condition on the key attribute.
    Condition(String),
    /// Lineage size.
    Size(SizeCategory),
}

impl std::fmt::Display for ModifierSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Explicit(name) => write!(f, "{name}"),
            Self::Overloaded => write!(f, "overloaded"),
            Self::Armor(class) => write!(f, "{class:?} armor"),
            Self::MissingInstrument => write!(f, "no instrument"),
            Self::MissingProficiency => write!(f, "untrained"),
            Self::Condition(name) => write!(f, "{name}"),
            Self::Size(size) => write!(f, "{size:?} size"),
        }
    }
}

/// One signed dice delta and its source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contribution {
    /// Where the delta came from.
    pub source: ModifierSource,
    /// Dice added (negative for penalties).
    pub dice: i32,
}

/// Situational state the caller supplies for a roll.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Situation {
    /// Carrying more than the load limit.
    pub is_overloaded: bool,
    /// Armor currently worn.
    pub equipped_armor: ArmorClass,
    /// The instrument for instrument skills is at hand.
    pub has_required_instrument: bool,
    /// Lineage size.
    pub size: SizeCategory,
    /// Active conditions.
    pub conditions: Vec<ActiveCondition>,
}

impl Situation {
    /// Read the situational flags off a character snapshot.
    pub fn from_character(character: &Character) -> Self {
        Self {
            is_overloaded: character.is_overloaded,
            equipped_armor: character.equipped_armor,
            has_required_instrument: character.has_required_instrument,
            size: character.size,
            conditions: character.conditions.clone(),
        }
    }

    /// Every non-zero situational delta that applies to `skill`.
    pub fn penalties(&self, skill: &Skill) -> Vec<Contribution> {
        let traits = skill.id.traits();
        let mut out = Vec::new();
        let mut push = |source, dice| {
            if dice != 0 {
                tracing::trace!(skill = %skill.id, %source, dice, "situational modifier");
                out.push(Contribution { source, dice });
            }
        };

        if traits.contains(SkillTraits::CARRY_PENALTY) {
            if self.is_overloaded {
                push(ModifierSource::Overloaded, OVERLOAD_PENALTY);
            }
            push(
                ModifierSource::Armor(self.equipped_armor),
                armor_penalty(self.equipped_armor),
            );
        }

        if traits.contains(SkillTraits::REQUIRES_INSTRUMENT) && !self.has_required_instrument {
            push(ModifierSource::MissingInstrument, MISSING_INSTRUMENT_PENALTY);
        }

        if traits.contains(SkillTraits::REQUIRES_PROFICIENCY)
            && skill.proficiency == ProficiencyLevel::Lay
        {
            push(ModifierSource::MissingProficiency, MISSING_PROFICIENCY_PENALTY);
        }

        if let Some(worst) = self
            .conditions
            .iter()
            .filter(|c| c.affects(skill.key_attribute))
            .max_by_key(|c| c.dice_penalty)
        {
            let dice = -i32::try_from(worst.dice_penalty).unwrap_or(i32::MAX);
            push(ModifierSource::Condition(worst.name.clone()), dice);
        }

        if traits.contains(SkillTraits::SIZE_SENSITIVE) {
            push(ModifierSource::Size(self.size), size_modifier(skill.id, self.size));
        }

        out
    }
}

/// Dice lost to worn armor on carry-sensitive skills.
pub fn armor_penalty(armor: ArmorClass) -> i32 {
    match armor {
        ArmorClass::None | ArmorClass::Light => 0,
        ArmorClass::Medium => -1,
        ArmorClass::Heavy => -2,
    }
}

/// Size shift for size-sensitive skills.
pub fn size_modifier(skill: SkillId, size: SizeCategory) -> i32 {
    match (skill, size) {
        (SkillId::Stealth, SizeCategory::Small) | (SkillId::Athletics, SizeCategory::Large) => 1,
        (SkillId::Stealth, SizeCategory::Large) | (SkillId::Athletics, SizeCategory::Small) => -1,
        _ => 0,
    }
}

/// Sum of the dice modifiers plus every situational delta.
pub fn aggregate_dice(modifiers: &[Modifier], situational: &[Contribution]) -> i32 {
    situational
        .iter()
        .map(|c| c.dice)
        .fold(dice_sum(modifiers), i32::saturating_add)
}

/// Sum of the dice modifiers only.
pub fn dice_sum(modifiers: &[Modifier]) -> i32 {
    modifiers
        .iter()
        .filter(|m| m.target() == ModifierTarget::Dice)
        .map(Modifier::value)
        .fold(0, i32::saturating_add)
}

/// Sum of the legacy numeric modifiers only.
pub fn aggregate_numeric(modifiers: &[Modifier]) -> i32 {
    modifiers
        .iter()
        .filter(|m| m.target() == ModifierTarget::Numeric)
        .map(Modifier::value)
        .fold(0, i32::saturating_add)
}

/// The aggregated modifiers for one skill, with a per-source breakdown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aggregate {
    /// Net dice delta.
    pub dice: i32,
    /// Net legacy numeric bonus.
    pub numeric: i32,
    /// Every dice contribution, explicit modifiers first.
    pub contributions: Vec<Contribution>,
}

/// Aggregate a skill's own modifiers with the situation.
pub fn aggregate(skill: &Skill, situation: &Situation) -> Aggregate {
    let situational = situation.penalties(skill);
    let dice = aggregate_dice(&skill.modifiers, &situational);
    let contributions = skill
        .modifiers
        .iter()
        .filter(|m| m.affects_dice() && m.value() != 0)
        .map(|m| Contribution {
            source: ModifierSource::Explicit(m.name().to_string()),
            dice: m.value(),
        })
        .chain(situational)
        .collect();

    Aggregate {
        dice,
        numeric: aggregate_numeric(&skill.modifiers),
        contributions,
    }
}
