use std::fmt;

use serde::{Deserialize, Serialize};

use crate::attribute::AttributeKey;
use crate::error::CoreError;
use crate::modifier::Modifier;
use crate::skill::SkillId;

/// A spell's power tier, 1 through 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct SpellCircle(u8);

impl SpellCircle {
    /// The lowest circle.
    pub const FIRST: SpellCircle = SpellCircle(1);
    /// The highest circle.
    pub const MAX: u8 = 8;

    /// The raw circle number.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Every circle, lowest first.
    pub fn all() -> impl Iterator<Item = SpellCircle> {
        (1..=Self::MAX).map(SpellCircle)
    }
}

impl TryFrom<u8> for SpellCircle {
    type Error = CoreError;

    fn try_from(circle: u8) -> Result<Self, Self::Error> {
        if (1..=Self::MAX).contains(&circle) {
            Ok(Self(circle))
        } else {
            Err(CoreError::SpellCircle(circle))
        }
    }
}

impl From<SpellCircle> for u8 {
    fn from(circle: SpellCircle) -> Self {
        circle.0
    }
}

impl fmt::Display for SpellCircle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = match self.0 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        };
        write!(f, "{}{suffix} circle", self.0)
    }
}

/// A user-declared pairing of a casting skill with an attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellcastingAbility {
    /// Identifier chosen by the user.
    pub id: String,
    /// Skill whose modifiers feed the casting pool.
    pub skill: SkillId,
    /// Attribute rolled for the casting test.
    pub attribute: AttributeKey,
    /// Flat dice bonus.
    #[serde(default)]
    pub casting_bonus: i32,
}

/// A spell the character has learned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnownSpell {
    /// Catalogue identifier.
    pub spell_id: String,
    /// Display name.
    pub name: String,
    /// Power tier.
    pub circle: SpellCircle,
    /// Magical tradition the spell belongs to.
    pub matrix: String,
    /// Skill used to cast it.
    pub spellcasting_skill: SkillId,
    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
    /// Free-form tags.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// The power-point pool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerPoints {
    /// Points left.
    pub current: i32,
    /// Pool size.
    pub max: i32,
}

/// Everything the spellcasting calculators read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellState {
    /// Declared casting abilities.
    #[serde(default)]
    pub abilities: Vec<SpellcastingAbility>,
    /// Learned spells.
    #[serde(default)]
    pub known_spells: Vec<KnownSpell>,
    /// Power points (PP).
    #[serde(default)]
    pub power_points: PowerPoints,
    /// Spell points (PF) currently banked.
    #[serde(default)]
    pub spell_points: i32,
    /// Modifiers to power regeneration per round.
    #[serde(default)]
    pub power_modifiers: Vec<Modifier>,
}

impl SpellState {
    /// Look up a casting ability by ID.
    pub fn ability(&self, id: &str) -> Option<&SpellcastingAbility> {
        self.abilities.iter().find(|a| a.id == id)
    }

    /// Sum of all power regeneration modifiers.
    pub fn power_modifier_sum(&self) -> i32 {
        self.power_modifiers
            .iter()
            .map(Modifier::value)
            .fold(0, i32::saturating_add)
    }
}
