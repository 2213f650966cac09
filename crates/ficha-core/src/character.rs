use serde::{Deserialize, Serialize};

use crate::attribute::{AttributeKey, Attributes};
use crate::craft::{Craft, CraftId, Luck};
use crate::error::CoreResult;
use crate::skill::{Skill, SkillId};
use crate::spell::SpellState;

/// A temporary state that penalizes rolls of one attribute (or all of them).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveCondition {
    /// Condition name (e.g. "Poisoned").
    pub name: String,
    /// Attribute affected; `None` affects every attribute.
    #[serde(default)]
    pub attribute: Option<AttributeKey>,
    /// Dice removed from affected pools.
    pub dice_penalty: u32,
}

impl ActiveCondition {
    /// Returns true if this condition penalizes rolls of `key`.
    pub fn affects(&self, key: AttributeKey) -> bool {
        self.attribute.is_none_or(|a| a == key)
    }
}

/// Weight class of the armor currently worn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArmorClass {
    /// No armor.
    #[default]
    None,
    /// Leather and padding.
    Light,
    /// Mail.
    Medium,
    /// Plate.
    Heavy,
}

/// Lineage size category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeCategory {
    /// Smaller than a human.
    Small,
    /// Human-sized.
    #[default]
    Medium,
    /// Larger than a human.
    Large,
}

/// A character snapshot as persisted by the sheet manager.
///
/// The rules engine only reads this record; every computed value is
/// returned to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Character name.
    pub name: String,
    /// Character level.
    #[serde(default)]
    pub level: u32,
    /// Attribute scores.
    pub attributes: Attributes,
    /// Skills on the sheet.
    #[serde(default)]
    pub skills: Vec<Skill>,
    /// User-defined crafts.
    #[serde(default)]
    pub crafts: Vec<Craft>,
    /// Luck state.
    #[serde(default)]
    pub luck: Luck,
    /// Spellcasting state.
    #[serde(default)]
    pub spellcasting: SpellState,
    /// Active conditions.
    #[serde(default)]
    pub conditions: Vec<ActiveCondition>,
    /// Armor currently worn.
    #[serde(default)]
    pub equipped_armor: ArmorClass,
    /// Lineage size.
    #[serde(default)]
    pub size: SizeCategory,
    /// Whether the character carries more than their load limit.
    #[serde(default)]
    pub is_overloaded: bool,
    /// Whether the instrument or kit needed by instrument skills is at hand.
    #[serde(default)]
    pub has_required_instrument: bool,
}

impl Character {
    /// Create a level-0 character with all attributes at zero.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Parse a character snapshot from JSON.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> CoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Set the level.
    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    /// Set the attribute record.
    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Add a skill.
    pub fn with_skill(mut self, skill: Skill) -> Self {
        self.skills.push(skill);
        self
    }

    /// Add a craft.
    pub fn with_craft(mut self, craft: Craft) -> Self {
        self.crafts.push(craft);
        self
    }

    /// Look up a skill.
    pub fn skill(&self, id: SkillId) -> Option<&Skill> {
        self.skills.iter().find(|s| s.id == id)
    }

    /// Look up a craft.
    pub fn craft(&self, id: CraftId) -> Option<&Craft> {
        self.crafts.iter().find(|c| c.id == id)
    }
}
