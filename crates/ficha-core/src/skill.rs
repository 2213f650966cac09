use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::attribute::AttributeKey;
use crate::craft::CraftId;
use crate::error::CoreError;
use crate::modifier::Modifier;

/// A skill training rank. Ordered from least to most trained.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ProficiencyLevel {
    /// Untrained.
    #[default]
    Lay,
    /// Some training.
    Adept,
    /// Thorough training.
    Versed,
    /// Mastery.
    Master,
}

impl ProficiencyLevel {
    /// Every rank, lowest first.
    pub const ALL: [ProficiencyLevel; 4] = [Self::Lay, Self::Adept, Self::Versed, Self::Master];
}

impl fmt::Display for ProficiencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lay => write!(f, "lay"),
            Self::Adept => write!(f, "adept"),
            Self::Versed => write!(f, "versed"),
            Self::Master => write!(f, "master"),
        }
    }
}

bitflags! {
    /// Static rule metadata attached to each skill.
    ///
    /// These decide which situational penalties can apply to a skill.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct SkillTraits: u8 {
        /// Used in combat.
        const COMBAT               = 1 << 0;
        /// Hindered by overload and worn armor.
        const CARRY_PENALTY        = 1 << 1;
        /// Needs an instrument or tool kit at hand.
        const REQUIRES_INSTRUMENT  = 1 << 2;
        /// Penalized when attempted without training.
        const REQUIRES_PROFICIENCY = 1 << 3;
        /// Shifted by the character's size category.
        const SIZE_SENSITIVE       = 1 << 4;
    }
}

/// Every skill on the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillId {
    /// Climbing, swimming, jumping.
    Athletics,
    /// Balance and tumbling.
    Acrobatics,
    /// Moving unseen.
    Stealth,
    /// Close combat.
    Melee,
    /// Missile combat.
    Ranged,
    /// Avoiding blows.
    Dodge,
    /// Resisting fatigue and poison.
    Endurance,
    /// Noticing things.
    Perception,
    /// Living off the land.
    Survival,
    /// Treating wounds.
    Medicine,
    /// Academic knowledge.
    Lore,
    /// Music and theatre.
    Performance,
    /// Convincing others.
    Persuasion,
    /// Frightening others.
    Intimidation,
    /// Learned magic.
    Arcana,
    /// Devotional magic.
    Mysticism,
    /// A selected user-defined craft.
    Craft,
    /// Fortune.
    Luck,
}

struct SkillInfo {
    name: &'static str,
    key: AttributeKey,
    traits: SkillTraits,
}

const fn info(name: &'static str, key: AttributeKey, traits: SkillTraits) -> SkillInfo {
    SkillInfo { name, key, traits }
}

// Indexed by `SkillId as usize`; keep in declaration order.
const SKILL_TABLE: [SkillInfo; SkillId::ALL.len()] = [
    info(
        "athletics",
        AttributeKey::Might,
        SkillTraits::CARRY_PENALTY.union(SkillTraits::SIZE_SENSITIVE),
    ),
    info("acrobatics", AttributeKey::Agility, SkillTraits::CARRY_PENALTY),
    info(
        "stealth",
        AttributeKey::Agility,
        SkillTraits::CARRY_PENALTY.union(SkillTraits::SIZE_SENSITIVE),
    ),
    info("melee", AttributeKey::Might, SkillTraits::COMBAT),
    info("ranged", AttributeKey::Agility, SkillTraits::COMBAT),
    info("dodge", AttributeKey::Agility, SkillTraits::COMBAT.union(SkillTraits::CARRY_PENALTY)),
    info("endurance", AttributeKey::Vigor, SkillTraits::empty()),
    info("perception", AttributeKey::Perception, SkillTraits::empty()),
    info("survival", AttributeKey::Perception, SkillTraits::empty()),
    info("medicine", AttributeKey::Intellect, SkillTraits::REQUIRES_PROFICIENCY),
    info("lore", AttributeKey::Intellect, SkillTraits::empty()),
    info("performance", AttributeKey::Essence, SkillTraits::REQUIRES_INSTRUMENT),
    info("persuasion", AttributeKey::Essence, SkillTraits::empty()),
    info("intimidation", AttributeKey::Might, SkillTraits::empty()),
    info("arcana", AttributeKey::Intellect, SkillTraits::REQUIRES_PROFICIENCY),
    info("mysticism", AttributeKey::Essence, SkillTraits::REQUIRES_PROFICIENCY),
    info("craft", AttributeKey::Intellect, SkillTraits::empty()),
    info("luck", AttributeKey::Essence, SkillTraits::empty()),
];

impl SkillId {
    /// Every skill, in sheet order.
    pub const ALL: [SkillId; 18] = [
        Self::Athletics,
        Self::Acrobatics,
        Self::Stealth,
        Self::Melee,
        Self::Ranged,
        Self::Dodge,
        Self::Endurance,
        Self::Perception,
        Self::Survival,
        Self::Medicine,
        Self::Lore,
        Self::Performance,
        Self::Persuasion,
        Self::Intimidation,
        Self::Arcana,
        Self::Mysticism,
        Self::Craft,
        Self::Luck,
    ];

    fn info(self) -> &'static SkillInfo {
        &SKILL_TABLE[self as usize]
    }

    /// The lowercase skill name used in records and on the command line.
    pub fn name(self) -> &'static str {
        self.info().name
    }

    /// The attribute a freshly created skill of this kind is tested with.
    pub fn default_attribute(self) -> AttributeKey {
        self.info().key
    }

    /// Static rule metadata for this skill.
    pub fn traits(self) -> SkillTraits {
        self.info().traits
    }

    /// Parse a skill from its name, ignoring case.
    pub fn from_name(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|id| id.name() == lower)
    }
}

impl fmt::Display for SkillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SkillId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| CoreError::UnknownSkill(s.to_string()))
    }
}

/// A named alternate bundle for a skill (e.g. a casting-specific use).
///
/// When a caller asks for a use by name and the skill declares it, the
/// bundle's modifiers and bonus replace the skill's general modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomUse {
    /// Exact name the use is looked up by.
    pub name: String,
    /// Attribute that replaces the caller's default attribute, if any.
    #[serde(default)]
    pub attribute: Option<AttributeKey>,
    /// Modifiers that replace the skill's general modifiers.
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    /// Flat dice bonus added on top of the modifiers.
    #[serde(default)]
    pub bonus: i32,
}

/// A trained skill on a character sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    /// Which skill this is.
    pub id: SkillId,
    /// The attribute rolled with this skill.
    pub key_attribute: AttributeKey,
    /// Training rank.
    #[serde(default)]
    pub proficiency: ProficiencyLevel,
    /// Whether this is the character's signature skill.
    #[serde(default)]
    pub is_signature: bool,
    /// General modifiers.
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    /// For the craft skill: the selected craft.
    #[serde(default)]
    pub selected_craft: Option<CraftId>,
    /// Named alternate bundles.
    #[serde(default)]
    pub custom_uses: Vec<CustomUse>,
}

impl Skill {
    /// Create an untrained skill tested with its default attribute.
    pub fn new(id: SkillId) -> Self {
        Self {
            id,
            key_attribute: id.default_attribute(),
            proficiency: ProficiencyLevel::Lay,
            is_signature: false,
            modifiers: Vec::new(),
            selected_craft: None,
            custom_uses: Vec::new(),
        }
    }

    /// Set the training rank.
    pub fn with_proficiency(mut self, proficiency: ProficiencyLevel) -> Self {
        self.proficiency = proficiency;
        self
    }

    /// Mark as the signature skill.
    pub fn signature(mut self) -> Self {
        self.is_signature = true;
        self
    }

    /// Add a general modifier.
    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    /// Add a named custom use.
    pub fn with_custom_use(mut self, custom_use: CustomUse) -> Self {
        self.custom_uses.push(custom_use);
        self
    }

    /// Look up a custom use by exact name.
    pub fn custom_use(&self, name: &str) -> Option<&CustomUse> {
        self.custom_uses.iter().find(|u| u.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_matches_declaration_order() {
        for id in SkillId::ALL {
            let json = serde_json::to_string(&id).unwrap();
            assert_eq!(json, format!("\"{}\"", id.name()));
        }
    }

    #[test]
    fn traits_lookup() {
        assert!(SkillId::Athletics.traits().contains(SkillTraits::CARRY_PENALTY));
        assert!(SkillId::Stealth.traits().contains(SkillTraits::SIZE_SENSITIVE));
        assert!(SkillId::Performance.traits().contains(SkillTraits::REQUIRES_INSTRUMENT));
        assert!(SkillId::Arcana.traits().contains(SkillTraits::REQUIRES_PROFICIENCY));
        assert!(SkillId::Melee.traits().contains(SkillTraits::COMBAT));
        assert!(SkillId::Lore.traits().is_empty());
    }

    #[test]
    fn proficiency_is_ordered() {
        assert!(ProficiencyLevel::Lay < ProficiencyLevel::Adept);
        assert!(ProficiencyLevel::Versed < ProficiencyLevel::Master);
        let mut sorted = ProficiencyLevel::ALL;
        sorted.sort();
        assert_eq!(sorted, ProficiencyLevel::ALL);
    }

    #[test]
    fn parse_skill_name() {
        assert_eq!("Stealth".parse::<SkillId>().unwrap(), SkillId::Stealth);
        assert_eq!(SkillId::from_name("LUCK"), Some(SkillId::Luck));
        assert!(matches!(
            "juggling".parse::<SkillId>(),
            Err(CoreError::UnknownSkill(_))
        ));
    }

    #[test]
    fn custom_use_exact_match() {
        let skill = Skill::new(SkillId::Arcana).with_custom_use(CustomUse {
            name: "casting".to_string(),
            attribute: None,
            modifiers: vec![],
            bonus: 1,
        });
        assert!(skill.custom_use("casting").is_some());
        assert!(skill.custom_use("Casting").is_none());
        assert!(skill.custom_use("learning").is_none());
    }

    #[test]
    fn new_skill_uses_default_attribute() {
        let skill = Skill::new(SkillId::Endurance);
        assert_eq!(skill.key_attribute, AttributeKey::Vigor);
        assert_eq!(skill.proficiency, ProficiencyLevel::Lay);
        assert!(!skill.is_signature);
    }
}
