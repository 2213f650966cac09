use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::attribute::AttributeKey;
use crate::error::CoreError;

/// Unique identifier for a user-defined craft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CraftId(pub Uuid);

impl CraftId {
    /// Generate a new random craft ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CraftId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CraftId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// A craft's training level, 0 through 5.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct CraftLevel(u8);

impl CraftLevel {
    /// Highest craft level.
    pub const MAX: u8 = 5;

    /// The raw level.
    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for CraftLevel {
    type Error = CoreError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        if level <= Self::MAX {
            Ok(Self(level))
        } else {
            Err(CoreError::CraftLevel(level))
        }
    }
}

impl From<CraftLevel> for u8 {
    fn from(level: CraftLevel) -> Self {
        level.0
    }
}

/// A user-defined, profession-like skill with its own level and attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Craft {
    /// Identifier the craft skill selects by.
    #[serde(default)]
    pub id: CraftId,
    /// Display name (e.g. "Blacksmithing").
    pub name: String,
    /// Training level.
    #[serde(default)]
    pub level: CraftLevel,
    /// Attribute rolled with this craft.
    pub attribute: AttributeKey,
    /// Dice added to the pool.
    #[serde(default)]
    pub dice_modifier: i32,
    /// Flat bonus for the legacy revision.
    #[serde(default)]
    pub numeric_modifier: i32,
    /// Free-form notes.
    #[serde(default)]
    pub description: Option<String>,
}

impl Craft {
    /// Create a level-0 craft with a fresh ID.
    pub fn new(name: impl Into<String>, attribute: AttributeKey) -> Self {
        Self {
            id: CraftId::new(),
            name: name.into(),
            level: CraftLevel::default(),
            attribute,
            dice_modifier: 0,
            numeric_modifier: 0,
            description: None,
        }
    }

    /// Set the craft level.
    pub fn with_level(mut self, level: CraftLevel) -> Self {
        self.level = level;
        self
    }
}

/// The character's luck state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Luck {
    /// Luck level. 0 through 7 are tabled; higher levels extrapolate.
    pub level: u32,
    /// Dice added to luck pools.
    #[serde(default)]
    pub dice_modifier: i32,
    /// Flat bonus for the legacy revision.
    #[serde(default)]
    pub numeric_modifier: i32,
}
