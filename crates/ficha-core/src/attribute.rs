use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// One of the six attribute keys of the current rule revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeKey {
    /// Raw physical power.
    Might,
    /// Speed and coordination.
    Agility,
    /// Health and stamina.
    Vigor,
    /// Reasoning and memory. The mental attribute for spell learning.
    Intellect,
    /// Awareness and intuition.
    Perception,
    /// Inner force. Feeds power regeneration.
    Essence,
}

impl AttributeKey {
    /// Every attribute key, in sheet order.
    pub const ALL: [AttributeKey; 6] = [
        Self::Might,
        Self::Agility,
        Self::Vigor,
        Self::Intellect,
        Self::Perception,
        Self::Essence,
    ];

    /// The lowercase key used in records and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Might => "might",
            Self::Agility => "agility",
            Self::Vigor => "vigor",
            Self::Intellect => "intellect",
            Self::Perception => "perception",
            Self::Essence => "essence",
        }
    }
}

impl fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttributeKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == lower)
            .ok_or_else(|| CoreError::UnknownAttribute(s.to_string()))
    }
}

/// The fixed attribute record. Every key is always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    /// Might score.
    pub might: i32,
    /// Agility score.
    pub agility: i32,
    /// Vigor score.
    pub vigor: i32,
    /// Intellect score.
    pub intellect: i32,
    /// Perception score.
    pub perception: i32,
    /// Essence score.
    pub essence: i32,
}

impl Attributes {
    /// Look up one attribute value.
    pub fn get(&self, key: AttributeKey) -> i32 {
        match key {
            AttributeKey::Might => self.might,
            AttributeKey::Agility => self.agility,
            AttributeKey::Vigor => self.vigor,
            AttributeKey::Intellect => self.intellect,
            AttributeKey::Perception => self.perception,
            AttributeKey::Essence => self.essence,
        }
    }

    /// Set one attribute value.
    pub fn set(&mut self, key: AttributeKey, value: i32) {
        let slot = match key {
            AttributeKey::Might => &mut self.might,
            AttributeKey::Agility => &mut self.agility,
            AttributeKey::Vigor => &mut self.vigor,
            AttributeKey::Intellect => &mut self.intellect,
            AttributeKey::Perception => &mut self.perception,
            AttributeKey::Essence => &mut self.essence,
        };
        *slot = value;
    }

    /// Builder-style variant of [`Attributes::set`].
    pub fn with(mut self, key: AttributeKey, value: i32) -> Self {
        self.set(key, value);
        self
    }
}
